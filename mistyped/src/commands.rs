use crate::CLAP_STYLING;
use clap::{Arg, arg, command};
use std::net::IpAddr;

fn probe_arguments() -> Vec<Arg> {
    vec![
        arg!(--"timeout" <SECONDS>)
            .required(false)
            .help("Per-request timeout in seconds")
            .value_parser(clap::value_parser!(u64))
            .default_value("5"),
        arg!(-t --"max-concurrency" <NUM_PROBES>)
            .required(false)
            .help("Maximum number of probes in flight (default: all candidates at once)")
            .value_parser(clap::value_parser!(usize)),
        arg!(--"accept" <CODES>)
            .required(false)
            .help("Comma separated status codes that mark a candidate as available")
            .default_value("200,204,403"),
        arg!(-k --"keymap" <PATH>)
            .required(false)
            .help("Path to a keyboard adjacency file (default: built-in QWERTZ table)"),
    ]
}

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("mistyped")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("mistyped")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(arg!(-v --"verbose" "Log every probe outcome").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("serve")
                .about("Serve the /checkurl/ endpoint over HTTP")
                .arg(
                    arg!(-p --"port" <PORT>)
                        .required(false)
                        .help("Port to listen on")
                        .value_parser(clap::value_parser!(u16))
                        .default_value("8080"),
                )
                .arg(
                    arg!(-b --"bind" <ADDRESS>)
                        .required(false)
                        .help("Address to listen on")
                        .value_parser(clap::value_parser!(IpAddr))
                        .default_value("0.0.0.0"),
                )
                .args(probe_arguments()),
        )
        .subcommand(
            command!("candidates")
                .about("Print the typo candidates for a URL without probing them")
                .arg(arg!(<URL> "The URL or domain to mistype"))
                .arg(
                    arg!(-k --"keymap" <PATH>)
                        .required(false)
                        .help("Path to a keyboard adjacency file (default: built-in QWERTZ table)"),
                ),
        )
        .subcommand(
            command!("check")
                .about("Probe the typo candidates for a URL once and print the result as JSON")
                .arg(arg!(<URL> "The URL or domain to mistype"))
                .args(probe_arguments()),
        )
}
