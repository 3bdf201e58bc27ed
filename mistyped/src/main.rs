use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use commands::command_argument_builder;
use mistyped::{AppState, server};
use mistyped_core::{Keymap, generate_candidates, validate};
use mistyped_scanner::transport::DEFAULT_TIMEOUT_SECS;
use mistyped_scanner::{HttpTransport, Prober, parse_accepted};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::sync::Arc;
use tracing::{Level, error, info};

mod commands;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");
    let verbose = chosen_command.get_flag("verbose");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let result = match chosen_command.subcommand() {
        Some(("serve", sub_matches)) => handle_serve(sub_matches).await,
        Some(("candidates", sub_matches)) => handle_candidates(sub_matches),
        Some(("check", sub_matches)) => handle_check(sub_matches).await,
        // No subcommand provided, just show the banner
        _ => return,
    };

    if let Err(e) = result {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn handle_serve(sub_matches: &ArgMatches) -> Result<()> {
    let port = sub_matches.get_one::<u16>("port").copied().unwrap_or(8080);
    let bind = sub_matches
        .get_one::<IpAddr>("bind")
        .copied()
        .unwrap_or(IpAddr::from([0, 0, 0, 0]));

    let state = Arc::new(build_state(sub_matches)?);
    let listener = server::bind(SocketAddr::new(bind, port)).await?;

    tokio::select! {
        _ = server::serve(listener, state) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down");
        }
    }

    Ok(())
}

fn handle_candidates(sub_matches: &ArgMatches) -> Result<()> {
    let host = validated_host(sub_matches)?;
    let keymap = load_keymap(sub_matches)?;

    for candidate in generate_candidates(&host, &keymap) {
        println!("{}", candidate);
    }

    Ok(())
}

async fn handle_check(sub_matches: &ArgMatches) -> Result<()> {
    let host = validated_host(sub_matches)?;
    let state = build_state(sub_matches)?;

    let result = state.check_host(&host).await;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

fn validated_host(sub_matches: &ArgMatches) -> Result<String> {
    let url = sub_matches
        .get_one::<String>("URL")
        .context("A URL is required")?;
    Ok(validate(url)?)
}

fn build_state(sub_matches: &ArgMatches) -> Result<AppState<HttpTransport>> {
    let keymap = load_keymap(sub_matches)?;

    let timeout = sub_matches
        .get_one::<u64>("timeout")
        .copied()
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    let accept = sub_matches
        .get_one::<String>("accept")
        .map(String::as_str)
        .unwrap_or("200,204,403");

    let transport = HttpTransport::with_timeout(timeout)?;
    let mut prober = Prober::new(transport).with_accepted(parse_accepted(accept)?);
    if let Some(max_concurrency) = sub_matches.get_one::<usize>("max-concurrency") {
        prober = prober.with_max_concurrency(*max_concurrency);
    }

    info!(
        "Timeout: {}s, concurrency: {}",
        timeout,
        prober
            .max_concurrency()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "unbounded".to_string())
    );

    Ok(AppState::new(keymap, prober))
}

fn load_keymap(sub_matches: &ArgMatches) -> Result<Keymap> {
    match sub_matches.get_one::<String>("keymap") {
        Some(path) => {
            let expanded = shellexpand::tilde(path);
            let path = Path::new(expanded.as_ref());
            let keymap = Keymap::load(path)
                .with_context(|| format!("Failed to load keymap {}", path.display()))?;
            info!("Using keymap {} ({} keys)", path.display(), keymap.len());
            Ok(keymap)
        }
        None => Ok(Keymap::qwertz()),
    }
}

fn print_banner() {
    println!(
        "{}",
        r#"
           _     _                       _
 _ __ ___ (_)___| |_ _   _ _ __   ___  __| |
| '_ ` _ \| / __| __| | | | '_ \ / _ \/ _` |
| | | | | | \__ \ |_| |_| | |_) |  __/ (_| |
|_| |_| |_|_|___/\__|\__, | .__/ \___|\__,_|
                     |___/|_|"#
            .bright_cyan()
            .bold()
    );
    println!(
        "  {} {}\n",
        "typo domain prober".bright_white(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
