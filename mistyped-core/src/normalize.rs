// Input normalization and validation for user supplied URLs

use crate::error::{CoreError, Result};
use url::{Host, Url};

/// Reduce a user supplied URL to a bare lowercase host.
///
/// Strips a leading `https://` or `http://`, a leading `www.`, and
/// everything from the first `/`, `?` or `#` onward. The result is
/// lowercased because keymap keys are lowercase.
pub fn normalize(input: &str) -> String {
    let value = input.trim();
    let value = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .unwrap_or(value);
    let value = value.strip_prefix("www.").unwrap_or(value);
    let value = value
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();

    value.to_lowercase()
}

/// Normalize `input` and check that it names a domain.
///
/// Returns the normalized host. Hosts with at most two segments are checked
/// as `http://www.<host>`. Longer ones are checked by parsing `input` itself,
/// so a subdomain needs an explicit scheme.
pub fn validate(input: &str) -> Result<String> {
    let host = normalize(input);
    if host.is_empty() {
        return Err(CoreError::InvalidInput("url is empty".to_string()));
    }

    let parsed = if host.split('.').count() <= 2 {
        Url::parse(&format!("http://www.{}", host))
    } else {
        Url::parse(input.trim())
    };

    let parsed = parsed
        .map_err(|e| CoreError::InvalidInput(format!("'{}': {}", input, e)))?;

    match parsed.host() {
        Some(Host::Domain(_)) => Ok(host),
        _ => Err(CoreError::InvalidInput(format!(
            "'{}' does not name a domain",
            input
        ))),
    }
}

pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}
