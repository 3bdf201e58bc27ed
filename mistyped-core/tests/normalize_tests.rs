// Tests for URL normalization and validation

use mistyped_core::{CoreError, is_valid, normalize, validate};

#[test]
fn test_normalize_strips_scheme_www_and_path() {
    assert_eq!(normalize("https://www.example.com/path"), "example.com");
    assert_eq!(normalize("http://www.example.com"), "example.com");
    assert_eq!(normalize("www.example.com"), "example.com");
}

#[test]
fn test_normalize_trailing_slash() {
    assert_eq!(normalize("example.co.uk/"), "example.co.uk");
}

#[test]
fn test_normalize_query_and_fragment() {
    assert_eq!(normalize("example.com?ref=home"), "example.com");
    assert_eq!(normalize("https://example.com/a/b?c=d#e"), "example.com");
}

#[test]
fn test_normalize_lowercases_and_trims() {
    assert_eq!(normalize("  Example.COM  "), "example.com");
}

#[test]
fn test_normalize_keeps_subdomains() {
    assert_eq!(normalize("https://mail.google.com/inbox"), "mail.google.com");
}

#[test]
fn test_is_valid_bare_domain() {
    assert!(is_valid("example.com"));
    assert!(is_valid("localhost"));
    assert!(is_valid("https://www.example.com/path"));
}

#[test]
fn test_is_valid_subdomain_requires_scheme() {
    assert!(is_valid("https://mail.google.com/x"));
    assert!(is_valid("http://example.co.uk/"));
    assert!(!is_valid("mail.google.com"));
    assert!(!is_valid("example.co.uk"));
}

#[test]
fn test_validate_subdomain_returns_normalized_host() {
    assert_eq!(
        validate("https://www.mail.google.com/inbox").unwrap(),
        "mail.google.com"
    );
}

#[test]
fn test_is_valid_rejects_garbage() {
    assert!(!is_valid("not a url!!"));
    assert!(!is_valid(""));
    assert!(!is_valid("https://"));
}

#[test]
fn test_is_valid_rejects_ip_addresses() {
    assert!(!is_valid("192.168.0.1"));
}

#[test]
fn test_validate_returns_normalized_host() {
    assert_eq!(validate("https://www.Go.dev/doc").unwrap(), "go.dev");
}

#[test]
fn test_validate_error_kind() {
    let err = validate("not a url!!").unwrap_err();
    assert!(matches!(err, CoreError::InvalidInput(_)));
}
