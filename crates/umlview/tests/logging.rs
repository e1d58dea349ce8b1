//! Tests for logging functionality
//!
//! Only one global subscriber can be installed per process, so after the
//! first successful call every later one is expected to fail gracefully.

use std::str::FromStr;

use umlview::core::logging::{init_logging, resolve_format, resolve_level, LogFormat};

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
    assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
    assert_eq!(LogFormat::from_str(" JSON ").unwrap(), LogFormat::Json);
    assert!(LogFormat::from_str("invalid").is_err());
}

#[test]
fn test_log_format_variants() {
    let variants = LogFormat::variants();
    assert_eq!(variants.len(), 3);
    for name in variants {
        assert_eq!(LogFormat::from_str(name).unwrap().to_string(), *name);
    }
}

#[test]
fn test_explicit_arguments_win() {
    assert_eq!(resolve_level(Some("umlview=trace")), "umlview=trace");
    assert_eq!(resolve_format(Some("pretty")), Ok(LogFormat::Pretty));
    assert!(resolve_format(Some("xml")).is_err());
}

#[test]
fn test_init_logging_rejects_unknown_format() {
    assert!(init_logging(Some("info"), Some("xml")).is_err());
}

#[test]
fn test_init_logging_repeated_calls_do_not_panic() {
    let _ = init_logging(Some("warn"), Some("compact"));
    let _ = init_logging(Some("debug"), Some("pretty"));
    let _ = init_logging(Some("off"), Some("json"));
}
