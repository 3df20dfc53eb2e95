//! Tests for CLI argument parsing.

use clap::Parser;
use mail_auth_check::Config;
use std::path::PathBuf;

#[test]
fn test_defaults() {
    let config = Config::try_parse_from(["mail_auth_check"]).expect("bare invocation should parse");
    assert!(config.domains.is_empty());
    assert_eq!(config.file, None);
    assert!(!config.spf);
    assert!(!config.dmarc);
    assert!(!config.dkim);
    assert!(!config.verbose);
}

#[test]
fn test_positional_domains_keep_order() {
    let config = Config::try_parse_from(["mail_auth_check", "a.com", "b.com", "-s"])
        .expect("should parse");
    assert_eq!(config.domains, vec!["a.com", "b.com"]);
    assert!(config.spf);
}

#[test]
fn test_grouped_short_flags() {
    let config =
        Config::try_parse_from(["mail_auth_check", "-sdk", "example.com"]).expect("should parse");
    assert!(config.spf);
    assert!(config.dmarc);
    assert!(config.dkim);
    assert_eq!(config.domains, vec!["example.com"]);
}

#[test]
fn test_long_flags() {
    let config = Config::try_parse_from([
        "mail_auth_check",
        "example.com",
        "--spf",
        "--dmarc",
        "--dkim",
        "--verbose",
    ])
    .expect("should parse");
    assert!(config.spf && config.dmarc && config.dkim && config.verbose);
}

#[test]
fn test_file_option() {
    let config = Config::try_parse_from(["mail_auth_check", "-s", "-f", "domains.txt"])
        .expect("should parse");
    assert_eq!(config.file, Some(PathBuf::from("domains.txt")));
}

#[test]
fn test_capital_v_is_verbose_not_version() {
    // The auto version flag is disabled so -V stays bound to --verbose
    let config = Config::try_parse_from(["mail_auth_check", "-V", "-s", "example.com"])
        .expect("should parse");
    assert!(config.verbose);
}

#[test]
fn test_log_level_option() {
    let config = Config::try_parse_from(["mail_auth_check", "--log-level", "debug", "-s", "a.com"])
        .expect("should parse");
    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::Debug
    );
}
