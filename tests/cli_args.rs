//! CLI argument parsing tests.

use clap::Parser;
use roster::cli::{Cli, Command, DEFAULT_API_URL};

#[test]
fn test_cli_open_defaults_to_root() {
    let cli = Cli::parse_from(["roster", "open"]);

    assert!(!cli.json);
    match cli.command {
        Command::Open { path } => assert_eq!(path, "/"),
        _ => panic!("Expected Open command"),
    }
}

#[test]
fn test_cli_parses_open_with_path() {
    let cli = Cli::parse_from(["roster", "open", "/about"]);

    match cli.command {
        Command::Open { path } => assert_eq!(path, "/about"),
        _ => panic!("Expected Open command"),
    }
}

#[test]
fn test_cli_parses_record_subcommand() {
    let cli = Cli::parse_from(["roster", "record", "3", "--json"]);

    assert!(cli.json);
    match cli.command {
        Command::Record { index } => assert_eq!(index, 3),
        _ => panic!("Expected Record command"),
    }
}

#[test]
fn test_cli_url_flag_overrides_default() {
    let cli = Cli::parse_from([
        "roster",
        "--url",
        "https://randomuser.me/api/?seed=abc",
        "open",
    ]);

    assert_eq!(cli.url, "https://randomuser.me/api/?seed=abc");
}

#[test]
fn test_cli_url_default() {
    // Only meaningful when ROSTER_API_URL is not set in the test environment
    if std::env::var("ROSTER_API_URL").is_err() {
        let cli = Cli::parse_from(["roster", "routes"]);
        assert_eq!(cli.url, DEFAULT_API_URL);
        assert!(matches!(cli.command, Command::Routes));
    }
}

#[test]
fn test_cli_rejects_negative_index() {
    let result = Cli::try_parse_from(["roster", "record", "-1"]);
    assert!(result.is_err());
}
