//! End-to-end tests for the CLI: argument parsing through rendered output.

use clap::Parser;
use radix_cli::cli::{Cli, Command};
use radix_cli::config::CliConfig;
use radix_core::{AllConversionsResult, Base, ConversionResult};

fn plain() -> CliConfig {
    CliConfig::from_parts(0, true, None, false, false)
}

fn run(args: &[&str]) -> radix_cli::commands::Outcome {
    let cli = Cli::try_parse_from(args).unwrap();
    radix_cli::run(&cli, &plain()).unwrap()
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn test_base_names_and_radixes() {
    let cli = Cli::try_parse_from(["radix", "convert", "ff", "--from", "hex", "--to", "10"]).unwrap();
    match cli.command {
        Command::Convert(args) => {
            assert_eq!(args.from, Base::Hexadecimal);
            assert_eq!(args.to, Base::Decimal);
            assert_eq!(args.value, vec!["ff"]);
        }
        other => panic!("unexpected command {:?}", other),
    }
}

#[test]
fn test_defaults_decimal_to_binary() {
    let cli = Cli::try_parse_from(["radix", "convert", "5"]).unwrap();
    match cli.command {
        Command::Convert(args) => {
            assert_eq!(args.from, Base::Decimal);
            assert_eq!(args.to, Base::Binary);
        }
        other => panic!("unexpected command {:?}", other),
    }
}

#[test]
fn test_unsupported_base_is_usage_error() {
    assert!(Cli::try_parse_from(["radix", "convert", "5", "--from", "3"]).is_err());
    assert!(Cli::try_parse_from(["radix", "all", "5", "--from", "roman"]).is_err());
}

#[test]
fn test_global_flags() {
    let cli = Cli::try_parse_from(["radix", "systems", "-vv", "--plain"]).unwrap();
    assert_eq!(cli.verbose, 2);
    assert!(cli.plain);
}

// =============================================================================
// Commands
// =============================================================================

#[test]
fn test_convert_text() {
    let outcome = run(&["radix", "convert", "1010", "-f", "2", "-t", "16"]);
    assert!(outcome.is_valid);
    assert_eq!(outcome.exit_code(), 0);
    assert!(outcome.text.starts_with("1010 (Binary) = A (Hexadecimal)"));
    assert!(outcome.text.contains("Step 1: Convert 1010 (base 2) to decimal"));
}

#[test]
fn test_convert_words_joined() {
    let outcome = run(&["radix", "convert", "1111", "0000", "-f", "bin", "-t", "hex", "--no-steps"]);
    assert_eq!(outcome.text, "1111 0000 (Binary) = F0 (Hexadecimal)");
}

#[test]
fn test_convert_invalid_exit_code() {
    let outcome = run(&["radix", "convert", "G", "-f", "16", "-t", "10"]);
    assert!(!outcome.is_valid);
    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(outcome.text, "error: Invalid digit 'G' at position 0 for base 16");
}

#[test]
fn test_convert_json() {
    let outcome = run(&["radix", "convert", "FF", "-f", "16", "-t", "10", "--json"]);
    let parsed: ConversionResult = serde_json::from_str(&outcome.text).unwrap();
    assert!(parsed.is_valid);
    assert_eq!(parsed.result, "255");
    assert!(outcome.text.contains("\"isValid\": true"));
}

#[test]
fn test_all_text_and_json() {
    let outcome = run(&["radix", "all", "123"]);
    assert!(outcome.text.contains("Hexadecimal  7B"));

    let outcome = run(&["radix", "all", "123", "--json"]);
    let parsed: AllConversionsResult = serde_json::from_str(&outcome.text).unwrap();
    assert_eq!(parsed.binary, "1111011");
    assert_eq!(parsed.octal, "173");
}

#[test]
fn test_systems() {
    let outcome = run(&["radix", "systems"]);
    assert!(outcome.is_valid);
    assert!(outcome.text.contains("Decimal to Hexadecimal"));
}
