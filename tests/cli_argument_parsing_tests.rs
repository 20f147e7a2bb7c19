//! Tests for CLI argument parsing and config layering

use caremap::types::config::CliArgs;
use caremap::AppConfig;
use clap::Parser;

#[test]
fn test_defaults_with_no_arguments() {
    let args = CliArgs::try_parse_from(["caremap"]).unwrap();

    assert!(args.config.is_none());
    assert!(args.space_types.is_empty());
    assert!(args.amenities.is_empty());
    assert!(args.search.is_none());
    assert!(args.export.is_none());
    assert!(!args.verbose);
    assert!(!args.debug);
    assert!(!args.dry_run);
    assert!(!args.print_config);
}

#[test]
fn test_comma_separated_facet_lists() {
    let args = CliArgs::try_parse_from([
        "caremap",
        "--space-types",
        "nursing_room,family_restroom",
        "--access-methods",
        "open_access",
        "--space-sizes",
        "spacious,narrow",
    ])
    .unwrap();

    assert_eq!(args.space_types, vec!["nursing_room", "family_restroom"]);
    assert_eq!(args.access_methods, vec!["open_access"]);
    assert_eq!(args.space_sizes, vec!["spacious", "narrow"]);
}

#[test]
fn test_amenities_and_search() {
    let args = CliArgs::try_parse_from([
        "caremap",
        "--amenities",
        "尿布檯,洗手台",
        "--search",
        "台北車站",
        "--export",
        "out.jsonl",
    ])
    .unwrap();

    assert_eq!(args.amenities, vec!["尿布檯", "洗手台"]);
    assert_eq!(args.search.as_deref(), Some("台北車站"));
    assert_eq!(args.export.as_deref(), Some("out.jsonl"));
}

#[test]
fn test_flag_arguments() {
    let args =
        CliArgs::try_parse_from(["caremap", "--verbose", "--dry-run", "--print-config"]).unwrap();

    assert!(args.verbose);
    assert!(args.dry_run);
    assert!(args.print_config);
}

#[test]
fn test_unknown_argument_is_rejected() {
    assert!(CliArgs::try_parse_from(["caremap", "--no-such-flag"]).is_err());
}

#[test]
fn test_config_file_layering() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "region_delta": 0.05, "submit_settle_ms": 500 }}"#).unwrap();
    let path = file.path().to_string_lossy().to_string();

    let args = CliArgs::try_parse_from(["caremap", "--config", &path]).unwrap();
    let config = AppConfig::from_cli_args(&args).unwrap();

    assert_eq!(config.region_delta, 0.05);
    assert_eq!(config.submit_settle_ms, 500);
    // Untouched fields keep their defaults
    assert_eq!(config.searched_center.latitude, 25.0478);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_config_file_is_an_error() {
    let args =
        CliArgs::try_parse_from(["caremap", "--config", "/no/such/config.json"]).unwrap();
    assert!(AppConfig::from_cli_args(&args).is_err());
}
