use cipherforge::config::{Config, FriedmanParams, KasiskiParams};
use cipherforge::error::CipherError;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::fs;
use tempfile::tempdir;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

fn parse(args: &[&str]) -> (Config, clap::ArgMatches) {
    let matches = TestCli::command().get_matches_from(args);
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    (cli.config, matches)
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.kasiski.kasiski_min_factor, 2);
    assert_eq!(config.kasiski.kasiski_max_factor, 10);
    assert_eq!(config.kasiski.key_tolerance, 15.0);
    assert_eq!(config.friedman.friedman_min_length, 2);
    assert_eq!(config.friedman.friedman_max_length, 10);
    assert!(config.validate().is_ok());

    let (parsed, _) = parse(&["test"]);
    assert_eq!(parsed, config);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "kasiski": { "key_tolerance": 30.0 } }"#).unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.kasiski.key_tolerance, 30.0);
    assert_eq!(config.kasiski.kasiski_max_factor, 10);
    assert_eq!(config.friedman, FriedmanParams::default());
}

#[test]
fn test_bad_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(Config::load_from_file(&path), Err(CipherError::Json(_))));

    let missing = dir.path().join("missing.json");
    assert!(matches!(
        Config::load_from_file(&missing),
        Err(CipherError::SourceRead(_))
    ));
}

#[test]
fn test_cli_overrides_only_explicit_values() {
    let (cli, matches) = parse(&["test", "--key-tolerance", "5", "--friedman-max-length", "6"]);

    let mut config = Config {
        kasiski: KasiskiParams {
            kasiski_max_factor: 12,
            key_tolerance: 30.0,
            ..Default::default()
        },
        ..Default::default()
    };
    config.merge_from_cli(&cli, &matches);

    assert_eq!(config.kasiski.key_tolerance, 5.0);
    assert_eq!(config.kasiski.kasiski_max_factor, 12);
    assert_eq!(config.friedman.friedman_max_length, 6);
    assert_eq!(config.friedman.friedman_min_length, 2);
}

#[test]
fn test_validation() {
    let mut config = Config::default();
    config.kasiski.kasiski_min_factor = 0;
    assert!(matches!(config.validate(), Err(CipherError::Config(_))));

    let mut config = Config::default();
    config.kasiski.key_tolerance = -1.0;
    assert!(matches!(config.validate(), Err(CipherError::Config(_))));

    let mut config = Config::default();
    config.friedman.friedman_min_length = 8;
    config.friedman.friedman_max_length = 4;
    assert!(matches!(config.validate(), Err(CipherError::Config(_))));
}
