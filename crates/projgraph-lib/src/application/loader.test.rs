use super::*;
use crate::primitives::{ColorIntent, LogFormat};
use clap::Parser;

#[test]
fn test_resolve_defaults() {
    let cli = Cli::try_parse_from(["projgraph"]).unwrap();
    let config = AppConfig::resolve(&cli, &EnvironmentConfig::default()).unwrap();
    assert_eq!(config.log_level, 0);
    assert_eq!(config.color, ColorIntent::Auto);
}

#[test]
fn test_env_conventions_apply_below_cli() {
    let no_color = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..EnvironmentConfig::default()
    };

    let cli = Cli::try_parse_from(["projgraph"]).unwrap();
    let config = AppConfig::resolve(&cli, &no_color).unwrap();
    assert_eq!(config.color, ColorIntent::Never);

    let cli = Cli::try_parse_from(["projgraph", "--color", "always"]).unwrap();
    let config = AppConfig::resolve(&cli, &no_color).unwrap();
    assert_eq!(config.color, ColorIntent::Always);
}

#[test]
fn test_cli_values_reach_config() {
    let cli = Cli::try_parse_from(["projgraph", "--log-level", "3", "--log-format", "json", "version"]).unwrap();
    let config = AppConfig::resolve(&cli, &EnvironmentConfig::default()).unwrap();
    assert_eq!(config.log_level, 3);
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn test_resolve_validates() {
    let cli = Cli::try_parse_from(["projgraph", "--log-level", "7"]).unwrap();
    assert!(AppConfig::resolve(&cli, &EnvironmentConfig::default()).is_err());
}
