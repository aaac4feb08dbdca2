use clap::Parser;
use projgraph_lib::application::{AppConfig, Cli, Commands, EnvironmentConfig};
use projgraph_lib::primitives::{ColorIntent, LogFormat, LogLevel, LogOutput, OutputType};

#[test]
fn test_config_default_creation() {
    let config = AppConfig::default();

    assert!(config.log_level <= 4);
    assert_eq!(config.log_output, LogOutput::Stderr);
    assert_eq!(config.color, ColorIntent::Auto);
}

#[test]
fn test_config_merging_integration() {
    let base_config = AppConfig::default();
    let override_config = AppConfig {
        log_level: 3,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };

    let merged = base_config.merge_with(override_config);

    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.color, ColorIntent::Never);
    assert_eq!(merged.log_format, LogFormat::Text);
}

#[test]
fn test_full_command_line_resolution() {
    let cli = Cli::try_parse_from([
        "projgraph",
        "--log-level",
        "2",
        "--log-output",
        "stdout",
        "analyze",
        "Root.sln",
        "--output-type",
        "html-document",
    ])
    .unwrap();

    let env = EnvironmentConfig {
        force_color: Some("1".to_string()),
        ..EnvironmentConfig::default()
    };
    let config = AppConfig::resolve(&cli, &env).unwrap();
    let logger = config.to_logger_config(false);

    assert_eq!(logger.level, LogLevel::Info);
    assert_eq!(logger.output, LogOutput::Stdout);
    // FORCE_COLOR wins over an undetected terminal
    assert!(logger.color);

    match cli.command {
        Some(Commands::Analyze(args)) => {
            assert_eq!(args.output_type, OutputType::HtmlDocument);
            assert!(args.output_settings().output_each_item);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_invalid_level_string_is_rejected_by_cli() {
    assert!(Cli::try_parse_from(["projgraph", "--log-level", "loud"]).is_err());
}
