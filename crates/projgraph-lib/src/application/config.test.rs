use super::*;

#[test]
fn test_config_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.log_level, 0);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.log_output, LogOutput::Stderr);
    assert_eq!(config.color, ColorIntent::Auto);
}

#[test]
fn test_config_merging() {
    let base = AppConfig {
        log_format: LogFormat::Json,
        ..AppConfig::default()
    };
    let override_config = AppConfig {
        log_level: 4,
        color: ColorIntent::Always,
        ..AppConfig::default()
    };

    let merged = base.merge_with(override_config);
    assert_eq!(merged.log_level, 4);
    assert_eq!(merged.color, ColorIntent::Always);
    // defaults in the override do not clobber the base
    assert_eq!(merged.log_format, LogFormat::Json);
}

#[test]
fn test_logger_config_resolves_color() {
    let config = AppConfig {
        log_level: 2,
        ..AppConfig::default()
    };
    let logger = config.to_logger_config(true);
    assert_eq!(logger.level, LogLevel::Info);
    assert!(logger.color);

    let never = AppConfig {
        color: ColorIntent::Never,
        ..AppConfig::default()
    };
    assert!(!never.to_logger_config(true).color);
}

#[test]
fn test_validate_rejects_out_of_range_level() {
    let config = AppConfig {
        log_level: 9,
        ..AppConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("out of range 0-4"));
    assert!(AppConfig::default().validate().is_ok());
}
