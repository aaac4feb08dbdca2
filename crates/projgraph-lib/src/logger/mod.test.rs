use super::*;

#[test]
fn test_default_filter_targets_our_crates() {
    let filter = default_filter(LogLevel::Debug);
    assert!(filter.starts_with("projgraph_lib=debug,projgraph=debug"));
    assert!(filter.contains("reqwest=warn"));
    assert!(filter.ends_with(",debug"));
}

#[test]
fn test_default_filter_parses() {
    for level in [LogLevel::Error, LogLevel::Info, LogLevel::Trace] {
        assert!(EnvFilter::try_new(default_filter(level)).is_ok());
    }
}

#[test]
fn test_second_init_is_rejected() {
    let config = LoggerConfig {
        level: LogLevel::Error,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
        color: false,
    };

    let _ = Logger::init(config.clone());
    assert!(Logger::init(config).is_err());
}
