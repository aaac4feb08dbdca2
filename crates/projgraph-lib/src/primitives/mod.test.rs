use super::*;

// =============================================================================
// LEVEL A: EXHAUSTIVE DATA TYPE TESTING
// =============================================================================

macro_rules! test_enum_completeness {
    ($enum_type:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            // Every variant must round-trip through its primary clap name
            for variant in <$enum_type>::value_variants() {
                let possible_value = variant.to_possible_value();
                assert!(
                    possible_value.is_some(),
                    "PossibleValue should exist for all variants"
                );

                let possible_val = possible_value.unwrap();
                let primary_name = possible_val.get_name();
                let parsed: Result<$enum_type, _> = primary_name.parse();
                assert!(
                    parsed.is_ok(),
                    "Primary name '{}' should parse correctly",
                    primary_name
                );
                assert_eq!(parsed.unwrap(), *variant);
            }
        }
    };
}

macro_rules! test_fromstr_aliases {
    ($enum_type:ty, $test_name:ident, $expected_mappings:expr) => {
        #[test]
        fn $test_name() {
            let mappings: &[(&str, $enum_type)] = &$expected_mappings;

            for (input, expected) in mappings {
                let parsed: Result<$enum_type, _> = input.parse();
                assert!(
                    parsed.is_ok(),
                    "Failed to parse '{}' for {}",
                    input,
                    stringify!($enum_type)
                );
                assert_eq!(parsed.unwrap(), *expected, "Wrong variant for '{}'", input);
            }
        }
    };
}

test_enum_completeness!(LogLevel, test_log_level_completeness);
test_enum_completeness!(LogFormat, test_log_format_completeness);
test_enum_completeness!(LogOutput, test_log_output_completeness);
test_enum_completeness!(ColorIntent, test_color_intent_completeness);
test_enum_completeness!(OutputType, test_output_type_completeness);

test_fromstr_aliases!(
    LogLevel,
    test_log_level_aliases,
    [
        ("error", LogLevel::Error),
        ("err", LogLevel::Error),
        ("fatal", LogLevel::Error),
        ("warn", LogLevel::Warning),
        ("warning", LogLevel::Warning),
        ("info", LogLevel::Info),
        ("debug", LogLevel::Debug),
        ("trace", LogLevel::Trace),
        ("verbose", LogLevel::Trace),
    ]
);

test_fromstr_aliases!(
    LogFormat,
    test_log_format_aliases,
    [
        ("text", LogFormat::Text),
        ("txt", LogFormat::Text),
        ("plain", LogFormat::Text),
        ("json", LogFormat::Json),
        ("JSON", LogFormat::Json),
        ("yaml", LogFormat::Yaml),
        ("yml", LogFormat::Yaml),
    ]
);

test_fromstr_aliases!(
    OutputType,
    test_output_type_names,
    [
        ("yuml-reference-list", OutputType::YumlReferenceList),
        ("yuml-url", OutputType::YumlUrl),
        ("yuml-image", OutputType::YumlImage),
        ("html-document", OutputType::HtmlDocument),
        ("HTML-Document", OutputType::HtmlDocument),
        ("Yuml-Url", OutputType::YumlUrl),
    ]
);

// =============================================================================
// LEVEL B: IMPLEMENTATION BEHAVIORS
// =============================================================================

#[test]
fn test_log_level_from_verbosity_boundary_conditions() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(1), LogLevel::Warning);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(3), LogLevel::Debug);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(u8::MAX), LogLevel::Trace);
}

#[test]
fn test_log_level_should_log_matrix() {
    let levels = [
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    for (i, message_level) in levels.iter().enumerate() {
        for (j, current_level) in levels.iter().enumerate() {
            assert_eq!(message_level.should_log(*current_level), i <= j);
        }
    }
}

#[test]
fn test_filter_strings() {
    assert_eq!(LogLevel::Warning.as_filter_str(), "warn");
    assert_eq!(LogLevel::Trace.as_filter_str(), "trace");
}

#[test]
fn test_color_intent_resolution() {
    assert!(ColorIntent::Always.resolve(false));
    assert!(!ColorIntent::Never.resolve(true));
    assert!(ColorIntent::Auto.resolve(true));
    assert!(!ColorIntent::Auto.resolve(false));
}

#[test]
fn test_unknown_value_reports_reason() {
    let err = "sideways".parse::<OutputType>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to parse configuration value 'sideways': invalid output type"
    );
}

#[test]
fn test_config_error_display() {
    let error = ConfigError::ValidationFailed {
        reason: "root file is empty".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Configuration validation failed: root file is empty"
    );
}
