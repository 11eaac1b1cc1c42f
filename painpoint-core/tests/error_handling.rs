use painpoint_core::{ConfigError, CoreError, ErrorExt, ErrorReporter, ResourceError};

#[test]
fn test_error_codes() {
    let config_error = CoreError::Config(ConfigError::FileNotFound {
        path: "painpoint.toml".to_string(),
    });
    assert_eq!(config_error.error_code(), "CONFIG");

    let resource_error = CoreError::Resource(ResourceError::TokenizerUnavailable {
        reason: "pattern failed to compile".to_string(),
    });
    assert_eq!(resource_error.error_code(), "RESOURCE");

    let input_error = CoreError::InvalidInput {
        message: "expected an array".to_string(),
    };
    assert_eq!(input_error.error_code(), "INVALID_INPUT");

    let stopwords = ResourceError::EmptyStopwordList {
        path: "stop.txt".to_string(),
    };
    assert_eq!(stopwords.error_code(), "RESOURCE_STOPWORDS_EMPTY");
}

#[test]
fn test_degradable_errors() {
    let degradable = CoreError::Resource(ResourceError::StopwordsUnavailable {
        path: "/nope".to_string(),
        reason: "No such file or directory".to_string(),
    });
    assert!(degradable.is_degradable());

    let fatal = CoreError::Config(ConfigError::InvalidValue {
        field: "analysis.top_problems_count".to_string(),
        value: "-5".to_string(),
    });
    assert!(!fatal.is_degradable());
}

#[test]
fn test_user_friendly_messages() {
    let resource_error = CoreError::Resource(ResourceError::StopwordsUnavailable {
        path: "/etc/stopwords.txt".to_string(),
        reason: "permission denied".to_string(),
    });
    let message = resource_error.user_friendly_message();
    assert!(message.contains("/etc/stopwords.txt"));
    assert!(message.contains("minimal built-in list"));

    let config_error = CoreError::Config(ConfigError::InvalidValue {
        field: "analysis.min_problem_mentions".to_string(),
        value: "-1".to_string(),
    });
    let message = config_error.user_friendly_message();
    assert!(message.contains("analysis.min_problem_mentions"));
}

#[test]
fn test_from_conversions() {
    let error: CoreError = ResourceError::TokenizerUnavailable {
        reason: "test".to_string(),
    }
    .into();
    assert!(matches!(error, CoreError::Resource(_)));

    let parse_error = toml_parse_error();
    let error: CoreError = ConfigError::from(parse_error).into();
    assert!(matches!(error, CoreError::Config(ConfigError::Parse(_))));
}

fn toml_parse_error() -> toml::de::Error {
    toml::from_str::<toml::Value>("[analysis\n").unwrap_err()
}

#[test]
fn test_error_reporter() {
    let reporter = ErrorReporter::new()
        .with_error_reporting(true)
        .with_warning_reporting(true);
    let error = CoreError::Resource(ResourceError::TokenizerUnavailable {
        reason: "test".to_string(),
    });

    // This test just ensures the methods don't panic
    reporter.report_error(&error);
    reporter.report_warning(&error);
}
