use crate::error::*;
use tracing::{error, info, warn};

pub trait ErrorExt {
    fn log_error(&self) -> &Self;
    fn log_warn(&self) -> &Self;
    /// True when a documented fallback can stand in for the failed operation.
    fn is_degradable(&self) -> bool;
    fn user_friendly_message(&self) -> String;
    fn error_code(&self) -> String;
}

impl ErrorExt for CoreError {
    fn log_error(&self) -> &Self {
        error!("CoreError: {}", self);
        match self {
            CoreError::Config(e) => {
                error!("Configuration error details: {:?}", e);
            }
            CoreError::Resource(e) => {
                error!("Language resource error details: {:?}", e);
            }
            _ => {}
        }
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("CoreError (warning): {}", self);
        self
    }

    fn is_degradable(&self) -> bool {
        match self {
            CoreError::Resource(e) => e.is_degradable(),
            CoreError::Config(e) => e.is_degradable(),
            _ => false,
        }
    }

    fn user_friendly_message(&self) -> String {
        match self {
            CoreError::Config(e) => e.user_friendly_message(),
            CoreError::Resource(e) => e.user_friendly_message(),
            CoreError::Io(_) => {
                "Could not read or write a file. Please check the path and permissions."
                    .to_string()
            }
            CoreError::Serialization(_) => {
                "The problem batch is not valid JSON. Expected an array of records.".to_string()
            }
            CoreError::InvalidInput { message } => format!("Invalid input: {}", message),
            CoreError::Internal { .. } => {
                "An unexpected error occurred. Please try again.".to_string()
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            CoreError::Config(_) => "CONFIG".to_string(),
            CoreError::Resource(_) => "RESOURCE".to_string(),
            CoreError::Io(_) => "IO".to_string(),
            CoreError::Serialization(_) => "SERIALIZATION".to_string(),
            CoreError::InvalidInput { .. } => "INVALID_INPUT".to_string(),
            CoreError::Internal { .. } => "INTERNAL".to_string(),
        }
    }
}

impl ErrorExt for ResourceError {
    fn log_error(&self) -> &Self {
        error!("ResourceError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("ResourceError (warning): {}", self);
        self
    }

    fn is_degradable(&self) -> bool {
        true
    }

    fn user_friendly_message(&self) -> String {
        match self {
            ResourceError::StopwordsUnavailable { path, .. } => format!(
                "Stopword list '{}' could not be loaded. Using the minimal built-in list.",
                path
            ),
            ResourceError::EmptyStopwordList { path } => format!(
                "Stopword list '{}' is empty. Using the minimal built-in list.",
                path
            ),
            ResourceError::TokenizerUnavailable { .. } => {
                "Word tokenizer unavailable. Falling back to whitespace splitting.".to_string()
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            ResourceError::StopwordsUnavailable { .. } => "RESOURCE_STOPWORDS_UNAVAILABLE",
            ResourceError::EmptyStopwordList { .. } => "RESOURCE_STOPWORDS_EMPTY",
            ResourceError::TokenizerUnavailable { .. } => "RESOURCE_TOKENIZER_UNAVAILABLE",
        }
        .to_string()
    }
}

impl ErrorExt for ConfigError {
    fn log_error(&self) -> &Self {
        error!("ConfigError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("ConfigError (warning): {}", self);
        self
    }

    fn is_degradable(&self) -> bool {
        false // a bad config needs the user to fix it
    }

    fn user_friendly_message(&self) -> String {
        match self {
            ConfigError::FileNotFound { path } => {
                format!("Configuration file '{}' not found.", path)
            }
            ConfigError::InvalidValue { field, value } => format!(
                "Invalid value '{}' for configuration field '{}'.",
                value, field
            ),
            ConfigError::ValidationFailed { reason } => {
                format!("Configuration is invalid: {}", reason)
            }
            ConfigError::Parse(_) => {
                "Configuration file format is invalid. Please check the TOML syntax.".to_string()
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            ConfigError::FileNotFound { .. } => "CONFIG_FILE_NOT_FOUND".to_string(),
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID_VALUE".to_string(),
            ConfigError::ValidationFailed { .. } => "CONFIG_VALIDATION_FAILED".to_string(),
            ConfigError::Parse(_) => "CONFIG_PARSE_ERROR".to_string(),
        }
    }
}

pub struct ErrorReporter {
    report_errors: bool,
    report_warnings: bool,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self {
            report_errors: true,
            report_warnings: true,
        }
    }

    pub fn with_error_reporting(mut self, enabled: bool) -> Self {
        self.report_errors = enabled;
        self
    }

    pub fn with_warning_reporting(mut self, enabled: bool) -> Self {
        self.report_warnings = enabled;
        self
    }

    pub fn report_error(&self, error: &CoreError) {
        if self.report_errors {
            error.log_error();
            info!("Error code: {}", error.error_code());
            info!("User message: {}", error.user_friendly_message());
        }
    }

    pub fn report_warning(&self, error: &CoreError) {
        if self.report_warnings {
            error.log_warn();
            if error.is_degradable() {
                info!("Continuing in degraded mode: {}", error.user_friendly_message());
            }
        }
    }
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}
