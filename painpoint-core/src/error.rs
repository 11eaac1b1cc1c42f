use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Language resource error: {0}")]
    Resource(#[from] ResourceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Problems loading the tokenizer or stopword list. These never abort an
/// analysis; callers substitute the minimal fallback instead.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Stopword list unavailable at {path}: {reason}")]
    StopwordsUnavailable { path: String, reason: String },

    #[error("Stopword list at {path} contains no words")]
    EmptyStopwordList { path: String },

    #[error("Tokenizer unavailable: {reason}")]
    TokenizerUnavailable { reason: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Configuration validation failed: {reason}")]
    ValidationFailed { reason: String },

    #[error("Configuration parsing error: {0}")]
    Parse(#[from] toml::de::Error),
}
