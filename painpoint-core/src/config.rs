//! Configuration loading and validation.
//!
//! Counts are parsed as signed integers so that a negative value is reported
//! as an invalid field rather than a generic TOML type error.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_MIN_PROBLEM_MENTIONS: usize = 3;
pub const DEFAULT_TOP_PROBLEMS_COUNT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisConfig {
    /// Minimum group size to surface.
    pub min_problem_mentions: usize,
    /// Maximum number of groups returned.
    pub top_problems_count: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_problem_mentions: DEFAULT_MIN_PROBLEM_MENTIONS,
            top_problems_count: DEFAULT_TOP_PROBLEMS_COUNT,
        }
    }
}

impl AnalysisConfig {
    pub fn with_min_problem_mentions(mut self, min: usize) -> Self {
        self.min_problem_mentions = min;
        self
    }

    pub fn with_top_problems_count(mut self, count: usize) -> Self {
        self.top_problems_count = count;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    #[default]
    Word,
    Whitespace,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopwordsKind {
    #[default]
    English,
    Minimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    pub tokenizer: TokenizerKind,
    pub stopwords: StopwordsKind,
    /// Newline-separated stopword file, takes precedence over `stopwords`.
    pub stopwords_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
    pub resources: ResourceConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawAppConfig {
    analysis: RawAnalysisConfig,
    resources: ResourceConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawAnalysisConfig {
    min_problem_mentions: Option<i64>,
    top_problems_count: Option<i64>,
}

fn non_negative(field: &str, value: Option<i64>, default: usize) -> Result<usize, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => usize::try_from(v).map_err(|_| ConfigError::InvalidValue {
            field: field.to_string(),
            value: v.to_string(),
        }),
    }
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawAppConfig = toml::from_str(content)?;

        let analysis = AnalysisConfig {
            min_problem_mentions: non_negative(
                "analysis.min_problem_mentions",
                raw.analysis.min_problem_mentions,
                DEFAULT_MIN_PROBLEM_MENTIONS,
            )?,
            top_problems_count: non_negative(
                "analysis.top_problems_count",
                raw.analysis.top_problems_count,
                DEFAULT_TOP_PROBLEMS_COUNT,
            )?,
        };

        let config = Self {
            analysis,
            resources: raw.resources,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config = Self::from_toml_str(&content)?;

        info!(
            "Configuration loaded: min_problem_mentions={}, top_problems_count={}",
            config.analysis.min_problem_mentions, config.analysis.top_problems_count
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.resources.stopwords_path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    reason: "resources.stopwords_path must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
