//! Language resources used by keyword extraction.
//!
//! A tokenizer and a stopword set are picked once, when the resources are
//! built. If the preferred resource cannot be loaded the minimal fallback is
//! substituted and a warning is logged; extraction itself never fails.

use painpoint_core::{ErrorRecovery, ResourceConfig, ResourceError, StopwordsKind, TokenizerKind};
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, warn};

const ENGLISH_STOPWORDS: &str = include_str!("../data/stopwords_english.txt");

/// Used when no stopword list can be loaded.
pub const MINIMAL_STOPWORDS: [&str; 10] =
    ["the", "is", "at", "which", "on", "a", "an", "and", "or", "but"];

pub trait Tokenizer: Send + Sync + fmt::Debug {
    fn name(&self) -> &'static str;
    fn tokenize<'t>(&self, text: &'t str) -> Vec<&'t str>;
}

/// Pulls runs of word characters out of the text, so punctuation never
/// sticks to a token even when the input was not normalized first.
#[derive(Debug)]
pub struct WordTokenizer {
    pattern: Regex,
}

impl WordTokenizer {
    pub fn new() -> Result<Self, ResourceError> {
        let pattern = Regex::new(r"\w+").map_err(|e| ResourceError::TokenizerUnavailable {
            reason: e.to_string(),
        })?;
        Ok(Self { pattern })
    }
}

impl Tokenizer for WordTokenizer {
    fn name(&self) -> &'static str {
        "word"
    }

    fn tokenize<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.pattern.find_iter(text).map(|m| m.as_str()).collect()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn name(&self) -> &'static str {
        "whitespace"
    }

    fn tokenize<'t>(&self, text: &'t str) -> Vec<&'t str> {
        text.split_whitespace().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopwordOrigin {
    English,
    File(PathBuf),
    Minimal,
}

impl fmt::Display for StopwordOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopwordOrigin::English => f.write_str("english"),
            StopwordOrigin::File(path) => write!(f, "file:{}", path.display()),
            StopwordOrigin::Minimal => f.write_str("minimal"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
    origin: StopwordOrigin,
}

impl StopwordSet {
    /// The bundled English list.
    pub fn english() -> Self {
        Self {
            words: parse_word_list(ENGLISH_STOPWORDS),
            origin: StopwordOrigin::English,
        }
    }

    pub fn minimal() -> Self {
        Self {
            words: MINIMAL_STOPWORDS.iter().map(|w| w.to_string()).collect(),
            origin: StopwordOrigin::Minimal,
        }
    }

    /// One word per line; blank lines and `#` comments are skipped.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ResourceError::StopwordsUnavailable {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let words = parse_word_list(&content);
        if words.is_empty() {
            return Err(ResourceError::EmptyStopwordList {
                path: path.display().to_string(),
            });
        }

        debug!("Loaded {} stopwords from {}", words.len(), path.display());
        Ok(Self {
            words,
            origin: StopwordOrigin::File(path.to_path_buf()),
        })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn origin(&self) -> &StopwordOrigin {
        &self.origin
    }
}

fn parse_word_list(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

/// Tokenizer plus stopword set, immutable once built and safe to share
/// between concurrent analysis runs.
#[derive(Debug)]
pub struct TextResources {
    tokenizer: Box<dyn Tokenizer>,
    stopwords: StopwordSet,
    degraded: bool,
}

static SHARED_RESOURCES: OnceLock<Arc<TextResources>> = OnceLock::new();

impl TextResources {
    pub fn new(tokenizer: Box<dyn Tokenizer>, stopwords: StopwordSet) -> Self {
        Self {
            tokenizer,
            stopwords,
            degraded: false,
        }
    }

    /// Whitespace splitting and the ten-word stopword list.
    pub fn minimal() -> Self {
        Self::new(Box::new(WhitespaceTokenizer), StopwordSet::minimal())
    }

    pub fn from_config(config: &ResourceConfig) -> Self {
        let (tokenizer, tokenizer_degraded) = match config.tokenizer {
            TokenizerKind::Word => resolve(
                WordTokenizer::new().map(|t| Box::new(t) as Box<dyn Tokenizer>),
                || Box::new(WhitespaceTokenizer) as Box<dyn Tokenizer>,
            ),
            TokenizerKind::Whitespace => (Box::new(WhitespaceTokenizer) as Box<dyn Tokenizer>, false),
        };

        let (stopwords, stopwords_degraded) = match (&config.stopwords_path, config.stopwords) {
            (Some(path), _) => resolve(StopwordSet::from_file(path), StopwordSet::minimal),
            (None, StopwordsKind::English) => (StopwordSet::english(), false),
            (None, StopwordsKind::Minimal) => (StopwordSet::minimal(), false),
        };

        let resources = Self {
            tokenizer,
            stopwords,
            degraded: tokenizer_degraded || stopwords_degraded,
        };

        if resources.degraded {
            warn!(
                "Language resources degraded: tokenizer={}, stopwords={} ({} words)",
                resources.tokenizer.name(),
                resources.stopwords.origin(),
                resources.stopwords.len()
            );
        } else {
            info!(
                "Language resources ready: tokenizer={}, stopwords={} ({} words)",
                resources.tokenizer.name(),
                resources.stopwords.origin(),
                resources.stopwords.len()
            );
        }
        resources
    }

    /// Process-wide default resources, built on first use.
    pub fn shared() -> Arc<TextResources> {
        SHARED_RESOURCES
            .get_or_init(|| Arc::new(Self::from_config(&ResourceConfig::default())))
            .clone()
    }

    pub fn tokenize<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.tokenizer.tokenize(text)
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    pub fn tokenizer_name(&self) -> &'static str {
        self.tokenizer.name()
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// True when a fallback replaced a resource that failed to load.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }
}

fn resolve<T, F>(result: Result<T, ResourceError>, fallback: F) -> (T, bool)
where
    F: Fn() -> T,
{
    let recovered = ErrorRecovery::recover(result, &fallback);
    let degraded = recovered.is_degraded();
    (recovered.value().unwrap_or_else(fallback), degraded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn test_bundled_english_list() {
        let stopwords = StopwordSet::english();
        assert_eq!(stopwords.len(), 179);
        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("because"));
        assert!(!stopwords.contains("cannot"));
        assert!(!stopwords.contains("javascript"));
    }

    #[test]
    fn test_minimal_list() {
        let stopwords = StopwordSet::minimal();
        assert_eq!(stopwords.len(), 10);
        assert!(stopwords.contains("which"));
        assert!(!stopwords.contains("because"));
    }

    #[test]
    fn test_word_tokenizer_drops_punctuation() {
        let tokenizer = WordTokenizer::new().unwrap();
        assert_eq!(
            tokenizer.tokenize("undefined! (property) error,again"),
            vec!["undefined", "property", "error", "again"]
        );
    }

    #[test]
    fn test_whitespace_tokenizer() {
        assert_eq!(
            WhitespaceTokenizer.tokenize("  react \t state\nhooks "),
            vec!["react", "state", "hooks"]
        );
    }

    #[test]
    fn test_missing_stopword_file_degrades() {
        let config = ResourceConfig {
            stopwords_path: Some(env::temp_dir().join(format!(
                "missing_stopwords_{}.txt",
                uuid::Uuid::new_v4()
            ))),
            ..ResourceConfig::default()
        };

        let resources = TextResources::from_config(&config);
        assert!(resources.is_degraded());
        assert_eq!(resources.stopwords().origin(), &StopwordOrigin::Minimal);
        assert_eq!(resources.tokenizer_name(), "word");
    }

    #[test]
    fn test_stopword_file_loaded() {
        let path = env::temp_dir().join(format!("stopwords_{}.txt", uuid::Uuid::new_v4()));
        fs::write(&path, "# custom list\nReact\n\nvue\n").unwrap();

        let config = ResourceConfig {
            stopwords_path: Some(path.clone()),
            ..ResourceConfig::default()
        };
        let resources = TextResources::from_config(&config);
        fs::remove_file(&path).ok();

        assert!(!resources.is_degraded());
        assert!(resources.is_stopword("react"));
        assert!(resources.is_stopword("vue"));
        assert!(!resources.is_stopword("the"));
        assert_eq!(resources.stopwords().origin(), &StopwordOrigin::File(path));
    }

    #[test]
    fn test_empty_stopword_file_degrades() {
        let path = env::temp_dir().join(format!("stopwords_{}.txt", uuid::Uuid::new_v4()));
        fs::write(&path, "# nothing here\n\n").unwrap();

        let err = StopwordSet::from_file(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, ResourceError::EmptyStopwordList { .. }));
    }

    #[test]
    fn test_shared_resources_are_reused() {
        let first = TextResources::shared();
        let second = TextResources::shared();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.tokenizer_name(), "word");
    }
}
