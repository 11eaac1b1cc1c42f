use crate::resources::TextResources;
use painpoint_core::KeywordList;
use regex::Regex;
use std::sync::{Arc, OnceLock};

/// Tokens of this length or shorter never become keywords.
pub const MAX_DROPPED_TOKEN_LEN: usize = 2;

static URL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn url_pattern() -> &'static Regex {
    URL_PATTERN.get_or_init(|| Regex::new(r"http\S+|www\S+").expect("URL pattern is valid"))
}

/// Lower-cases, removes link-like substrings, and blanks out everything
/// outside `[a-z0-9]` and whitespace.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    url_pattern()
        .replace_all(&lowered, "")
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    resources: Arc<TextResources>,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(TextResources::shared())
    }
}

impl KeywordExtractor {
    pub fn new(resources: Arc<TextResources>) -> Self {
        Self { resources }
    }

    pub fn resources(&self) -> &TextResources {
        &self.resources
    }

    /// Keywords in first-occurrence order. Duplicates are kept and no
    /// stemming is applied.
    pub fn extract(&self, text: &str) -> KeywordList {
        if text.is_empty() {
            return Vec::new();
        }

        let normalized = normalize(text);
        self.resources
            .tokenize(&normalized)
            .into_iter()
            .filter(|token| token.len() > MAX_DROPPED_TOKEN_LEN)
            .filter(|token| !self.resources.is_stopword(token))
            .map(str::to_string)
            .collect()
    }
}
