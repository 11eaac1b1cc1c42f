use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Source label used when a record does not say where it came from.
pub const UNKNOWN_SOURCE: &str = "unknown";

/// Lower-cased tokens in extraction order, duplicates retained.
pub type KeywordList = Vec<String>;

/// Community attention attracted by a single record.
pub type EngagementScore = u64;

/// A normalized problem report handed over by the acquisition layer.
///
/// Every field is optional on the wire and no field type is fatal: a string
/// field holding anything other than a string reads as empty (`source` as
/// `"unknown"`). Scrapers send the body as `text`, which wins over `body`
/// when both are present. All unrecognized keys (`score`, `num_comments`,
/// `subreddit`, ...) land in `counters`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemRecord {
    #[serde(default = "unknown_source", deserialize_with = "lenient_source")]
    pub source: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub body: String,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(flatten)]
    pub counters: BTreeMap<String, Value>,
}

fn unknown_source() -> String {
    UNKNOWN_SOURCE.to_string()
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(Some(text)),
        _ => Ok(None),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

fn lenient_source<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_else(unknown_source))
}

impl Default for ProblemRecord {
    fn default() -> Self {
        Self {
            source: unknown_source(),
            title: String::new(),
            body: String::new(),
            text: None,
            url: String::new(),
            counters: BTreeMap::new(),
        }
    }
}

impl ProblemRecord {
    pub fn new(source: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            title: title.into(),
            body: body.into(),
            ..Self::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_counter(mut self, name: &str, value: i64) -> Self {
        self.counters.insert(name.to_string(), Value::from(value));
        self
    }

    /// Interaction counter floored to an integer, 0 when absent or not a number.
    pub fn counter(&self, name: &str) -> i64 {
        match self.counters.get(name) {
            Some(value) => value
                .as_i64()
                .or_else(|| value.as_f64().filter(|n| n.is_finite()).map(|n| n.floor() as i64))
                .unwrap_or(0),
            None => 0,
        }
    }

    /// Free text of the report: `text` when the scraper sent one, else `body`.
    pub fn body_text(&self) -> &str {
        self.text.as_deref().unwrap_or(&self.body)
    }

    /// `title + " " + body`, the text keywords and categories are derived from.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title, self.body_text())
    }
}

/// Topical label assigned to every record. Declaration order is the
/// order categorization rules are tried in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Authentication,
    Database,
    #[serde(rename = "API")]
    Api,
    Frontend,
    Backend,
    Deployment,
    Performance,
    #[serde(rename = "Error Handling")]
    ErrorHandling,
    Testing,
    Security,
    General,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Authentication,
        Category::Database,
        Category::Api,
        Category::Frontend,
        Category::Backend,
        Category::Deployment,
        Category::Performance,
        Category::ErrorHandling,
        Category::Testing,
        Category::Security,
        Category::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Authentication => "Authentication",
            Category::Database => "Database",
            Category::Api => "API",
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
            Category::Deployment => "Deployment",
            Category::Performance => "Performance",
            Category::ErrorHandling => "Error Handling",
            Category::Testing => "Testing",
            Category::Security => "Security",
            Category::General => "General",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupExample {
    pub title: String,
    pub url: String,
    pub source: String,
}

impl From<&ProblemRecord> for GroupExample {
    fn from(record: &ProblemRecord) -> Self {
        Self {
            title: record.title.clone(),
            url: record.url.clone(),
            source: record.source.clone(),
        }
    }
}

/// One underlying problem, merged from records sharing a keyword signature.
///
/// `title`, `keywords` and `category` come from the first record merged in.
/// `count` always equals `examples.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemGroup {
    pub title: String,
    pub keywords: Vec<String>,
    pub category: Category,
    pub count: usize,
    pub total_engagement: EngagementScore,
    pub examples: Vec<GroupExample>,
    pub priority: f64,
    pub users_affected: usize,
}

/// Output of one analysis run. Owned by the caller; nothing is retained
/// between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub total_problems: usize,
    pub top_problems: Vec<ProblemGroup>,
    pub top_keywords: Vec<(String, usize)>,
    /// Sorted by count, highest first.
    #[serde(serialize_with = "ordered_map")]
    pub categories: Vec<(Category, usize)>,
    pub sources: BTreeMap<String, usize>,
}

fn ordered_map<S>(entries: &[(Category, usize)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(entries.iter().map(|(category, count)| (category, count)))
}

impl AnalysisResult {
    pub fn category_count(&self, category: Category) -> usize {
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn top_problems_limited(&self, limit: usize) -> &[ProblemGroup] {
        &self.top_problems[..limit.min(self.top_problems.len())]
    }

    pub fn top_keywords_limited(&self, limit: usize) -> &[(String, usize)] {
        &self.top_keywords[..limit.min(self.top_keywords.len())]
    }

    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary {
            total_problems: self.total_problems,
            top_problems_count: self.top_problems.len(),
            categories_count: self.categories.len(),
            sources: self.sources.clone(),
        }
    }
}

/// Headline numbers for a dashboard overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_problems: usize,
    pub top_problems_count: usize,
    pub categories_count: usize,
    pub sources: BTreeMap<String, usize>,
}
