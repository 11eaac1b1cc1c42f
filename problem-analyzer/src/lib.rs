//! Problem analysis pipeline: keyword extraction, categorization,
//! engagement scoring, then grouping and ranking over a whole batch.

pub mod analyzer;
pub mod categorizer;
pub mod counter;
pub mod engagement;
pub mod grouping;
pub mod keywords;
pub mod resources;


pub use analyzer::{analyze, ProblemAnalyzer, TOP_KEYWORDS_COUNT};
pub use categorizer::{categorize, categorize_text, CATEGORY_RULES};
pub use counter::FrequencyCounter;
pub use grouping::{priority, signature, ProblemGrouper, SIGNATURE_KEYWORDS};
pub use keywords::{normalize, KeywordExtractor};
pub use resources::{
    StopwordOrigin, StopwordSet, TextResources, Tokenizer, WhitespaceTokenizer, WordTokenizer,
    MINIMAL_STOPWORDS,
};
