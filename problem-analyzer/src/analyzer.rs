use crate::categorizer::categorize;
use crate::counter::FrequencyCounter;
use crate::engagement;
use crate::grouping::ProblemGrouper;
use crate::keywords::KeywordExtractor;
use crate::resources::TextResources;
use painpoint_core::{AnalysisConfig, AnalysisResult, AppConfig, ProblemRecord};
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Size of the global keyword frequency table in the result.
pub const TOP_KEYWORDS_COUNT: usize = 50;

/// Stateless analysis pipeline. One instance can serve any number of
/// batches, including from several threads at once.
#[derive(Debug, Clone)]
pub struct ProblemAnalyzer {
    config: AnalysisConfig,
    extractor: KeywordExtractor,
}

impl ProblemAnalyzer {
    /// Uses the process-wide default language resources.
    pub fn new(config: AnalysisConfig) -> Self {
        Self::with_resources(config, TextResources::shared())
    }

    pub fn with_resources(config: AnalysisConfig, resources: Arc<TextResources>) -> Self {
        Self {
            config,
            extractor: KeywordExtractor::new(resources),
        }
    }

    /// Builds language resources from the `[resources]` section.
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self::with_resources(
            config.analysis.clone(),
            Arc::new(TextResources::from_config(&config.resources)),
        )
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn extractor(&self) -> &KeywordExtractor {
        &self.extractor
    }

    pub fn analyze(&self, records: &[ProblemRecord]) -> AnalysisResult {
        if records.is_empty() {
            debug!("Empty problem batch, nothing to analyze");
            return AnalysisResult::default();
        }

        let mut keyword_counts = FrequencyCounter::new();
        let mut categories = FrequencyCounter::new();
        let mut sources = FrequencyCounter::new();
        let mut grouper = ProblemGrouper::new();
        let mut untitled = 0usize;

        for record in records {
            let keywords = self.extractor.extract(&record.combined_text());
            let category = categorize(record);
            trace!(
                "Record '{}' from {}: category={}, keywords={:?}",
                record.title,
                record.source,
                category,
                keywords
            );

            if record.title.is_empty() {
                untitled += 1;
            } else {
                grouper.add(record, &keywords, category, engagement::score(record));
            }

            keyword_counts.extend(keywords);
            categories.add(category);
            sources.add(record.source.clone());
        }

        let groups_formed = grouper.len();
        let top_problems = grouper.rank(&self.config);

        info!(
            "Analyzed {} problems ({} untitled): {} groups formed, {} surfaced (min mentions {})",
            records.len(),
            untitled,
            groups_formed,
            top_problems.len(),
            self.config.min_problem_mentions
        );

        AnalysisResult {
            total_problems: records.len(),
            top_problems,
            top_keywords: keyword_counts.most_common(Some(TOP_KEYWORDS_COUNT)),
            categories: categories.most_common(None),
            sources: sources.into_entries().into_iter().collect(),
        }
    }
}

impl Default for ProblemAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

/// Convenience wrapper around [`ProblemAnalyzer::analyze`].
pub fn analyze(records: &[ProblemRecord], config: &AnalysisConfig) -> AnalysisResult {
    ProblemAnalyzer::new(config.clone()).analyze(records)
}

