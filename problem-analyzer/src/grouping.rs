//! Merging records into problem groups and ranking the groups.
//!
//! Records are merged when their signatures are identical strings; there is
//! no fuzzy matching between different signatures.

use painpoint_core::{
    AnalysisConfig, Category, EngagementScore, GroupExample, ProblemGroup, ProblemRecord,
};
use std::collections::HashMap;
use tracing::debug;

/// Number of leading keywords that make up a signature.
pub const SIGNATURE_KEYWORDS: usize = 5;

/// Leading keywords sorted alphabetically and joined with a space. Records
/// with the same leading keywords in a different order share a signature.
pub fn signature(keywords: &[String]) -> String {
    let mut lead: Vec<&str> = keywords
        .iter()
        .take(SIGNATURE_KEYWORDS)
        .map(String::as_str)
        .collect();
    lead.sort_unstable();
    lead.join(" ")
}

/// `count * 10 + total_engagement / 10`
pub fn priority(count: usize, total_engagement: EngagementScore) -> f64 {
    count as f64 * 10.0 + total_engagement as f64 / 10.0
}

/// Accumulates groups in first-seen order.
#[derive(Debug, Default)]
pub struct ProblemGrouper {
    groups: Vec<ProblemGroup>,
    index: HashMap<String, usize>,
}

impl ProblemGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a titled record. The first record with a signature fixes the
    /// group's title, keywords and category.
    pub fn add(
        &mut self,
        record: &ProblemRecord,
        keywords: &[String],
        category: Category,
        engagement: EngagementScore,
    ) {
        let key = signature(keywords);
        match self.index.get(&key) {
            Some(&slot) => {
                let group = &mut self.groups[slot];
                group.count += 1;
                group.total_engagement = group.total_engagement.saturating_add(engagement);
                group.examples.push(GroupExample::from(record));
            }
            None => {
                debug!("New problem group [{}] from '{}'", key, record.title);
                self.index.insert(key, self.groups.len());
                self.groups.push(ProblemGroup {
                    title: record.title.clone(),
                    keywords: keywords.iter().take(SIGNATURE_KEYWORDS).cloned().collect(),
                    category,
                    count: 1,
                    total_engagement: engagement,
                    examples: vec![GroupExample::from(record)],
                    priority: 0.0,
                    users_affected: 0,
                });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Scores every group, orders by priority (stable for ties), drops
    /// groups under `min_problem_mentions` and keeps `top_problems_count`.
    pub fn rank(self, config: &AnalysisConfig) -> Vec<ProblemGroup> {
        let mut ranked = self.groups;
        for group in &mut ranked {
            group.priority = priority(group.count, group.total_engagement);
            group.users_affected = group.count;
        }

        ranked.sort_by(|a, b| b.priority.total_cmp(&a.priority));
        ranked.retain(|group| group.count >= config.min_problem_mentions);
        ranked.truncate(config.top_problems_count);
        ranked
    }
}
