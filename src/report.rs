use chrono::{DateTime, Utc};
use painpoint_core::AnalysisResult;
use serde::Serialize;
use std::fmt;

/// Problems shown in the readable digest.
const DIGEST_PROBLEMS: usize = 10;

/// An analysis result stamped with where and when it was produced.
#[derive(Debug, Serialize)]
pub struct Report {
    pub input: String,
    pub timestamp: DateTime<Utc>,
    pub analysis: AnalysisResult,
}

impl Report {
    pub fn new(input: impl Into<String>, analysis: AnalysisResult) -> Self {
        Self {
            input: input.into(),
            timestamp: Utc::now(),
            analysis,
        }
    }
}

pub fn render_summary(report: &Report) -> String {
    report.to_string()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = &self.analysis;
        let summary = analysis.summary();
        let rule = "-".repeat(56);

        writeln!(f, "Results for {} ({})", self.input, self.timestamp.to_rfc3339())?;
        writeln!(f, "  Total problems:       {}", summary.total_problems)?;
        writeln!(f, "  Top problems found:   {}", summary.top_problems_count)?;
        writeln!(f, "  Categories:           {}", summary.categories_count)?;
        writeln!(f, "  Sources:              {}", summary.sources.len())?;

        writeln!(f, "\nTop {} problems (by priority)\n  {}", DIGEST_PROBLEMS, rule)?;
        for (rank, problem) in analysis.top_problems_limited(DIGEST_PROBLEMS).iter().enumerate() {
            let title: String = problem.title.chars().take(50).collect();
            writeln!(f, "  {}. {}", rank + 1, title)?;
            writeln!(f, "     Category: {}", problem.category)?;
            writeln!(f, "     Users affected: {}", problem.users_affected)?;
            writeln!(f, "     Priority score: {}", problem.priority as u64)?;
            writeln!(f, "     Total engagement: {}", problem.total_engagement)?;
        }

        writeln!(f, "\nProblem categories\n  {}", rule)?;
        for (category, count) in &analysis.categories {
            writeln!(f, "  {:.<40} {:>3} problems", category.as_str(), count)?;
        }

        writeln!(f, "\nData sources\n  {}", rule)?;
        for (source, count) in &analysis.sources {
            writeln!(f, "  {:.<40} {:>3} items", source, count)?;
        }
        Ok(())
    }
}
