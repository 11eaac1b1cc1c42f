mod report;

use anyhow::Context;
use clap::Parser;
use painpoint_core::{AppConfig, CoreError, ErrorReporter, ProblemRecord};
use problem_analyzer::ProblemAnalyzer;
use report::{render_summary, Report};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEMO_BATCH: &str = include_str!("../demos/sample_problems.json");

/// Rank the most frequently reported developer problems in normalized
/// community records.
#[derive(Parser, Debug)]
#[command(name = "painpoint", version, about, long_about = None)]
struct Args {
    /// Problem batch as a JSON array of records (repeat for several batches)
    #[arg(short, long = "input", value_name = "FILE")]
    inputs: Vec<PathBuf>,

    /// Analyze the bundled demo batch
    #[arg(long, conflicts_with = "inputs")]
    demo: bool,

    /// Configuration file
    #[arg(short, long, env = "PAINPOINT_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override analysis.min_problem_mentions
    #[arg(long, value_name = "N")]
    min_mentions: Option<usize>,

    /// Override analysis.top_problems_count
    #[arg(long, value_name = "N")]
    top: Option<usize>,

    /// Write the JSON report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print a readable digest to stdout
    #[arg(long)]
    summary: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

struct Batch {
    label: String,
    records: Vec<ProblemRecord>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "painpoint=debug,problem_analyzer=debug,painpoint_core=debug"
    } else {
        "painpoint=info,problem_analyzer=info,painpoint_core=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting Painpoint problem analysis");

    let config = load_config(&args).map_err(|e| {
        ErrorReporter::new().report_error(&e);
        e
    })?;
    let batches = load_batches(&args).await?;
    let reports = analyze_batches(config, batches).await?;

    let json = if reports.len() == 1 {
        serde_json::to_string_pretty(&reports[0])?
    } else {
        serde_json::to_string_pretty(&reports)?
    };

    if args.summary {
        for report in &reports {
            println!("{}", render_summary(report));
        }
    }

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, json)
                .await
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            tracing::info!("Report written to {}", path.display());
        }
        None if !args.summary => println!("{}", json),
        None => {}
    }

    Ok(())
}

fn load_config(args: &Args) -> Result<AppConfig, CoreError> {
    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    if let Some(min) = args.min_mentions {
        config.analysis.min_problem_mentions = min;
    }
    if let Some(top) = args.top {
        config.analysis.top_problems_count = top;
    }
    Ok(config)
}

async fn load_batches(args: &Args) -> anyhow::Result<Vec<Batch>> {
    if args.demo {
        let records = parse_records(DEMO_BATCH)?;
        return Ok(vec![Batch {
            label: "demo".to_string(),
            records,
        }]);
    }

    if args.inputs.is_empty() {
        let error = CoreError::InvalidInput {
            message: "no problem batch given; pass --input FILE or --demo".to_string(),
        };
        ErrorReporter::new().report_error(&error);
        return Err(error.into());
    }

    let mut batches = Vec::with_capacity(args.inputs.len());
    for path in &args.inputs {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read problem batch {}", path.display()))?;
        let records = parse_records(&content)
            .with_context(|| format!("Failed to parse problem batch {}", path.display()))?;
        tracing::debug!("Loaded {} records from {}", records.len(), path.display());
        batches.push(Batch {
            label: path.display().to_string(),
            records,
        });
    }
    Ok(batches)
}

fn parse_records(content: &str) -> Result<Vec<ProblemRecord>, CoreError> {
    Ok(serde_json::from_str(content)?)
}

/// Runs every batch on the blocking pool. Batches share the analyzer and its
/// language resources but nothing mutable.
async fn analyze_batches(config: AppConfig, batches: Vec<Batch>) -> anyhow::Result<Vec<Report>> {
    let analyzer = Arc::new(ProblemAnalyzer::from_app_config(&config));

    let handles: Vec<_> = batches
        .into_iter()
        .map(|batch| {
            let analyzer = Arc::clone(&analyzer);
            tokio::task::spawn_blocking(move || {
                let analysis = analyzer.analyze(&batch.records);
                Report::new(batch.label, analysis)
            })
        })
        .collect();

    let mut reports = Vec::with_capacity(handles.len());
    for handle in handles {
        reports.push(handle.await.context("Analysis task failed")?);
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use painpoint_core::AnalysisConfig;

    #[test]
    fn test_demo_batch_parses() {
        let records = parse_records(DEMO_BATCH).unwrap();
        assert_eq!(records.len(), 30);
        assert!(records.iter().all(|r| !r.title.is_empty()));
    }

    #[test]
    fn test_demo_batch_surfaces_recurring_problems() {
        let records = parse_records(DEMO_BATCH).unwrap();
        let analyzer = ProblemAnalyzer::new(AnalysisConfig::default().with_min_problem_mentions(1));
        let result = analyzer.analyze(&records);

        assert_eq!(result.total_problems, 30);
        assert!(!result.top_problems.is_empty());
        assert_eq!(result.sources.values().sum::<usize>(), 30);
    }

    #[test]
    fn test_non_array_batch_rejected() {
        let err = parse_records(r#"{"title": "not a list"}"#).unwrap_err();
        assert!(matches!(err, CoreError::Serialization(_)));
    }

    #[test]
    fn test_mistyped_record_keeps_batch() {
        let records = parse_records(
            r#"[{"source": "reddit", "title": 123}, {"source": "github", "title": "ok", "text": "x", "body": "y"}]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].combined_text(), "ok x");
    }

    #[test]
    fn test_cli_overrides() {
        let args = Args::parse_from(["painpoint", "--demo", "--min-mentions", "2", "--top", "5"]);
        let config = load_config(&args).unwrap();
        assert_eq!(config.analysis.min_problem_mentions, 2);
        assert_eq!(config.analysis.top_problems_count, 5);
    }
}
