use painpoint_core::{AppConfig, ConfigError, StopwordsKind, TokenizerKind};
use std::env;
use std::fs;
use std::path::PathBuf;

fn write_temp_config(content: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("test_painpoint_{}.toml", uuid::Uuid::new_v4()));
    fs::write(&path, content).expect("Failed to write test config");
    path
}

#[test]
fn test_load_full_config() {
    let path = write_temp_config(
        r#"
[analysis]
min_problem_mentions = 2
top_problems_count = 10

[resources]
tokenizer = "whitespace"
stopwords = "minimal"
stopwords_path = "/usr/share/painpoint/stopwords.txt"
"#,
    );

    let config = AppConfig::load(&path).expect("Failed to load config");
    fs::remove_file(&path).ok();

    assert_eq!(config.analysis.min_problem_mentions, 2);
    assert_eq!(config.analysis.top_problems_count, 10);
    assert_eq!(config.resources.tokenizer, TokenizerKind::Whitespace);
    assert_eq!(config.resources.stopwords, StopwordsKind::Minimal);
    assert_eq!(
        config.resources.stopwords_path,
        Some(PathBuf::from("/usr/share/painpoint/stopwords.txt"))
    );
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = AppConfig::from_toml_str(
        r#"
[analysis]
min_problem_mentions = 0
refresh_interval = 60

[scraping]
enabled_sources = ["reddit", "github"]
"#,
    )
    .expect("Unknown keys should not fail");

    assert_eq!(config.analysis.min_problem_mentions, 0);
    assert_eq!(config.analysis.top_problems_count, 50);
}

#[test]
fn test_missing_file() {
    let path = env::temp_dir().join(format!("missing_{}.toml", uuid::Uuid::new_v4()));
    let err = AppConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn test_malformed_toml() {
    let err = AppConfig::from_toml_str("[analysis\nmin_problem_mentions = 3").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_negative_min_mentions_rejected() {
    let err = AppConfig::from_toml_str("[analysis]\nmin_problem_mentions = -3").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}
