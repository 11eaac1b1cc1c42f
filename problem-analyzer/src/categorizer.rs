//! Rule-based topical categorization.
//!
//! Rules are tried in order and the first category with a keyword occurring
//! anywhere in the lower-cased `title + " " + body` wins. Matching is by
//! substring, not by token: "api" also matches inside "rapid" and "ui"
//! inside "build". Records matching no rule are `General`.

use painpoint_core::{Category, ProblemRecord};

pub type CategoryRule = (Category, &'static [&'static str]);

pub const CATEGORY_RULES: &[CategoryRule] = &[
    (
        Category::Authentication,
        &["login", "auth", "authentication", "password", "oauth", "jwt", "token"],
    ),
    (
        Category::Database,
        &["database", "sql", "mysql", "postgres", "mongodb", "query", "orm"],
    ),
    (
        Category::Api,
        &["api", "rest", "graphql", "endpoint", "request", "response"],
    ),
    (
        Category::Frontend,
        &["react", "vue", "angular", "css", "html", "ui", "component", "dom"],
    ),
    (
        Category::Backend,
        &["server", "node", "express", "django", "flask", "backend"],
    ),
    (
        Category::Deployment,
        &["deploy", "deployment", "docker", "kubernetes", "ci/cd", "hosting"],
    ),
    (
        Category::Performance,
        &["slow", "performance", "speed", "optimization", "cache", "memory"],
    ),
    (
        Category::ErrorHandling,
        &["error", "exception", "crash", "bug", "fail", "broken"],
    ),
    (
        Category::Testing,
        &["test", "testing", "unit test", "integration", "jest", "pytest"],
    ),
    (
        Category::Security,
        &["security", "vulnerability", "xss", "csrf", "injection", "encryption"],
    ),
];

pub fn categorize(record: &ProblemRecord) -> Category {
    categorize_text(&record.combined_text())
}

pub fn categorize_text(text: &str) -> Category {
    let haystack = text.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| haystack.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_cover_every_category_but_general() {
        let ruled: Vec<Category> = CATEGORY_RULES.iter().map(|(c, _)| *c).collect();
        assert_eq!(ruled, Category::ALL[..10].to_vec());
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // "token" (Authentication) is tried before "error" (Error Handling)
        let record = ProblemRecord::new("reddit", "JWT token error", "");
        assert_eq!(categorize(&record), Category::Authentication);
    }

    #[test]
    fn test_body_is_searched() {
        let record = ProblemRecord::new("github", "Help needed", "Docker container exits");
        assert_eq!(categorize(&record), Category::Deployment);
    }

    #[test]
    fn test_substring_matching() {
        assert_eq!(categorize_text("Rapid prototyping tips"), Category::Api);
        assert_eq!(categorize_text("the BUILD keeps going"), Category::Frontend);
    }

    #[test]
    fn test_multi_word_keywords() {
        assert_eq!(categorize_text("setting up ci/cd"), Category::Deployment);
    }

    #[test]
    fn test_general_fallback() {
        assert_eq!(categorize_text(""), Category::General);
        assert_eq!(categorize_text("Which laptop to buy"), Category::General);
    }
}
