//! Intent classifier: keyword-based routing of a command to a backend category.
//!
//! Uses plain substring matching rather than model-based classification so
//! routing is deterministic and reproducible for a given text.

use crate::types::{Category, Intent};

use super::params;

/// Keyword sets in priority order. First set with any hit wins.
///
/// The order is policy: a message mentioning both "open" and "code" routes
/// to the browser backend. File is tested before scraper, so "read the data"
/// is a file operation.
pub const KEYWORD_SETS: &[(Category, &[&str])] = &[
    (
        Category::Browser,
        &["browser", "open", "navigate", "click", "search"],
    ),
    (Category::Code, &["code", "script", "program"]),
    (Category::Api, &["api", "fetch", "request"]),
    (Category::File, &["file", "read", "write"]),
    (Category::Scraper, &["scrape", "extract", "data"]),
];

/// Classify `text` into a backend category.
///
/// Matching is case-insensitive and substring based ("reopen" hits "open").
/// Text with no hit in any set is [`Category::General`].
pub fn classify(text: &str) -> Category {
    let lower = text.to_lowercase();
    KEYWORD_SETS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::General)
}

/// Classify `text` and extract its parameters into an [`Intent`].
///
/// Parameters are extracted regardless of the chosen category.
pub fn parse_intent(text: &str) -> Intent {
    Intent {
        category: classify(text),
        raw_action: text.to_owned(),
        parameters: params::extract(text),
    }
}
