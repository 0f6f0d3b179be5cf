//! Parameter extractor: pulls a URL and a search query out of free text.
//!
//! Both extractions are best-effort and total. A miss is a normal outcome
//! and yields `None`, never an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Parameters;

/// First `http://` or `https://` run of non-whitespace characters.
static URL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"https?://[^\s]+").ok());

/// "search", optionally followed by "for" or "about", then the shortest slice
/// up to a trailing "on"/"in" clause or the end of the text.
static QUERY_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)search (?:for |about )?(.*?)(?:\s+(?:on|in)\b|$)").ok()
});

/// Extract every supported parameter from `text`.
pub fn extract(text: &str) -> Parameters {
    Parameters {
        url: extract_url(text),
        query: extract_query(text),
    }
}

/// Return the first URL in `text`, verbatim.
pub fn extract_url(text: &str) -> Option<String> {
    let pattern = URL_PATTERN.as_ref()?;
    pattern.find(text).map(|m| m.as_str().to_owned())
}

/// Return the search query in `text`, trimmed.
///
/// An empty slice (e.g. a trailing "search ") counts as no match.
pub fn extract_query(text: &str) -> Option<String> {
    let pattern = QUERY_PATTERN.as_ref()?;
    let captures = pattern.captures(text)?;
    let query = captures.get(1)?.as_str().trim();
    if query.is_empty() {
        return None;
    }
    Some(query.to_owned())
}
