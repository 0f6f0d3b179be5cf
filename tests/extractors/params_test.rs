//! Tests for `src/extractors/params.rs`: URL and search query extraction.

use proptest::prelude::*;

use autoagent::extractors::extract;
use autoagent::extractors::params::{extract_query, extract_url};

// ---------------------------------------------------------------------------
// URL extraction
// ---------------------------------------------------------------------------

#[test]
fn url_is_returned_verbatim() {
    let url = extract_url("Open https://news.site and read the headlines");
    assert_eq!(url.as_deref(), Some("https://news.site"));
}

#[test]
fn url_keeps_trailing_punctuation() {
    // Anything up to whitespace belongs to the URL.
    let url = extract_url("see https://example.com/page, then stop");
    assert_eq!(url.as_deref(), Some("https://example.com/page,"));
}

#[test]
fn plain_http_is_accepted() {
    let url = extract_url("fetch http://localhost:8080/status");
    assert_eq!(url.as_deref(), Some("http://localhost:8080/status"));
}

#[test]
fn url_absent_without_scheme() {
    assert_eq!(extract_url("open example.com"), None);
    assert_eq!(extract_url(""), None);
}

proptest! {
    #[test]
    fn url_extraction_is_idempotent(host in "[a-z]{1,12}", path in "[a-z0-9/]{0,20}") {
        let text = format!("visit https://{host}.example/{path} today");
        let first = extract_url(&text);
        prop_assert!(first.is_some());
        let again = first.as_deref().and_then(extract_url);
        prop_assert_eq!(again, first);
    }

    #[test]
    fn query_is_trimmed(words in "[a-z]{1,8}( [a-z]{1,8}){0,3}") {
        let text = format!("search for   x{words}   ");
        let query = extract_query(&text);
        prop_assert!(query.is_some());
        let query = query.unwrap_or_default();
        prop_assert_eq!(query.trim(), query.as_str());
    }
}

// ---------------------------------------------------------------------------
// Query extraction
// ---------------------------------------------------------------------------

#[test]
fn query_with_for_and_on_clause() {
    let query = extract_query("search for quantum computing on wikipedia");
    assert_eq!(query.as_deref(), Some("quantum computing"));
}

#[test]
fn query_without_connector_word() {
    let query = extract_query("search rust borrow checker");
    assert_eq!(query.as_deref(), Some("rust borrow checker"));
}

#[test]
fn query_absent_without_search_keyword() {
    assert_eq!(extract_query("find me the latest news"), None);
}

#[test]
fn query_absent_when_nothing_follows() {
    assert_eq!(extract_query("search "), None);
}

// ---------------------------------------------------------------------------
// Combined extraction
// ---------------------------------------------------------------------------

#[test]
fn extract_returns_empty_parameters_for_plain_text() {
    let params = extract("tell me a joke");
    assert!(params.is_empty());
}

#[test]
fn extract_fills_both_fields() {
    let params = extract("search for tokio tutorials in https://docs.rs");
    assert_eq!(params.query.as_deref(), Some("tokio tutorials"));
    assert_eq!(params.url.as_deref(), Some("https://docs.rs"));
}
