//! Tests for `src/tools/browser.rs`: request validation and simulated actions.

use serde_json::json;

use autoagent::tools::browser::{
    run_browser, service_descriptor, validate_browser_request, BrowserAction, BrowserRequest,
};
use autoagent::tools::ToolError;

fn request(value: serde_json::Value) -> BrowserRequest {
    serde_json::from_value(value).expect("should deserialize")
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn blank_action_is_rejected() {
    let err = validate_browser_request(&request(json!({"action": "  "})))
        .expect_err("should fail");
    assert!(matches!(err, ToolError::InvalidInput(_)));
    assert!(err.to_string().contains("action"));
}

#[test]
fn missing_action_fails_to_deserialize() {
    let result: Result<BrowserRequest, _> = serde_json::from_value(json!({"url": "https://a.b"}));
    assert!(result.is_err());
}

#[test]
fn navigate_without_url_is_rejected() {
    let err = validate_browser_request(&request(json!({"action": "navigate"})))
        .expect_err("should fail");
    assert!(err.to_string().contains("requires url"));
}

#[test]
fn navigate_with_relative_url_is_rejected() {
    let err = validate_browser_request(&request(json!({
        "action": "navigate",
        "url": "/just/a/path"
    })))
    .expect_err("should fail");
    assert!(err.to_string().contains("invalid url"));
}

#[test]
fn oversized_selector_is_rejected() {
    let err = validate_browser_request(&request(json!({
        "action": "click",
        "selector": "a".repeat(16 * 1024 + 1)
    })))
    .expect_err("should fail");
    assert!(err.to_string().contains("selector exceeds maximum length of 16384 bytes"));
}

#[test]
fn known_actions_resolve() {
    for (name, expected) in [
        ("navigate", BrowserAction::Navigate),
        ("click", BrowserAction::Click),
        ("type", BrowserAction::Type),
        ("screenshot", BrowserAction::Screenshot),
        ("extract", BrowserAction::Extract),
        ("execute", BrowserAction::Execute),
    ] {
        let action = validate_browser_request(&request(json!({
            "action": name,
            "url": "https://example.com"
        })))
        .unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(action, expected);
    }
}

// ---------------------------------------------------------------------------
// Simulated results
// ---------------------------------------------------------------------------

#[test]
fn navigate_echoes_url() {
    let response = run_browser(&request(json!({
        "action": "navigate",
        "url": "https://news.site"
    })))
    .expect("should run");
    assert!(response.success);
    assert_eq!(response.result["url"], "https://news.site");
    assert_eq!(response.result["status"], "success");
}

#[test]
fn type_echoes_selector_and_value() {
    let response = run_browser(&request(json!({
        "action": "type",
        "selector": "#q",
        "value": "rust"
    })))
    .expect("should run");
    assert_eq!(response.result["selector"], "#q");
    assert_eq!(response.result["value"], "rust");
}

#[test]
fn extract_returns_three_items() {
    let response = run_browser(&request(json!({"action": "extract", "selector": "h2"})))
        .expect("should run");
    assert_eq!(response.result["data"].as_array().map(Vec::len), Some(3));
}

#[test]
fn unknown_action_is_completed_generically() {
    let response =
        run_browser(&request(json!({"action": "hover"}))).expect("should run");
    assert_eq!(response.result["action"], "hover");
    assert_eq!(response.result["status"], "completed");
}

#[test]
fn timestamp_is_rfc3339() {
    let response =
        run_browser(&request(json!({"action": "screenshot"}))).expect("should run");
    assert!(chrono::DateTime::parse_from_rfc3339(&response.timestamp).is_ok());
}

#[test]
fn descriptor_lists_capabilities() {
    let value = serde_json::to_value(service_descriptor()).expect("should serialize");
    assert_eq!(value["status"], "online");
    assert_eq!(value["capabilities"].as_array().map(Vec::len), Some(9));
    assert!(value.get("supportedLanguages").is_none());
}
