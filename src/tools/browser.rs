//! Browser collaborator: validated, simulated browser actions.
//!
//! Mirrors the request shape a Playwright-backed service would accept.
//! Results are canned; input validation is real.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;
use url::Url;

use super::{check_len, ServiceDescriptor, ToolError};

/// Maximum length for string parameters (URL, selector, value).
const MAX_STRING_PARAM_LEN: usize = 16 * 1024;

/// Capabilities advertised by `GET /browser`.
const CAPABILITIES: &[&str] = &[
    "Navigate to URLs",
    "Click elements",
    "Type text",
    "Extract data",
    "Take screenshots",
    "Execute JavaScript",
    "Handle forms",
    "Manage cookies",
    "Handle authentication",
];

// ---------------------------------------------------------------------------
// Request / action
// ---------------------------------------------------------------------------

/// Body of `POST /browser`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrowserRequest {
    /// Action name, e.g. `navigate` or `click`.
    pub action: String,
    /// Target URL for `navigate`.
    #[serde(default)]
    pub url: Option<String>,
    /// CSS/XPath selector for element actions.
    #[serde(default)]
    pub selector: Option<String>,
    /// Text for `type`.
    #[serde(default)]
    pub value: Option<String>,
    /// Free-form driver options, passed through untouched.
    #[serde(default)]
    pub options: Option<serde_json::Value>,
}

/// A browser action. Unrecognized names fall back to [`BrowserAction::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserAction {
    /// Load a URL.
    Navigate,
    /// Click an element.
    Click,
    /// Type text into an element.
    Type,
    /// Capture the viewport.
    Screenshot,
    /// Extract data from matching elements.
    Extract,
    /// Run a script in the page.
    Execute,
    /// Anything else; simulated generically.
    Other(String),
}

impl BrowserAction {
    /// Parse an action name. Matching is exact.
    pub fn parse(name: &str) -> Self {
        match name {
            "navigate" => Self::Navigate,
            "click" => Self::Click,
            "type" => Self::Type,
            "screenshot" => Self::Screenshot,
            "extract" => Self::Extract,
            "execute" => Self::Execute,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// Body returned by `POST /browser`.
#[derive(Debug, Clone, Serialize)]
pub struct BrowserResponse {
    /// Always `true`; failures use the error body instead.
    pub success: bool,
    /// Action-specific result object.
    pub result: serde_json::Value,
    /// RFC 3339 time the action completed.
    pub timestamp: String,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a browser request and resolve its action.
///
/// # Errors
///
/// Returns [`ToolError::InvalidInput`] if the action is empty, a string
/// parameter exceeds safety limits, or `navigate` lacks a valid URL.
pub fn validate_browser_request(request: &BrowserRequest) -> Result<BrowserAction, ToolError> {
    if request.action.trim().is_empty() {
        return Err(ToolError::InvalidInput(
            "missing required field: action".to_owned(),
        ));
    }
    check_len("action", &request.action, MAX_STRING_PARAM_LEN)?;
    for (key, value) in [
        ("url", &request.url),
        ("selector", &request.selector),
        ("value", &request.value),
    ] {
        if let Some(v) = value {
            check_len(key, v, MAX_STRING_PARAM_LEN)?;
        }
    }

    let action = BrowserAction::parse(&request.action);
    if action == BrowserAction::Navigate {
        let raw = request
            .url
            .as_deref()
            .ok_or_else(|| ToolError::InvalidInput("navigate action requires url".to_owned()))?;
        Url::parse(raw).map_err(|e| {
            ToolError::InvalidInput(format!("invalid url for navigate action: {e}"))
        })?;
    }
    Ok(action)
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

/// Validate and simulate a browser action.
///
/// # Errors
///
/// Returns [`ToolError`] on validation failure.
pub fn run_browser(request: &BrowserRequest) -> Result<BrowserResponse, ToolError> {
    let action = validate_browser_request(request)?;
    debug!(action = %request.action, "simulating browser action");

    let result = match action {
        BrowserAction::Navigate => json!({
            "action": "navigate",
            "url": request.url,
            "status": "success",
            "loadTime": "1.2s",
            "resources": 42,
        }),
        BrowserAction::Click => json!({
            "action": "click",
            "selector": request.selector,
            "status": "success",
            "element": "button",
        }),
        BrowserAction::Type => json!({
            "action": "type",
            "selector": request.selector,
            "value": request.value,
            "status": "success",
        }),
        BrowserAction::Screenshot => json!({
            "action": "screenshot",
            "status": "success",
            "format": "png",
            "size": "1920x1080",
            "data": "base64_screenshot_data_here",
        }),
        BrowserAction::Extract => json!({
            "action": "extract",
            "selector": request.selector,
            "status": "success",
            "data": [
                { "title": "Result 1", "link": "https://example.com/1" },
                { "title": "Result 2", "link": "https://example.com/2" },
                { "title": "Result 3", "link": "https://example.com/3" },
            ],
        }),
        BrowserAction::Execute => json!({
            "action": "execute",
            "status": "success",
            "result": "JavaScript executed successfully",
        }),
        BrowserAction::Other(name) => json!({
            "action": name,
            "status": "completed",
            "message": "Action simulated successfully",
        }),
    };

    Ok(BrowserResponse {
        success: true,
        result,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Descriptor for `GET /browser`.
pub fn service_descriptor() -> ServiceDescriptor {
    ServiceDescriptor {
        service: "Browser Automation API",
        status: "online",
        capabilities: CAPABILITIES,
        supported_languages: &[],
        features: &[],
    }
}
