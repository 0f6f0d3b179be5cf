//! External collaborator services exposed next to the agent endpoint.
//!
//! Each module simulates one automation service behind the request/response
//! shape a real implementation must keep:
//! - [`browser`]: browser actions (`POST /browser`)
//! - [`execute`]: sandboxed code execution (`POST /execute`)
//! - [`scrape`]: web scraping (`POST /scrape`)
//! - [`models`]: read-only model catalog (`GET /models`)

pub mod browser;
pub mod execute;
pub mod models;
pub mod scrape;

/// Errors produced by collaborator services.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Request failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Execution exceeded the caller's timeout.
    #[error("execution timed out after {budget:?}")]
    Timeout {
        /// Time budget that elapsed.
        budget: std::time::Duration,
    },
}

/// Service descriptor returned by `GET` on a collaborator endpoint.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescriptor {
    /// Service name.
    pub service: &'static str,
    /// Always `online` while the process serves requests.
    pub status: &'static str,
    /// What the service can do.
    #[serde(skip_serializing_if = "is_empty")]
    pub capabilities: &'static [&'static str],
    /// Languages accepted (code execution only).
    #[serde(skip_serializing_if = "is_empty")]
    pub supported_languages: &'static [&'static str],
    /// Service features (code execution only).
    #[serde(skip_serializing_if = "is_empty")]
    pub features: &'static [&'static str],
}

fn is_empty(list: &&[&str]) -> bool {
    list.is_empty()
}

/// Check that `value` is at most `max_len` bytes.
pub(crate) fn check_len(key: &str, value: &str, max_len: usize) -> Result<(), ToolError> {
    if value.len() > max_len {
        return Err(ToolError::InvalidInput(format!(
            "{key} exceeds maximum length of {max_len} bytes"
        )));
    }
    Ok(())
}
