//! Core request and result types shared by the classifier, the backends and
//! the HTTP surface.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// Wire shape of an agent request (`POST /agent`).
#[derive(Debug, Clone, Deserialize)]
pub struct AgentRequest {
    /// Free-form natural-language command.
    pub message: String,
    /// Caller-chosen model identifier. Falls back to the configured default.
    #[serde(default)]
    pub model: Option<String>,
}

/// A natural-language command with the model it should run under.
///
/// The model identifier is opaque; it is echoed by backends but never
/// checked against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Free-form natural-language command.
    pub message: String,
    /// Model identifier.
    pub model: String,
}

impl Command {
    /// Create a command from its parts.
    pub fn new(message: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            model: model.into(),
        }
    }

    /// Build a command from a wire request, using `default_model` when the
    /// request names none.
    pub fn from_request(request: AgentRequest, default_model: &str) -> Self {
        let model = request
            .model
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| default_model.to_owned());
        Self {
            message: request.message,
            model,
        }
    }
}

// ---------------------------------------------------------------------------
// Intent
// ---------------------------------------------------------------------------

/// Automation category an intent is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Browser control (navigate, click, search).
    Browser,
    /// Code generation.
    Code,
    /// API invocation.
    Api,
    /// Web scraping.
    Scraper,
    /// File system operations.
    File,
    /// Anything no keyword set claims.
    General,
}

impl Category {
    /// Lowercase name used on the wire and in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Code => "code",
            Self::Api => "api",
            Self::Scraper => "scraper",
            Self::File => "file",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured fields pulled out of the command text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameters {
    /// First `http(s)://` URL in the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Search query following "search", "search for" or "search about".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl Parameters {
    /// Returns `true` when neither field was extracted.
    pub fn is_empty(&self) -> bool {
        self.url.is_none() && self.query.is_none()
    }
}

/// A classified command, consumed once by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    /// Backend category chosen by the classifier.
    pub category: Category,
    /// The original command text.
    pub raw_action: String,
    /// Extracted parameters, present regardless of category.
    pub parameters: Parameters,
}

// ---------------------------------------------------------------------------
// Task / envelope
// ---------------------------------------------------------------------------

/// Lifecycle state of a reported task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Not started.
    Pending,
    /// In progress.
    Running,
    /// Finished successfully.
    Completed,
    /// Finished with an error.
    Error,
}

/// A unit of work reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Identifier, unique within its envelope.
    pub id: String,
    /// What the task did.
    pub description: String,
    /// Final status.
    pub status: TaskStatus,
    /// Optional short outcome.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

/// The uniform output of every successful request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    /// Human-readable summary.
    pub response: String,
    /// Tasks in creation order.
    pub tasks: Vec<Task>,
    /// Narrative execution trace.
    pub execution: String,
}
