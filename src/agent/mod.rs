//! Dispatch orchestrator: classifies a command, runs exactly one backend and
//! returns a complete [`ResultEnvelope`] or an [`AgentProcessingFailed`].
//!
//! The orchestrator is stateless between requests. Each backend call runs in
//! its own Tokio task under a time budget, so a failing, panicking or stalled
//! backend surfaces as a failure value instead of taking the caller down.

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};
use uuid::Uuid;

pub mod envelope;

use crate::backends::{BackendError, BackendRegistry, BackendRequest};
use crate::config::AgentConfig;
use crate::extractors::parse_intent;
use crate::types::{AgentRequest, Command, Intent, ResultEnvelope};

use self::envelope::EnvelopeError;

/// Summary text of every agent failure.
pub const FAILURE_SUMMARY: &str = "Agent processing failed";

/// Details text used when a failure carries no message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Underlying reason a request failed.
#[derive(Debug, thiserror::Error)]
pub enum FailureCause {
    /// The payload could not be parsed as an agent request.
    #[error("malformed request: {0}")]
    MalformedRequest(String),
    /// The selected backend signalled a failure or timed out.
    #[error(transparent)]
    Backend(#[from] BackendError),
    /// The backend returned output with a missing field.
    #[error("incomplete result envelope: {0}")]
    IncompleteEnvelope(#[from] EnvelopeError),
    /// The backend task panicked or was cancelled.
    #[error("{0}")]
    Aborted(String),
}

/// The single failure signal leaving the orchestrator.
#[derive(Debug, thiserror::Error)]
#[error("Agent processing failed")]
pub struct AgentProcessingFailed {
    /// What went wrong.
    #[source]
    pub cause: FailureCause,
}

impl AgentProcessingFailed {
    /// Human-readable cause, or [`UNKNOWN_ERROR`] when the cause has no message.
    pub fn details(&self) -> String {
        let message = self.cause.to_string();
        if message.trim().is_empty() {
            UNKNOWN_ERROR.to_owned()
        } else {
            message
        }
    }
}

impl From<FailureCause> for AgentProcessingFailed {
    fn from(cause: FailureCause) -> Self {
        Self { cause }
    }
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// Routes commands to backends and normalizes their output.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    registry: Arc<BackendRegistry>,
    backend_timeout: Duration,
    default_model: String,
}

impl Orchestrator {
    /// Create an orchestrator over `registry`.
    pub fn new(
        registry: Arc<BackendRegistry>,
        backend_timeout: Duration,
        default_model: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            backend_timeout,
            default_model: default_model.into(),
        }
    }

    /// Create an orchestrator with the simulated backends and the configured
    /// timeout and default model.
    pub fn from_config(config: &AgentConfig) -> Self {
        Self::new(
            Arc::new(BackendRegistry::simulated()),
            Duration::from_secs(config.backend_timeout_secs),
            config.default_model.clone(),
        )
    }

    /// Model used when a request names none.
    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// Parse a raw JSON payload and process it.
    ///
    /// # Errors
    ///
    /// Returns [`AgentProcessingFailed`] with [`FailureCause::MalformedRequest`]
    /// when the payload is not an agent request, or any failure from
    /// [`Self::process`].
    pub async fn handle_payload(
        &self,
        payload: &[u8],
    ) -> Result<ResultEnvelope, AgentProcessingFailed> {
        let request: AgentRequest = serde_json::from_slice(payload).map_err(|e| {
            warn!(error = %e, "rejecting malformed agent payload");
            FailureCause::MalformedRequest(e.to_string())
        })?;
        let command = Command::from_request(request, &self.default_model);
        self.process(&command).await
    }

    /// Classify `command` and dispatch it.
    ///
    /// # Errors
    ///
    /// Returns [`AgentProcessingFailed`] when the backend fails.
    pub async fn process(&self, command: &Command) -> Result<ResultEnvelope, AgentProcessingFailed> {
        let intent = parse_intent(&command.message);
        self.dispatch(intent, &command.model).await
    }

    /// Run the backend bound to `intent.category` and finish its envelope.
    ///
    /// # Errors
    ///
    /// Returns [`AgentProcessingFailed`] when the backend signals an error,
    /// exceeds the time budget, panics, or returns an incomplete envelope.
    pub async fn dispatch(
        &self,
        intent: Intent,
        model: &str,
    ) -> Result<ResultEnvelope, AgentProcessingFailed> {
        let request_id = Uuid::new_v4();
        let category = intent.category;
        info!(
            %request_id,
            %category,
            model,
            has_url = intent.parameters.url.is_some(),
            has_query = intent.parameters.query.is_some(),
            "dispatching command"
        );

        let backend = self.registry.get(category);
        let request = BackendRequest::from_intent(intent, model);
        let mut handle = tokio::spawn(async move { backend.execute(&request).await });

        let outcome = match tokio::time::timeout(self.backend_timeout, &mut handle).await {
            Ok(Ok(result)) => result.map_err(FailureCause::from),
            Ok(Err(join_err)) => Err(FailureCause::Aborted(if join_err.is_panic() {
                panic_message(join_err.into_panic())
            } else {
                "backend task was cancelled".to_owned()
            })),
            Err(_) => {
                handle.abort();
                Err(FailureCause::Backend(BackendError::Timeout {
                    backend: category,
                    seconds: self.backend_timeout.as_secs(),
                }))
            }
        };

        let result = outcome.and_then(|builder| {
            debug!(%request_id, tasks = builder.task_count(), "backend returned");
            builder.build().map_err(FailureCause::from)
        });
        match result {
            Ok(envelope) => {
                info!(
                    %request_id,
                    %category,
                    tasks = envelope.tasks.len(),
                    "command completed"
                );
                Ok(envelope)
            }
            Err(cause) => {
                let failure = AgentProcessingFailed::from(cause);
                warn!(%request_id, %category, details = %failure.details(), "command failed");
                Err(failure)
            }
        }
    }
}

/// Best-effort text from a panic payload. Empty when the payload is not a string.
fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        return (*s).to_owned();
    }
    if let Some(s) = payload.downcast_ref::<String>() {
        return s.clone();
    }
    String::new()
}
