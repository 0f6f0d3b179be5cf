//! Automation backends, one per [`Category`].
//!
//! Every backend satisfies the same async contract: given the raw action,
//! the extracted parameters and the model identifier, produce an
//! [`EnvelopeBuilder`] or a [`BackendError`]. The bundled backends simulate
//! their work; a backend that drives a real browser, sandbox or HTTP client
//! plugs in through [`BackendRegistry::with_backend`] without any change to
//! the orchestrator.

use std::sync::Arc;

use async_trait::async_trait;

use crate::agent::envelope::EnvelopeBuilder;
use crate::types::{Category, Intent, Parameters};

pub mod api;
pub mod browser;
pub mod code;
pub mod file;
pub mod general;
pub mod scraper;

pub use api::ApiBackend;
pub use browser::BrowserBackend;
pub use code::CodeBackend;
pub use file::FileBackend;
pub use general::GeneralBackend;
pub use scraper::ScraperBackend;

/// Input handed to a backend for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendRequest {
    /// The original command text.
    pub action: String,
    /// Parameters extracted from the command.
    pub parameters: Parameters,
    /// Model identifier chosen by the caller.
    pub model: String,
}

impl BackendRequest {
    /// Build a request from a classified intent.
    pub fn from_intent(intent: Intent, model: impl Into<String>) -> Self {
        Self {
            action: intent.raw_action,
            parameters: intent.parameters,
            model: model.into(),
        }
    }
}

/// Errors a backend may signal.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The backend could not complete the action.
    #[error("{backend} backend execution failed: {reason}")]
    ExecutionFailed {
        /// Backend that failed.
        backend: Category,
        /// Human-readable cause.
        reason: String,
    },
    /// The backend did not finish within its time budget.
    #[error("{backend} backend timed out after {seconds}s")]
    Timeout {
        /// Backend that timed out.
        backend: Category,
        /// Time budget in seconds.
        seconds: u64,
    },
}

/// Contract every automation backend implements.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Category this backend serves.
    fn category(&self) -> Category;

    /// Perform the action and describe the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::ExecutionFailed`] when the action cannot be
    /// completed.
    async fn execute(&self, request: &BackendRequest) -> Result<EnvelopeBuilder, BackendError>;
}

/// One backend per category.
pub struct BackendRegistry {
    browser: Arc<dyn Backend>,
    code: Arc<dyn Backend>,
    api: Arc<dyn Backend>,
    scraper: Arc<dyn Backend>,
    file: Arc<dyn Backend>,
    general: Arc<dyn Backend>,
}

impl std::fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendRegistry").finish_non_exhaustive()
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::simulated()
    }
}

impl BackendRegistry {
    /// Registry populated with the bundled simulated backends.
    pub fn simulated() -> Self {
        Self {
            browser: Arc::new(BrowserBackend),
            code: Arc::new(CodeBackend),
            api: Arc::new(ApiBackend),
            scraper: Arc::new(ScraperBackend),
            file: Arc::new(FileBackend),
            general: Arc::new(GeneralBackend),
        }
    }

    /// Replace the backend serving `backend.category()`.
    pub fn with_backend(mut self, backend: Arc<dyn Backend>) -> Self {
        let slot = match backend.category() {
            Category::Browser => &mut self.browser,
            Category::Code => &mut self.code,
            Category::Api => &mut self.api,
            Category::Scraper => &mut self.scraper,
            Category::File => &mut self.file,
            Category::General => &mut self.general,
        };
        *slot = backend;
        self
    }

    /// Backend bound to `category`.
    pub fn get(&self, category: Category) -> Arc<dyn Backend> {
        let backend = match category {
            Category::Browser => &self.browser,
            Category::Code => &self.code,
            Category::Api => &self.api,
            Category::Scraper => &self.scraper,
            Category::File => &self.file,
            Category::General => &self.general,
        };
        Arc::clone(backend)
    }
}
