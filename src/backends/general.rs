//! Fallback backend for commands no keyword set claims.

use async_trait::async_trait;

use crate::agent::envelope::EnvelopeBuilder;
use crate::types::Category;

use super::{Backend, BackendError, BackendRequest};

/// Generic task backend. Echoes the model and lists what the agent can do.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralBackend;

#[async_trait]
impl Backend for GeneralBackend {
    fn category(&self) -> Category {
        Category::General
    }

    async fn execute(&self, request: &BackendRequest) -> Result<EnvelopeBuilder, BackendError> {
        let BackendRequest { action, model, .. } = request;

        let execution = format!(
            "AI Agent Execution:\n\
             1. Model: {model}\n\
             2. Task analysis complete\n\
             3. Execution plan created\n\
             4. Automation steps executed\n\
             5. Results validated\n\
             6. Success confirmation\n\
             \n\
             All operations completed successfully."
        );

        let response = format!(
            "✓ Task processed by AI Agent!\n\n\
             Model: {model}\n\
             Action: {action}\n\n\
             The agent can handle:\n\
             • Browser automation\n\
             • Code generation\n\
             • API integrations\n\
             • Data scraping\n\
             • File operations\n\n\
             Try a more specific command for detailed automation."
        );

        Ok(EnvelopeBuilder::new()
            .completed(action.as_str(), "Task completed")
            .execution(execution)
            .response(response))
    }
}
