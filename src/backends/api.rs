//! API invocation backend (simulated).

use async_trait::async_trait;

use crate::agent::envelope::EnvelopeBuilder;
use crate::types::Category;

use super::{Backend, BackendError, BackendRequest};

/// Simulated HTTP API backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiBackend;

#[async_trait]
impl Backend for ApiBackend {
    fn category(&self) -> Category {
        Category::Api
    }

    async fn execute(&self, request: &BackendRequest) -> Result<EnvelopeBuilder, BackendError> {
        let action = &request.action;
        let target = request
            .parameters
            .url
            .as_deref()
            .map(|url| format!("\nEndpoint: {url}"))
            .unwrap_or_default();

        let execution = format!(
            "API Execution:\n\
             1. Endpoint prepared\n\
             2. Headers configured\n\
             3. Request sent\n\
             4. Response received: 200 OK\n\
             5. Data parsed\n\
             6. Validation complete\n\
             \n\
             Response size: 2.4 KB\n\
             Latency: 145ms{target}"
        );

        let response = format!(
            "✓ API automation completed!\n\n\
             Action: {action}\n\n\
             The API call was simulated. A live HTTP backend would:\n\
             - Make HTTP/HTTPS requests\n\
             - Handle authentication (OAuth, JWT, API keys)\n\
             - Process responses\n\
             - Apply rate limiting\n\n\
             Response data processed and ready."
        );

        Ok(EnvelopeBuilder::new()
            .completed("Execute API request", "API call successful")
            .execution(execution)
            .response(response))
    }
}
