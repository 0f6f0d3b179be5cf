//! Browser automation backend (simulated).

use async_trait::async_trait;
use tracing::debug;

use crate::agent::envelope::EnvelopeBuilder;
use crate::types::Category;

use super::{Backend, BackendError, BackendRequest};

/// Query used when a search command names none.
pub const DEFAULT_QUERY: &str = "AI news";

/// URL used when a navigation command names none.
pub const DEFAULT_URL: &str = "https://example.com";

/// Which narrative the browser backend produces for an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserFlow {
    /// Web search through a search engine.
    Search,
    /// Direct navigation to a URL.
    Navigate,
    /// Any other scripted interaction.
    Generic,
}

impl BrowserFlow {
    /// Pick the flow for `action`. Search takes precedence over navigation.
    pub fn for_action(action: &str) -> Self {
        let lower = action.to_lowercase();
        if lower.contains("search") {
            Self::Search
        } else if lower.contains("open") || lower.contains("navigate") {
            Self::Navigate
        } else {
            Self::Generic
        }
    }
}

/// Simulated headless-browser backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserBackend;

#[async_trait]
impl Backend for BrowserBackend {
    fn category(&self) -> Category {
        Category::Browser
    }

    async fn execute(&self, request: &BackendRequest) -> Result<EnvelopeBuilder, BackendError> {
        let action = request.action.as_str();
        let flow = BrowserFlow::for_action(action);
        debug!(
            ?flow,
            uses_defaults = request.parameters.is_empty(),
            "running browser flow"
        );

        let execution = match flow {
            BrowserFlow::Search => {
                let query = request.parameters.query.as_deref().unwrap_or(DEFAULT_QUERY);
                format!(
                    "Browser Automation Steps:\n\
                     1. Launched headless browser\n\
                     2. Navigated to https://www.google.com\n\
                     3. Located search input field\n\
                     4. Entered query: \"{query}\"\n\
                     5. Clicked search button\n\
                     6. Retrieved top 10 results\n\
                     7. Extracted titles and URLs\n\
                     \n\
                     Results:\n\
                     - Found 10 relevant articles\n\
                     - Total execution time: 2.3s\n\
                     - Screenshots saved"
                )
            }
            BrowserFlow::Navigate => {
                let url = request.parameters.url.as_deref().unwrap_or(DEFAULT_URL);
                format!(
                    "Browser Navigation:\n\
                     1. Launched browser instance\n\
                     2. Navigated to: {url}\n\
                     3. Page loaded successfully\n\
                     4. DOM ready\n\
                     5. Screenshots captured\n\
                     6. Resources: 42 files loaded\n\
                     7. Total time: 1.8s"
                )
            }
            BrowserFlow::Generic => format!(
                "Browser Automation Executed:\n\
                 1. Browser instance created\n\
                 2. Automation script compiled\n\
                 3. Actions performed: {action}\n\
                 4. Results captured\n\
                 5. Browser closed\n\
                 6. Status: Success"
            ),
        };

        let response = format!(
            "✓ Browser automation completed successfully!\n\n\
             Action: {action}\n\n\
             The browser actions were simulated. With a live browser driver this would:\n\
             - Launch headless Chrome/Firefox\n\
             - Run Playwright scripts\n\
             - Interact with page elements\n\
             - Capture screenshots and data"
        );

        Ok(EnvelopeBuilder::new()
            .completed("Initialize browser automation engine", "Browser engine ready")
            .completed(action, "Automation completed successfully")
            .execution(execution)
            .response(response))
    }
}
