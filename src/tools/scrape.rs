//! Web scraping collaborator (simulated).

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{check_len, ServiceDescriptor, ToolError};

/// Wall-clock time a simulated scrape takes.
const SIMULATED_FETCH: Duration = Duration::from_millis(150);

/// Maximum accepted URL length.
const MAX_URL_LEN: usize = 16 * 1024;

const CAPABILITIES: &[&str] = &[
    "HTML parsing",
    "CSS selector extraction",
    "XPath queries",
    "JavaScript rendering",
    "Pagination handling",
    "Rate limiting",
    "Proxy support",
    "Data cleaning",
];

/// Body of `POST /scrape`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeRequest {
    /// Page to scrape.
    pub url: String,
    /// Selectors to apply, passed through untouched.
    #[serde(default)]
    pub selectors: Option<serde_json::Value>,
    /// Scraper options, passed through untouched.
    #[serde(default)]
    pub options: Option<serde_json::Value>,
}

/// One scraped item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Headline.
    pub title: String,
    /// Link to the article.
    pub url: String,
    /// Summary line.
    pub description: String,
    /// Publication date (YYYY-MM-DD).
    pub date: String,
    /// Byline.
    pub author: String,
}

/// Metadata describing a scrape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeMetadata {
    /// Page that was scraped.
    pub url: String,
    /// RFC 3339 time of the scrape.
    pub scraped_at: String,
    /// Number of items in `data`.
    pub item_count: usize,
}

/// Body returned by `POST /scrape`.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeResponse {
    /// Always `true`; failures use the error body instead.
    pub success: bool,
    /// Scraped items.
    pub data: Vec<Article>,
    /// Scrape metadata.
    pub metadata: ScrapeMetadata,
}

fn article(title: &str, url: &str, description: &str, date: &str, author: &str) -> Article {
    Article {
        title: title.to_owned(),
        url: url.to_owned(),
        description: description.to_owned(),
        date: date.to_owned(),
        author: author.to_owned(),
    }
}

/// Items every simulated scrape returns.
pub fn sample_articles() -> Vec<Article> {
    vec![
        article(
            "AI Breakthrough: New Model Achieves Human-Level Performance",
            "https://example.com/article1",
            "Researchers announce major advancement in AI capabilities...",
            "2024-01-15",
            "Tech News",
        ),
        article(
            "Open Source AI Models Gain Traction",
            "https://example.com/article2",
            "Community-driven AI development reaches new milestone...",
            "2024-01-14",
            "AI Weekly",
        ),
        article(
            "Browser Automation Tools See Massive Adoption",
            "https://example.com/article3",
            "Playwright and Puppeteer usage grows 300% year over year...",
            "2024-01-13",
            "Dev Report",
        ),
    ]
}

/// Scrape `request.url` (simulated).
///
/// # Errors
///
/// Returns [`ToolError::InvalidInput`] when the URL is blank or oversized.
pub async fn run_scrape(request: &ScrapeRequest) -> Result<ScrapeResponse, ToolError> {
    if request.url.trim().is_empty() {
        return Err(ToolError::InvalidInput(
            "missing required field: url".to_owned(),
        ));
    }
    check_len("url", &request.url, MAX_URL_LEN)?;
    debug!(url = %request.url, has_selectors = request.selectors.is_some(), "scraping");

    tokio::time::sleep(SIMULATED_FETCH).await;

    let data = sample_articles();
    Ok(ScrapeResponse {
        success: true,
        metadata: ScrapeMetadata {
            url: request.url.clone(),
            scraped_at: chrono::Utc::now().to_rfc3339(),
            item_count: data.len(),
        },
        data,
    })
}

/// Descriptor for `GET /scrape`.
pub fn service_descriptor() -> ServiceDescriptor {
    ServiceDescriptor {
        service: "Web Scraping API",
        status: "online",
        capabilities: CAPABILITIES,
        supported_languages: &[],
        features: &[],
    }
}
