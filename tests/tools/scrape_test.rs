//! Tests for `src/tools/scrape.rs`: simulated scraping responses.

use serde_json::json;

use autoagent::tools::scrape::{run_scrape, sample_articles, service_descriptor, ScrapeRequest};

#[tokio::test(start_paused = true)]
async fn scrape_returns_sample_articles_with_metadata() {
    let request: ScrapeRequest = serde_json::from_value(json!({
        "url": "https://news.example/tech",
        "selectors": {"title": "h2"}
    }))
    .expect("should deserialize");

    let response = run_scrape(&request).await.expect("should scrape");
    assert!(response.success);
    assert_eq!(response.data, sample_articles());

    let value = serde_json::to_value(&response).expect("should serialize");
    assert_eq!(value["metadata"]["url"], "https://news.example/tech");
    assert_eq!(value["metadata"]["itemCount"], 3);
    assert!(value["metadata"]["scrapedAt"].is_string());
}

#[test]
fn request_requires_url() {
    let result: Result<ScrapeRequest, _> = serde_json::from_value(json!({"selectors": {}}));
    assert!(result.is_err());
}

#[test]
fn descriptor_lists_capabilities() {
    let descriptor = service_descriptor();
    assert_eq!(descriptor.service, "Web Scraping API");
    assert!(descriptor.capabilities.contains(&"CSS selector extraction"));
}
