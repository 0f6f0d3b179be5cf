//! Tests for `src/server/mod.rs`: every route over a real socket.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use autoagent::agent::Orchestrator;
use autoagent::backends::BackendRegistry;
use autoagent::server::{self, AppState};
use autoagent::tools::models::ModelCatalog;

struct TestServer {
    addr: SocketAddr,
    client: reqwest::Client,
    _shutdown: oneshot::Sender<()>,
}

impl TestServer {
    async fn start() -> Self {
        let state = Arc::new(AppState {
            orchestrator: Orchestrator::new(
                Arc::new(BackendRegistry::simulated()),
                Duration::from_secs(5),
                "mixtral-8x7b",
            ),
            catalog: ModelCatalog::builtin(),
        });
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("should bind");
        let addr = listener.local_addr().expect("should have address");
        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let shutdown = async {
                let _ = rx.await;
            };
            server::serve(listener, state, shutdown)
                .await
                .expect("server should run");
        });
        Self {
            addr,
            client: reqwest::Client::new(),
            _shutdown: tx,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    async fn post_raw(&self, path: &str, body: &'static str) -> (u16, Value) {
        let response = self
            .client
            .post(self.url(path))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("request should complete");
        let status = response.status().as_u16();
        let value = response.json().await.expect("body should be json");
        (status, value)
    }

    async fn post(&self, path: &str, body: Value) -> (u16, Value) {
        let response = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .expect("request should complete");
        let status = response.status().as_u16();
        let value = response.json().await.expect("body should be json");
        (status, value)
    }

    async fn get(&self, path: &str) -> (u16, Value) {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("request should complete");
        let status = response.status().as_u16();
        let value = response.json().await.expect("body should be json");
        (status, value)
    }
}

// ---------------------------------------------------------------------------
// /agent
// ---------------------------------------------------------------------------

#[tokio::test]
async fn agent_returns_envelope() {
    let server = TestServer::start().await;
    let (status, body) = server
        .post(
            "/agent",
            json!({"message": "Open https://news.site and read the headlines", "model": "mistral-7b"}),
        )
        .await;

    assert_eq!(status, 200);
    assert!(body["response"].as_str().is_some_and(|s| !s.is_empty()));
    assert!(body["execution"]
        .as_str()
        .is_some_and(|s| s.contains("https://news.site")));
    assert_eq!(body["tasks"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["tasks"][0]["status"], "completed");
}

#[tokio::test]
async fn agent_uses_default_model_when_omitted() {
    let server = TestServer::start().await;
    let (status, body) = server
        .post("/agent", json!({"message": "write a program"}))
        .await;
    assert_eq!(status, 200);
    assert!(body["response"]
        .as_str()
        .is_some_and(|s| s.contains("mixtral-8x7b")));
}

#[tokio::test]
async fn agent_oversized_body_is_structured_failure() {
    let server = TestServer::start().await;
    let message = "a".repeat(3 * 1024 * 1024);
    let (status, body) = server
        .post("/agent", json!({"message": message, "model": "m"}))
        .await;
    assert_eq!(status, 500);
    assert_eq!(body["error"], "Agent processing failed");
    assert!(body["details"]
        .as_str()
        .is_some_and(|s| s.contains("length limit")));
}

#[tokio::test]
async fn agent_malformed_body_is_failure() {
    let server = TestServer::start().await;
    let (status, body) = server.post_raw("/agent", "{not json").await;
    assert_eq!(status, 500);
    assert_eq!(body["error"], "Agent processing failed");
    assert!(body["details"].as_str().is_some_and(|s| !s.is_empty()));
}

// ---------------------------------------------------------------------------
// Collaborators
// ---------------------------------------------------------------------------

#[tokio::test]
async fn browser_post_and_get() {
    let server = TestServer::start().await;
    let (status, body) = server
        .post("/browser", json!({"action": "click", "selector": "#go"}))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["result"]["selector"], "#go");

    let (status, body) = server.get("/browser").await;
    assert_eq!(status, 200);
    assert_eq!(body["service"], "Browser Automation API");
}

#[tokio::test]
async fn browser_invalid_request_is_failure() {
    let server = TestServer::start().await;
    let (status, body) = server.post("/browser", json!({"action": "navigate"})).await;
    assert_eq!(status, 500);
    assert_eq!(body["success"], false);
    assert!(body["error"]
        .as_str()
        .is_some_and(|s| s.contains("requires url")));
}

#[tokio::test]
async fn execute_post_and_get() {
    let server = TestServer::start().await;
    let (status, body) = server
        .post("/execute", json!({"code": "echo hi", "language": "bash"}))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["result"]["exitCode"], 0);

    let (_, body) = server.get("/execute").await;
    assert_eq!(body["service"], "Code Execution API");
    assert!(body["supportedLanguages"].is_array());
}

#[tokio::test]
async fn execute_accepts_fractional_timeout() {
    let server = TestServer::start().await;
    let (status, body) = server
        .post(
            "/execute",
            json!({"code": "print(1)", "language": "python", "timeout": 2500.5}),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn execute_timeout_is_failure() {
    let server = TestServer::start().await;
    let (status, body) = server
        .post(
            "/execute",
            json!({"code": "sleep 10", "language": "bash", "timeout": 1}),
        )
        .await;
    assert_eq!(status, 500);
    assert!(body["error"].as_str().is_some_and(|s| s.contains("timed out")));
}

#[tokio::test]
async fn scrape_post_and_get() {
    let server = TestServer::start().await;
    let (status, body) = server
        .post("/scrape", json!({"url": "https://news.example"}))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["metadata"]["itemCount"], 3);

    let (_, body) = server.get("/scrape").await;
    assert_eq!(body["service"], "Web Scraping API");
}

#[tokio::test]
async fn scrape_missing_url_is_failure() {
    let server = TestServer::start().await;
    let (status, body) = server.post("/scrape", json!({})).await;
    assert_eq!(status, 500);
    assert_eq!(body["success"], false);
}

// ---------------------------------------------------------------------------
// Reference data
// ---------------------------------------------------------------------------

#[tokio::test]
async fn models_lists_catalog() {
    let server = TestServer::start().await;
    let (status, body) = server.get("/models").await;
    assert_eq!(status, 200);
    assert_eq!(body["total"], 8);
    assert_eq!(body["models"].as_array().map(Vec::len), Some(8));
    assert!(body["categories"]["Fast Inference"].is_array());
}

#[tokio::test]
async fn health_reports_ok() {
    let server = TestServer::start().await;
    let (status, body) = server.get("/health").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
