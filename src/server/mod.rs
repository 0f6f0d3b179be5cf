//! HTTP surface: the agent endpoint plus the collaborator services.
//!
//! Request bodies are taken as raw bytes and parsed here, so malformed JSON
//! and bodies over [`MAX_BODY_BYTES`] get the same failure body as any other
//! error instead of the framework's default rejection.

use std::future::Future;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::agent::{AgentProcessingFailed, FailureCause, Orchestrator, FAILURE_SUMMARY};
use crate::tools::models::ModelCatalog;
use crate::tools::{browser, execute, scrape, ToolError};

/// Shared, read-only server state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Agent orchestrator.
    pub orchestrator: Orchestrator,
    /// Model catalog loaded at startup.
    pub catalog: ModelCatalog,
}

/// Failure body of `POST /agent`.
#[derive(Debug, Clone, Serialize)]
pub struct AgentErrorBody {
    /// Always "Agent processing failed".
    pub error: String,
    /// Underlying cause.
    pub details: String,
}

/// Failure body of the collaborator endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ToolErrorBody {
    /// Always `false`.
    pub success: bool,
    /// What went wrong.
    pub error: String,
}

/// Largest request body accepted on any route.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
    version: &'static str,
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/agent", post(agent_handler))
        .route("/browser", post(browser_handler).get(browser_info))
        .route("/execute", post(execute_handler).get(execute_info))
        .route("/scrape", post(scrape_handler).get(scrape_info))
        .route("/models", get(models_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    info!(%addr, "http server listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!("http server error: {e}"))?;
    info!("http server stopped");
    Ok(())
}

// ---------------------------------------------------------------------------
// Agent
// ---------------------------------------------------------------------------

async fn agent_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let result = match body {
        Ok(body) => state.orchestrator.handle_payload(&body).await,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "rejecting unreadable agent body");
            Err(AgentProcessingFailed::from(FailureCause::MalformedRequest(
                rejection.body_text(),
            )))
        }
    };
    match result {
        Ok(envelope) => (StatusCode::OK, Json(envelope)).into_response(),
        Err(failure) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(AgentErrorBody {
                error: FAILURE_SUMMARY.to_owned(),
                details: failure.details(),
            }),
        )
            .into_response(),
    }
}

// ---------------------------------------------------------------------------
// Collaborators
// ---------------------------------------------------------------------------

fn tool_failure(error: impl ToString) -> Response {
    let error = error.to_string();
    warn!(%error, "collaborator request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ToolErrorBody {
            success: false,
            error,
        }),
    )
        .into_response()
}

fn parse_body<T: DeserializeOwned>(body: Result<Bytes, BytesRejection>) -> Result<T, ToolError> {
    let body = body.map_err(|rejection| ToolError::InvalidInput(rejection.body_text()))?;
    serde_json::from_slice(&body).map_err(|e| ToolError::InvalidInput(e.to_string()))
}

async fn browser_handler(body: Result<Bytes, BytesRejection>) -> Response {
    let result = parse_body(body).and_then(|request| browser::run_browser(&request));
    match result {
        Ok(response) => Json(response).into_response(),
        Err(e) => tool_failure(e),
    }
}

async fn browser_info() -> Response {
    Json(browser::service_descriptor()).into_response()
}

async fn execute_handler(body: Result<Bytes, BytesRejection>) -> Response {
    let request: execute::ExecuteRequest = match parse_body(body) {
        Ok(request) => request,
        Err(e) => return tool_failure(e),
    };
    match execute::run_code(&request).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => tool_failure(e),
    }
}

async fn execute_info() -> Response {
    Json(execute::service_descriptor()).into_response()
}

async fn scrape_handler(body: Result<Bytes, BytesRejection>) -> Response {
    let request: scrape::ScrapeRequest = match parse_body(body) {
        Ok(request) => request,
        Err(e) => return tool_failure(e),
    };
    match scrape::run_scrape(&request).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => tool_failure(e),
    }
}

async fn scrape_info() -> Response {
    Json(scrape::service_descriptor()).into_response()
}

// ---------------------------------------------------------------------------
// Reference data
// ---------------------------------------------------------------------------

async fn models_handler(State(state): State<Arc<AppState>>) -> Response {
    Json(state.catalog.response()).into_response()
}

async fn health_handler() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
