//! Code execution collaborator (simulated sandbox).
//!
//! Returns a canned per-language profile after a short simulated run. The
//! caller's `timeout` is honored: a budget shorter than the run yields
//! [`ToolError::Timeout`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{check_len, ServiceDescriptor, ToolError};

/// Timeout applied when the request names none.
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Wall-clock time a simulated run takes.
pub const SIMULATED_RUN: Duration = Duration::from_millis(100);

/// Maximum accepted source size.
const MAX_CODE_LEN: usize = 64 * 1024;

/// Languages advertised by `GET /execute`.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "python",
    "javascript",
    "typescript",
    "bash",
    "ruby",
    "go",
    "rust",
    "java",
    "c++",
    "php",
];

const FEATURES: &[&str] = &[
    "Sandboxed execution",
    "Timeout protection",
    "Resource limits",
    "Multi-language support",
    "Real-time output streaming",
];

/// Body of `POST /execute`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExecuteRequest {
    /// Source to run.
    pub code: String,
    /// Language name. Unknown names run with the Python profile.
    pub language: String,
    /// Time budget in milliseconds. Fractions are honored.
    #[serde(default)]
    pub timeout: Option<f64>,
}

/// Output of a (simulated) run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionOutput {
    /// Captured stdout.
    pub stdout: String,
    /// Captured stderr.
    pub stderr: String,
    /// Process exit code.
    pub exit_code: i32,
    /// Human-readable run time.
    pub execution_time: String,
    /// Human-readable peak memory.
    pub memory_used: String,
}

/// Body returned by `POST /execute`.
#[derive(Debug, Clone, Serialize)]
pub struct ExecuteResponse {
    /// Always `true`; failures use the error body instead.
    pub success: bool,
    /// Run output.
    pub result: ExecutionOutput,
    /// RFC 3339 time the run completed.
    pub timestamp: String,
}

/// Runtime profile a request executes under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runtime {
    /// CPython.
    Python,
    /// Node.js.
    JavaScript,
    /// ts-node.
    TypeScript,
    /// POSIX shell.
    Bash,
}

impl Runtime {
    /// Resolve a language name. Anything unrecognized maps to Python.
    pub fn for_language(language: &str) -> Self {
        match language {
            "javascript" => Self::JavaScript,
            "typescript" => Self::TypeScript,
            "bash" => Self::Bash,
            _ => Self::Python,
        }
    }

    /// Canned output for this runtime.
    pub fn profile(self) -> ExecutionOutput {
        let (stdout, execution_time, memory_used) = match self {
            Self::Python => (
                "Hello from Python!\nExecution completed successfully.\n",
                "0.043s",
                "12.4 MB",
            ),
            Self::JavaScript => (
                "Hello from JavaScript!\nExecution completed successfully.\n",
                "0.021s",
                "8.2 MB",
            ),
            Self::TypeScript => (
                "Hello from TypeScript!\nCompiled and executed successfully.\n",
                "0.156s",
                "15.7 MB",
            ),
            Self::Bash => ("Command executed successfully\n", "0.012s", "4.1 MB"),
        };
        ExecutionOutput {
            stdout: stdout.to_owned(),
            stderr: String::new(),
            exit_code: 0,
            execution_time: execution_time.to_owned(),
            memory_used: memory_used.to_owned(),
        }
    }
}

/// Resolve a caller's budget in milliseconds.
///
/// Missing, negative and non-finite values fall back to [`DEFAULT_TIMEOUT_MS`].
pub fn time_budget(timeout: Option<f64>) -> Duration {
    timeout
        .filter(|ms| ms.is_finite() && *ms >= 0.0)
        .and_then(|ms| Duration::try_from_secs_f64(ms / 1000.0).ok())
        .unwrap_or(Duration::from_millis(DEFAULT_TIMEOUT_MS))
}

/// Run `request` in the simulated sandbox.
///
/// # Errors
///
/// Returns [`ToolError::InvalidInput`] for oversized source and
/// [`ToolError::Timeout`] when the budget is shorter than the run.
pub async fn run_code(request: &ExecuteRequest) -> Result<ExecuteResponse, ToolError> {
    check_len("code", &request.code, MAX_CODE_LEN)?;

    let runtime = Runtime::for_language(&request.language);
    let budget = time_budget(request.timeout);
    debug!(language = %request.language, ?runtime, ?budget, "running code");

    tokio::time::timeout(budget, tokio::time::sleep(SIMULATED_RUN))
        .await
        .map_err(|_| ToolError::Timeout { budget })?;

    Ok(ExecuteResponse {
        success: true,
        result: runtime.profile(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Descriptor for `GET /execute`.
pub fn service_descriptor() -> ServiceDescriptor {
    ServiceDescriptor {
        service: "Code Execution API",
        status: "online",
        capabilities: &[],
        supported_languages: SUPPORTED_LANGUAGES,
        features: FEATURES,
    }
}
