//! Configuration loading and validation.
//!
//! Loads `config.toml` from `--config`, `$AUTOAGENT_CONFIG`, or
//! `~/.autoagent/config.toml`. A missing default file means defaults.
//!
//! Precedence: env vars > config file > defaults.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::tools::models::ModelCatalog;

/// Env var naming the config file.
pub const CONFIG_PATH_ENV: &str = "AUTOAGENT_CONFIG";
/// Env var overriding `server.bind_addr`.
pub const BIND_ADDR_ENV: &str = "AUTOAGENT_BIND_ADDR";
/// Env var overriding `agent.default_model`.
pub const DEFAULT_MODEL_ENV: &str = "AUTOAGENT_DEFAULT_MODEL";
/// Env var overriding `agent.backend_timeout_secs`.
pub const BACKEND_TIMEOUT_ENV: &str = "AUTOAGENT_BACKEND_TIMEOUT_SECS";
/// Env var overriding `logging.logs_dir`.
pub const LOGS_DIR_ENV: &str = "AUTOAGENT_LOGS_DIR";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Orchestrator settings.
    pub agent: AgentConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
    /// Model catalog served by `GET /models`. Built-in catalog when absent.
    pub catalog: Option<ModelCatalog>,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address the server binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// Orchestrator settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    /// Model used when a request names none.
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Time budget for a single backend call.
    #[serde(default = "default_backend_timeout")]
    pub backend_timeout_secs: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            default_model: default_model(),
            backend_timeout_secs: default_backend_timeout(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for rotated JSON logs. Console only when unset.
    #[serde(default)]
    pub logs_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            logs_dir: None,
        }
    }
}

// Default value functions for serde

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_owned()
}
fn default_model() -> String {
    "mixtral-8x7b".to_owned()
}
fn default_backend_timeout() -> u64 {
    30
}
fn default_log_level() -> String {
    "info".to_owned()
}

impl Config {
    /// Load configuration from `explicit` or the default location, then apply
    /// environment overrides and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file is missing, a file cannot
    /// be parsed, or the result fails [`Config::validate`].
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with(explicit, |key| std::env::var(key).ok())
    }

    /// [`Config::load`] with a custom env resolver (for testing).
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_with(
        explicit: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let mut config = match explicit {
            Some(path) => load_config(path)?,
            None => {
                let path = match env(CONFIG_PATH_ENV) {
                    Some(p) => PathBuf::from(p),
                    None => config_dir()?.join("config.toml"),
                };
                if path.exists() {
                    load_config(&path)?
                } else {
                    tracing::debug!(path = %path.display(), "no config file found, using defaults");
                    Self::default()
                }
            }
        };
        config.apply_overrides(env);
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides (env > config > defaults).
    ///
    /// Invalid numeric values are ignored with a warning.
    pub fn apply_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(v) = env(BIND_ADDR_ENV) {
            self.server.bind_addr = v;
        }
        if let Some(v) = env(DEFAULT_MODEL_ENV) {
            self.agent.default_model = v;
        }
        if let Some(v) = env(BACKEND_TIMEOUT_ENV) {
            match v.parse() {
                Ok(n) => self.agent.backend_timeout_secs = n,
                Err(_) => tracing::warn!(
                    var = BACKEND_TIMEOUT_ENV,
                    value = %v,
                    "ignoring invalid env override"
                ),
            }
        }
        if let Some(v) = env(LOGS_DIR_ENV) {
            self.logging.logs_dir = Some(PathBuf::from(v));
        }
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero backend timeout, a blank default model, an
    /// unparseable bind address, or a catalog category naming an unknown model.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.agent.backend_timeout_secs == 0 {
            anyhow::bail!("agent.backend_timeout_secs must be greater than zero");
        }
        if self.agent.default_model.trim().is_empty() {
            anyhow::bail!("agent.default_model must not be empty");
        }
        self.bind_addr()?;
        if let Some(catalog) = &self.catalog {
            if let Some((category, id)) = catalog.dangling_references().into_iter().next() {
                anyhow::bail!("catalog category {category:?} names unknown model {id:?}");
            }
        }
        Ok(())
    }

    /// Parsed server bind address.
    ///
    /// # Errors
    ///
    /// Returns an error if `server.bind_addr` is not a socket address.
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        self.server
            .bind_addr
            .parse()
            .with_context(|| format!("invalid server.bind_addr {:?}", self.server.bind_addr))
    }

    /// Configured model catalog, or the built-in one.
    pub fn catalog(&self) -> ModelCatalog {
        self.catalog.clone().unwrap_or_default()
    }
}

/// Load configuration from a TOML file without overrides or validation.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read config at {}: {e}", path.display()))?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("failed to parse config at {}: {e}", path.display()))?;
    Ok(config)
}

/// Resolve the default config directory (`~/.autoagent/`).
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> anyhow::Result<PathBuf> {
    let home = directories::BaseDirs::new()
        .ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
    Ok(home.home_dir().join(".autoagent"))
}
