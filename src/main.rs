//! autoagent binary: HTTP server plus one-shot CLI commands.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{info, warn};

use autoagent::agent::{Orchestrator, FAILURE_SUMMARY};
use autoagent::config::Config;
use autoagent::extractors::parse_intent;
use autoagent::logging;
use autoagent::server::{self, AppState};
use autoagent::types::{AgentRequest, Command};

/// Natural-language automation agent.
#[derive(Debug, Parser)]
#[command(name = "autoagent", version, about)]
struct Cli {
    /// Path to config.toml (default: $AUTOAGENT_CONFIG or ~/.autoagent/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Override server.bind_addr.
        #[arg(long)]
        bind: Option<String>,
    },
    /// Process one command and print the result envelope as JSON.
    Run {
        /// The natural-language command.
        message: String,
        /// Model identifier (default: agent.default_model).
        #[arg(long)]
        model: Option<String>,
    },
    /// Classify a command and print the intent as JSON.
    Classify {
        /// The natural-language command.
        message: String,
    },
    /// Print the model catalog as JSON.
    Models,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is normal.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let mut config =
        Config::load(cli.config.as_deref()).context("failed to load configuration")?;

    match cli.command {
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind_addr = bind;
                config.validate().context("invalid --bind")?;
            }
            run_server(config).await
        }
        Commands::Run { message, model } => {
            logging::init_console(&config.logging.level);
            let orchestrator = Orchestrator::from_config(&config.agent);
            let command = Command::from_request(
                AgentRequest { message, model },
                orchestrator.default_model(),
            );
            match orchestrator.process(&command).await {
                Ok(envelope) => print_json(&envelope),
                Err(failure) => anyhow::bail!("{FAILURE_SUMMARY}: {}", failure.details()),
            }
        }
        Commands::Classify { message } => print_json(&parse_intent(&message)),
        Commands::Models => print_json(&config.catalog().response()),
    }
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{text}");
    Ok(())
}

async fn run_server(config: Config) -> Result<()> {
    let level = config.logging.level.clone();
    let _guard = match &config.logging.logs_dir {
        Some(dir) => Some(logging::init_server(dir, &level)?),
        None => {
            logging::init_console(&level);
            None
        }
    };

    let addr = config.bind_addr()?;
    let catalog = config.catalog();
    info!(
        %addr,
        default_model = %config.agent.default_model,
        backend_timeout_secs = config.agent.backend_timeout_secs,
        models = catalog.models.len(),
        "autoagent starting"
    );

    let state = Arc::new(AppState {
        orchestrator: Orchestrator::from_config(&config.agent),
        catalog,
    });
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    server::serve(listener, state, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
