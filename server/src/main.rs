//! Symptom triage service CLI.
//!
//! Usage:
//!   triage serve [--config triage.toml] [--bind 0.0.0.0:3000]
//!   triage assess --symptoms "chest pain" --pain 8 --temperature 101.5
//!   triage show-config [--config triage.toml]
//!
//! Set RUST_LOG (e.g. `RUST_LOG=debug`) to override the default log level.

use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use triage_config::ServiceConfig;
use triage_contracts::{
    intake::{FormNumber, IntakeRequest},
    TriageError,
};
use triage_server::{router, AppState};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Symptom triage: keyword condition matching and urgency scoring.
#[derive(Parser)]
#[command(
    name = "triage",
    version,
    about = "Symptom triage service",
    long_about = "Runs the symptom triage HTTP API, or scores a single intake\n\
                  from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API.
    Serve {
        /// TOML configuration file. Defaults apply when omitted.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Listen address, overriding `server.bind`.
        #[arg(long)]
        bind: Option<String>,
    },
    /// Assess one set of symptoms and print the report as JSON.
    Assess {
        #[arg(long)]
        symptoms: String,
        /// Pain severity, 1-10.
        #[arg(long)]
        pain: Option<String>,
        /// Body temperature in °F.
        #[arg(long)]
        temperature: Option<String>,
        /// Heart rate in bpm.
        #[arg(long)]
        heart_rate: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        age: Option<String>,
    },
    /// Print the effective configuration as TOML.
    ShowConfig {
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Triage(#[from] TriageError),
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to render report: {0}")]
    Json(#[from] serde_json::Error),
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // The server logs requests at info; one-shot commands stay quiet.
    let default_level = match cli.command {
        Command::Serve { .. } => "info",
        _ => "warn",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .compact()
        .init();

    let result = match cli.command {
        Command::Serve { config, bind } => serve(config, bind).await,
        Command::Assess {
            symptoms,
            pain,
            temperature,
            heart_rate,
            name,
            age,
        } => assess(IntakeRequest {
            patient_name: name,
            age: age.map(FormNumber::Text),
            primary_symptoms: Some(symptoms),
            pain_severity: pain.map(FormNumber::Text),
            temperature: temperature.map(FormNumber::Text),
            heart_rate: heart_rate.map(FormNumber::Text),
        }),
        Command::ShowConfig { config } => show_config(config),
    };

    if let Err(e) = result {
        eprintln!("triage error: {}", e);
        std::process::exit(1);
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

async fn serve(config_path: Option<PathBuf>, bind: Option<String>) -> Result<(), CliError> {
    let mut config = ServiceConfig::load(config_path.as_deref())?;
    if let Some(bind) = bind {
        config.server.bind = bind;
    }
    config.validate()?;

    let addr = config.bind_addr()?;
    let app = router(AppState::from_config(&config)?);

    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "triage API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("triage API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}

fn assess(request: IntakeRequest) -> Result<(), CliError> {
    let report = triage_core::assess(&request, Utc::now())?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn show_config(config_path: Option<PathBuf>) -> Result<(), CliError> {
    let config = ServiceConfig::load(config_path.as_deref())?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}
