use anyhow::{Context, Result};
use clap::Parser;
use job_mailer::cli::{handle_command, Cli};
use job_mailer::ConfigManager;
use std::fs::OpenOptions;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    // The log file location is itself configuration, so logging starts after the load.
    let config = ConfigManager::load()?;

    // Terminal output is for the user; diagnostics go to the log file.
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&config.log_path)
        .with_context(|| format!("Failed to open log file {}", config.log_path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();

    info!("Loaded configuration for environment: {}", config.environment);
    info!("Backend: {}", config.backend_url);
    info!("Storage: {}", config.storage_path.display());

    handle_command(cli, config).await
}
