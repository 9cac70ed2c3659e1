//! CCA Manager - Main entry point
//!
//! Reads one command per line from stdin and prints the result to stdout.
//! Logs go to stderr.

use anyhow::Result;
use cca_manager::{Config, JsonAddressBookStorage, LogicManager};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const WELCOME: &str = "Welcome to CCA Manager! Type `help` to see all commands.";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can pick the default filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(path = %config.data_file.display(), autosave = config.autosave, "Starting CCA Manager");

    let storage = Arc::new(JsonAddressBookStorage::new(config.data_file.clone()));
    let mut logic = LogicManager::load(storage, config.autosave).await;

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout.write_all(format!("{}\n> ", WELCOME).as_bytes()).await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            stdout.write_all(b"> ").await?;
            stdout.flush().await?;
            continue;
        }

        match logic.execute(&line).await {
            Ok(result) => {
                stdout.write_all(format!("{}\n", result.feedback).as_bytes()).await?;
                if result.exit {
                    break;
                }
            }
            Err(e) => {
                stdout.write_all(format!("{}\n", e).as_bytes()).await?;
            }
        }
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
    }

    // Stdin closed without `exit`
    logic.flush().await?;

    info!("CCA Manager shutdown complete");
    Ok(())
}
