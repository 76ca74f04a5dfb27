//! Slotweek CLI
//!
//! Entry point for the `slotweek` binary.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use slotweek_cli::{commands, Cli, SlotweekConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SlotweekConfig::load(cli.config.as_deref())?;

    // stdout carries JSON; logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .init();

    tracing::debug!(policy = %config.editor.extend_policy, "Configuration loaded");

    let config_path = cli.config.clone();
    commands::run(cli.command, config_path.as_deref(), &config).await?;
    Ok(())
}
