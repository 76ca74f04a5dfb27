//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Slotweek - weekly availability grid, driven from recorded pointer events
#[derive(Parser, Debug)]
#[command(name = "slotweek", version)]
#[command(about = "Replay availability-grid gestures and emit schedule payloads", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay events and print the per-day preview
    Preview {
        /// JSON file of pointer events
        #[arg(long)]
        events: PathBuf,

        /// Extend policy override (`sticky` or `restore`)
        #[arg(long)]
        policy: Option<String>,
    },

    /// Replay events, validate the form and print the request JSON
    Draft {
        /// JSON file of pointer events
        #[arg(long)]
        events: PathBuf,

        /// TOML file with organization, facility and validity window
        #[arg(long)]
        form: PathBuf,

        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,

        /// Also push the request through an in-memory submitter
        #[arg(long)]
        dry_run: bool,

        /// Extend policy override (`sticky` or `restore`)
        #[arg(long)]
        policy: Option<String>,
    },

    /// Configuration file management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,

    /// Print the effective configuration as TOML
    Show,

    /// Print one value by dotted key, e.g. `editor.extend_policy`
    Get {
        /// Dotted key
        key: String,
    },

    /// Write a default config file
    Init {
        /// Target file (defaults to the platform config directory)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
