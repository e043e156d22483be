//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use keyteam_core::config::{load_config, load_config_or_default, Config};

use commands::{FingerprintCommand, KeyCommand, TeamCommand};
use output::Output;

/// keyteam - reconcile your OpenPGP keys against team rosters
#[derive(Debug, Parser)]
#[command(name = "keyteam")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file (default: search from the current directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse a fingerprint and show its canonical forms
    Fingerprint(FingerprintCommand),

    /// Manage the record of imported keys
    Key(KeyCommand),

    /// Team rosters and memberships
    Team(TeamCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self, out: &mut Output) -> anyhow::Result<()> {
        match &self.command {
            Commands::Fingerprint(cmd) => cmd.execute(self, out),
            Commands::Key(cmd) => cmd.execute(self, out),
            Commands::Team(cmd) => cmd.execute(self, out),
        }
    }

    /// Load the configuration selected by `--config`, or search for one
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let config = match &self.config {
            Some(path) => load_config(path)?,
            None => {
                let cwd = std::env::current_dir()?;
                load_config_or_default(&cwd)?.0
            }
        };
        debug!(
            keyring = %config.keyring.path.display(),
            teams_dir = %config.roster.teams_dir.display(),
            "using configuration"
        );
        Ok(config)
    }
}

/// Join arguments into one fingerprint string, so an unquoted spaced
/// fingerprint can be passed as several words
pub(crate) fn join_words(words: &[String]) -> String {
    words.join(" ")
}
