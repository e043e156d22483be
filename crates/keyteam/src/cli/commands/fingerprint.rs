//! Fingerprint command

use clap::Args;
use tracing::info;

use keyteam_core::Fingerprint;

use crate::cli::output::{fingerprint_style, header, key_value, Output};
use crate::cli::{join_words, Cli, OutputFormat};

/// Parse a fingerprint and show its canonical forms
#[derive(Debug, Args)]
pub struct FingerprintCommand {
    /// Fingerprint, in any accepted form (spaces and 0x prefix allowed)
    #[arg(required = true, num_args = 1..)]
    pub fingerprint: Vec<String>,
}

impl FingerprintCommand {
    /// Execute the fingerprint command
    pub fn execute(&self, cli: &Cli, out: &mut Output) -> anyhow::Result<()> {
        let text = join_words(&self.fingerprint);
        info!(input = %text, "executing fingerprint command");

        let fingerprint = Fingerprint::parse(&text)?;

        match cli.format {
            OutputFormat::Json => {
                out.json(&serde_json::json!({
                    "fingerprint": fingerprint.to_string(),
                    "hex": fingerprint.hex(),
                    "uri": fingerprint.uri(),
                }))?;
            }
            OutputFormat::Text => {
                out.line(&header("Fingerprint"))?;
                out.line(&key_value(
                    "Display",
                    &fingerprint_style(&fingerprint.to_string()),
                ))?;
                out.line(&key_value("Hex", &fingerprint.hex()))?;
                out.line(&key_value("URI", &fingerprint.uri()))?;
            }
        }

        Ok(())
    }
}
