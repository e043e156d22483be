//! Imported key record commands

use clap::{Args, Subcommand};
use tracing::info;

use keyteam_core::{Fingerprint, KeyImportRecord, KeyringFile};

use crate::cli::output::{fingerprint_style, header, Output};
use crate::cli::{join_words, Cli, OutputFormat};

/// Imported key record commands
#[derive(Debug, Args)]
pub struct KeyCommand {
    #[command(subcommand)]
    pub command: KeySubcommand,
}

/// Key subcommands
#[derive(Debug, Subcommand)]
pub enum KeySubcommand {
    /// List fingerprints of imported keys
    List,
    /// Record that a key has been imported
    Add(KeyFingerprintArgs),
    /// Remove a key from the record
    Remove(KeyFingerprintArgs),
}

/// A fingerprint argument
#[derive(Debug, Args)]
pub struct KeyFingerprintArgs {
    /// Fingerprint, in any accepted form (spaces and 0x prefix allowed)
    #[arg(required = true, num_args = 1..)]
    pub fingerprint: Vec<String>,
}

impl KeyFingerprintArgs {
    fn parse(&self) -> anyhow::Result<Fingerprint> {
        Ok(Fingerprint::parse(&join_words(&self.fingerprint))?)
    }
}

impl KeyCommand {
    /// Execute the key command
    pub fn execute(&self, cli: &Cli, out: &mut Output) -> anyhow::Result<()> {
        let subcommand_name = match &self.command {
            KeySubcommand::List => "list",
            KeySubcommand::Add(_) => "add",
            KeySubcommand::Remove(_) => "remove",
        };
        info!(subcommand = subcommand_name, "executing key command");

        let config = cli.load_config()?;
        let keyring = KeyringFile::new(&config.keyring.path);

        match &self.command {
            KeySubcommand::List => list(&keyring, cli, out),
            KeySubcommand::Add(args) => {
                let fingerprint = args.parse()?;
                let added = keyring.record_import(fingerprint)?;
                report_change(cli, out, fingerprint, added, "Recorded", "Already recorded")
            }
            KeySubcommand::Remove(args) => {
                let fingerprint = args.parse()?;
                let removed = keyring.forget(&fingerprint)?;
                report_change(cli, out, fingerprint, removed, "Removed", "Not recorded")
            }
        }
    }
}

fn list(keyring: &KeyringFile, cli: &Cli, out: &mut Output) -> anyhow::Result<()> {
    let fingerprints = keyring.imported_fingerprints()?;

    match cli.format {
        OutputFormat::Json => {
            let hex: Vec<String> = fingerprints.iter().map(Fingerprint::hex).collect();
            out.json(&serde_json::json!({ "keys": hex }))?;
        }
        OutputFormat::Text => {
            if fingerprints.is_empty() {
                out.info("No imported keys recorded")?;
                return Ok(());
            }
            out.line(&header(&format!("Imported keys ({})", fingerprints.len())))?;
            for fingerprint in &fingerprints {
                out.line(&format!(
                    "  {}",
                    fingerprint_style(&fingerprint.to_string())
                ))?;
            }
        }
    }

    Ok(())
}

fn report_change(
    cli: &Cli,
    out: &mut Output,
    fingerprint: Fingerprint,
    changed: bool,
    done: &str,
    unchanged: &str,
) -> anyhow::Result<()> {
    match cli.format {
        OutputFormat::Json => out.json(&serde_json::json!({
            "fingerprint": fingerprint.hex(),
            "changed": changed,
        })),
        OutputFormat::Text if changed => Ok(out.success(&format!("{} {}", done, fingerprint))?),
        OutputFormat::Text => Ok(out.warning(&format!("{} {}", unchanged, fingerprint))?),
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::commands::test_support::Workspace;

    const FPR: &str = "A999 B749 8D1A 8DC4 73E5  3C92 309F 635D AD1B 5517";

    #[test]
    fn test_list_empty() {
        let ws = Workspace::new();
        let output = ws.run(&["key", "list"]).unwrap();
        assert!(output.contains("No imported keys recorded"));
    }

    #[test]
    fn test_add_then_list() {
        let ws = Workspace::new();

        let output = ws
            .run(&["key", "add", "0xa999b7498d1a8dc473e53c92309f635dad1b5517"])
            .unwrap();
        assert!(output.contains(&format!("Recorded {}", FPR)));

        let output = ws.run(&["key", "add", FPR]).unwrap();
        assert!(output.contains("Already recorded"));

        let output = ws.run(&["key", "list"]).unwrap();
        assert!(output.contains("Imported keys (1)"));
        assert!(output.contains(FPR));

        let output = ws.run(&["--format", "json", "key", "list"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value["keys"],
            serde_json::json!(["A999B7498D1A8DC473E53C92309F635DAD1B5517"])
        );
    }

    #[test]
    fn test_remove() {
        let ws = Workspace::new();
        ws.write_keys(&[FPR]);

        let output = ws.run(&["key", "remove", FPR]).unwrap();
        assert!(output.contains("Removed"));

        let output = ws.run(&["key", "remove", FPR]).unwrap();
        assert!(output.contains("Not recorded"));
    }

    #[test]
    fn test_add_rejects_invalid_fingerprint() {
        let ws = Workspace::new();
        assert!(ws.run(&["key", "add", "XYZ"]).is_err());
        assert!(!ws.dir.path().join("keys.toml").exists());
    }
}
