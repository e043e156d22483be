//! Team roster commands

use clap::{Args, Subcommand};
use console::style;
use tracing::info;

use keyteam_core::{memberships, KeyringFile, RosterDirectory, RosterSource, TeamMembership};

use crate::cli::output::{fingerprint_style, header, Output};
use crate::cli::{Cli, OutputFormat};

/// Team roster commands
#[derive(Debug, Args)]
pub struct TeamCommand {
    #[command(subcommand)]
    pub command: TeamSubcommand,
}

/// Team subcommands
#[derive(Debug, Subcommand)]
pub enum TeamSubcommand {
    /// List every known team and its people
    List,
    /// Show the teams you belong to
    Memberships,
}

impl TeamCommand {
    /// Execute the team command
    pub fn execute(&self, cli: &Cli, out: &mut Output) -> anyhow::Result<()> {
        let subcommand_name = match &self.command {
            TeamSubcommand::List => "list",
            TeamSubcommand::Memberships => "memberships",
        };
        info!(subcommand = subcommand_name, "executing team command");

        let config = cli.load_config()?;
        let roster = RosterDirectory::new(&config.roster.teams_dir);

        match &self.command {
            TeamSubcommand::List => list_teams(&roster, cli, out),
            TeamSubcommand::Memberships => {
                let keyring = KeyringFile::new(&config.keyring.path);
                let found = memberships(&keyring, &roster)?;
                show_memberships(&found, cli, out)
            }
        }
    }
}

fn list_teams(roster: &RosterDirectory, cli: &Cli, out: &mut Output) -> anyhow::Result<()> {
    let teams = roster.load_teams()?;

    match cli.format {
        OutputFormat::Json => {
            out.json(&serde_json::to_value(&teams)?)?;
        }
        OutputFormat::Text => {
            if teams.is_empty() {
                out.info(&format!(
                    "No teams found in {}",
                    roster.teams_dir().display()
                ))?;
                return Ok(());
            }

            for (i, team) in teams.iter().enumerate() {
                if i > 0 {
                    out.blank()?;
                }
                out.line(&format!(
                    "{} {}",
                    header(&team.name),
                    style(team.id).dim()
                ))?;
                for person in &team.people {
                    let admin = if person.is_admin {
                        style(" (admin)").yellow().to_string()
                    } else {
                        String::new()
                    };
                    out.line(&format!(
                        "  {:<32} {}{}",
                        person.email,
                        fingerprint_style(&person.fingerprint.to_string()),
                        admin
                    ))?;
                }
            }
        }
    }

    Ok(())
}

fn show_memberships(
    found: &[TeamMembership],
    cli: &Cli,
    out: &mut Output,
) -> anyhow::Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = found
                .iter()
                .map(|m| {
                    serde_json::json!({
                        "team": m.team.name,
                        "team_uuid": m.team.id.to_string(),
                        "email": m.me.email,
                        "fingerprint": m.me.fingerprint.hex(),
                        "is_admin": m.is_admin(),
                    })
                })
                .collect();
            out.json(&serde_json::Value::Array(rows))?;
        }
        OutputFormat::Text => {
            if found.is_empty() {
                out.warning("You are not a member of any team")?;
                return Ok(());
            }

            out.line(&header(&format!("Team memberships ({})", found.len())))?;
            for membership in found {
                let role = if membership.is_admin() { "admin" } else { "member" };
                out.line(&format!(
                    "  {:<20} {:<32} {:<6} {}",
                    membership.team.name,
                    membership.me.email,
                    role,
                    fingerprint_style(&membership.me.fingerprint.to_string())
                ))?;
            }
        }
    }

    Ok(())
}
