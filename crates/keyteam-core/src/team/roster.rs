//! Roster loading and validation

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use super::types::Team;
use crate::error::{Result, RosterError};

/// File name of a team roster inside its team directory
pub const ROSTER_FILE_NAME: &str = "roster.toml";

/// A source of validated team rosters
pub trait RosterSource {
    /// Load every known team
    fn load_teams(&self) -> Result<Vec<Team>>;
}

/// Loads rosters from `<teams_dir>/<team>/roster.toml`
#[derive(Debug, Clone)]
pub struct RosterDirectory {
    teams_dir: PathBuf,
}

impl RosterDirectory {
    /// Create a source reading from the given directory
    pub fn new(teams_dir: impl Into<PathBuf>) -> Self {
        Self {
            teams_dir: teams_dir.into(),
        }
    }

    /// Directory holding one subdirectory per team
    pub fn teams_dir(&self) -> &Path {
        &self.teams_dir
    }

    fn roster_paths(&self) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(&self.teams_dir).map_err(|source| RosterError::Read {
            path: self.teams_dir.clone(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| RosterError::Read {
                path: self.teams_dir.clone(),
                source,
            })?;
            let roster = entry.path().join(ROSTER_FILE_NAME);
            if roster.is_file() {
                paths.push(roster);
            }
        }
        paths.sort();
        Ok(paths)
    }
}

impl RosterSource for RosterDirectory {
    #[instrument(skip_all, fields(teams_dir = %self.teams_dir.display()))]
    fn load_teams(&self) -> Result<Vec<Team>> {
        if !self.teams_dir.is_dir() {
            debug!("teams directory does not exist, no teams loaded");
            return Ok(Vec::new());
        }

        let teams = self
            .roster_paths()?
            .iter()
            .map(|path| parse_roster(path))
            .collect::<Result<Vec<_>>>()?;

        info!(count = teams.len(), "loaded team rosters");
        Ok(teams)
    }
}

/// Read, parse and validate a single roster file
pub fn parse_roster(path: &Path) -> Result<Team> {
    debug!(path = %path.display(), "parsing roster");

    let content = std::fs::read_to_string(path).map_err(|source| RosterError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let team: Team = toml::from_str(&content).map_err(|source| RosterError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_team(&team)?;
    Ok(team)
}

/// Check the invariants a roster must hold before it is trusted.
///
/// The same fingerprint may be listed for several emails.
pub fn validate_team(team: &Team) -> std::result::Result<(), RosterError> {
    let invalid = |reason: String| RosterError::Invalid {
        team: team.name.clone(),
        reason,
    };

    if team.name.trim().is_empty() {
        return Err(invalid("team name cannot be empty".to_string()));
    }

    if team.id.is_nil() {
        return Err(invalid("team uuid cannot be nil".to_string()));
    }

    let mut seen = HashSet::new();
    for person in &team.people {
        if !person.email.contains('@') {
            return Err(invalid(format!("invalid email '{}'", person.email)));
        }
        if !seen.insert(person.email.to_lowercase()) {
            return Err(invalid(format!("email '{}' listed more than once", person.email)));
        }
    }

    if team.admins().next().is_none() {
        return Err(invalid("team has no administrators".to_string()));
    }

    Ok(())
}
