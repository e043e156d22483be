//! Team membership reconciliation
//!
//! Matches the fingerprints the current user holds locally against every
//! known team roster. Each roster entry whose fingerprint is held locally
//! yields one [`TeamMembership`], in team order then person order. Nothing
//! is sorted or deduplicated: a key listed in two teams is a member of both.

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::fingerprint::Fingerprint;
use crate::keyring::KeyImportRecord;
use crate::team::{Person, RosterSource, Team};

/// A team the current user belongs to, and the roster entry that matched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMembership {
    /// The team
    pub team: Team,

    /// The roster entry whose fingerprint is held locally
    pub me: Person,
}

impl TeamMembership {
    /// Whether the matched entry administers the team
    pub fn is_admin(&self) -> bool {
        self.me.is_admin
    }
}

/// Compute the current user's memberships from the two data sources.
///
/// Local fingerprints are enumerated before teams are loaded. An error from
/// either source is returned as is.
pub fn memberships<K, R>(local_keys: &K, roster: &R) -> Result<Vec<TeamMembership>>
where
    K: KeyImportRecord + ?Sized,
    R: RosterSource + ?Sized,
{
    let fingerprints = local_keys.imported_fingerprints()?;
    let teams = roster.load_teams()?;
    Ok(reconcile(&fingerprints, &teams))
}

/// Match local fingerprints against team rosters
pub fn reconcile(local: &[Fingerprint], teams: &[Team]) -> Vec<TeamMembership> {
    let found: Vec<TeamMembership> = teams
        .iter()
        .flat_map(|team| {
            team.people
                .iter()
                .filter(move |person| local.contains(&person.fingerprint))
                .map(move |person| TeamMembership {
                    team: team.clone(),
                    me: person.clone(),
                })
        })
        .collect();

    debug!(
        local_keys = local.len(),
        teams = teams.len(),
        memberships = found.len(),
        "reconciled team memberships"
    );
    found
}
