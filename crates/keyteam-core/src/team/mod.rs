//! Teams and their rosters
//!
//! A [`Team`] is a named group of [`Person`] entries, each identified by the
//! fingerprint of their OpenPGP key. Rosters are read from disk by a
//! [`RosterSource`] and validated before they reach the rest of the crate.

mod roster;
mod types;

pub use roster::{parse_roster, validate_team, RosterDirectory, RosterSource, ROSTER_FILE_NAME};
pub use types::{Person, Team};
