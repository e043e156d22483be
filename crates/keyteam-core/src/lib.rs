//! keyteam core - OpenPGP key identity and team membership
//!
//! This crate provides:
//! - [`Fingerprint`]: parsing and canonical rendering of OpenPGP fingerprints
//! - [`team`]: team rosters and their validation
//! - [`keyring`]: the local record of imported keys
//! - [`membership`]: matching local keys against team rosters
//! - [`config`]: configuration loading

pub mod config;
pub mod error;
pub mod fingerprint;
pub mod keyring;
pub mod membership;
pub mod team;

pub use config::{load_config, load_config_or_default, Config};
pub use error::{ConfigError, Error, FingerprintError, KeyringError, Result, RosterError};
pub use fingerprint::Fingerprint;
pub use keyring::{KeyImportRecord, KeyringFile};
pub use membership::{memberships, reconcile, TeamMembership};
pub use team::{Person, RosterDirectory, RosterSource, Team};
