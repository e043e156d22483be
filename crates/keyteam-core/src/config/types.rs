//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::defaults::{home_dir, DEFAULT_KEYRING_FILE, DEFAULT_TEAMS_DIR};

/// Main configuration for keyteam
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Local key-import record
    pub keyring: KeyringConfig,

    /// Team rosters
    pub roster: RosterConfig,
}

impl Config {
    /// Resolve relative paths against `base`.
    ///
    /// Empty paths are left empty so validation still rejects them.
    pub fn resolve_relative_to(&mut self, base: &Path) {
        resolve(&mut self.keyring.path, base);
        resolve(&mut self.roster.teams_dir, base);
    }
}

fn resolve(path: &mut PathBuf, base: &Path) {
    if !path.as_os_str().is_empty() && path.is_relative() {
        *path = base.join(&*path);
    }
}

/// Key-import record configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyringConfig {
    /// Path of the record file
    pub path: PathBuf,
}

impl Default for KeyringConfig {
    fn default() -> Self {
        Self {
            path: home_dir().join(DEFAULT_KEYRING_FILE),
        }
    }
}

/// Team roster configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Directory containing one subdirectory per team
    pub teams_dir: PathBuf,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            teams_dir: home_dir().join(DEFAULT_TEAMS_DIR),
        }
    }
}
