//! Default configuration values

use std::ffi::OsString;
use std::path::PathBuf;

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "keyteam.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "keyteam.yaml";

/// Environment variable overriding the keyteam home directory
pub const HOME_ENV_VAR: &str = "KEYTEAM_HOME";

/// File name of the key-import record inside the home directory
pub const DEFAULT_KEYRING_FILE: &str = "keys.toml";

/// Directory name of the team rosters inside the home directory
pub const DEFAULT_TEAMS_DIR: &str = "teams";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".keyteam.toml",
        ".keyteam.yaml",
    ]
}

/// Base directory for keyteam state.
///
/// `$KEYTEAM_HOME` if set, otherwise `~/.keyteam`.
pub fn home_dir() -> PathBuf {
    home_dir_from(std::env::var_os(HOME_ENV_VAR))
}

/// An empty override counts as unset
fn home_dir_from(override_dir: Option<OsString>) -> PathBuf {
    if let Some(home) = override_dir.filter(|v| !v.is_empty()) {
        return PathBuf::from(home);
    }

    dirs::home_dir()
        .map(|home| home.join(".keyteam"))
        .unwrap_or_else(|| PathBuf::from(".keyteam"))
}
