//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");

    if config.keyring.path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "keyring.path".to_string(),
            message: "path cannot be empty".to_string(),
        }
        .into());
    }

    if config.keyring.path.is_dir() {
        return Err(ConfigError::InvalidValue {
            field: "keyring.path".to_string(),
            message: format!("{} is a directory", config.keyring.path.display()),
        }
        .into());
    }

    if config.roster.teams_dir.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "roster.teams_dir".to_string(),
            message: "directory cannot be empty".to_string(),
        }
        .into());
    }

    debug!("configuration validation passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        let mut config = Config::default();
        config.keyring.path = PathBuf::from("/tmp/keyteam-test/keys.toml");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_paths_rejected() {
        let mut config = Config::default();
        config.keyring.path = PathBuf::new();
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.keyring.path = PathBuf::from("/tmp/keyteam-test/keys.toml");
        config.roster.teams_dir = PathBuf::new();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("roster.teams_dir"));
    }

    #[test]
    fn test_keyring_path_must_not_be_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut config = Config::default();
        config.keyring.path = temp.path().to_path_buf();
        assert!(validate_config(&config).is_err());
    }
}
