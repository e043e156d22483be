//! Error types for keyteam

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the crate [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for keyteam operations
#[derive(Debug, Error)]
pub enum Error {
    /// Fingerprint parsing errors
    #[error(transparent)]
    Fingerprint(#[from] FingerprintError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Team roster errors
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// Local key-import record errors
    #[error(transparent)]
    Keyring(#[from] KeyringError),
}

/// Errors produced while turning text into a fingerprint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FingerprintError {
    /// Input does not look like a 40 hex digit fingerprint
    #[error("invalid fingerprint '{input}': expected 40 hex digits matching '{pattern}'")]
    InvalidFormat { input: String, pattern: String },

    /// Input passed the pattern check but could not be decoded
    #[error("failed to decode fingerprint '{input}': {reason}")]
    DecodeError { input: String, reason: String },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Team roster errors
#[derive(Debug, Error)]
pub enum RosterError {
    /// Roster file could not be read
    #[error("Failed to read roster {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Roster file could not be parsed
    #[error("Failed to parse roster {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Roster parsed but failed validation
    #[error("Invalid team '{team}': {reason}")]
    Invalid { team: String, reason: String },
}

/// Local key-import record errors
#[derive(Debug, Error)]
pub enum KeyringError {
    /// Record file could not be read or written
    #[error("Failed to access key record {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Record file is malformed
    #[error("Failed to parse key record {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Record could not be serialized
    #[error("Failed to serialize key record: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_names_input_and_pattern() {
        let err = FingerprintError::InvalidFormat {
            input: "ABCD".to_string(),
            pattern: "^(0x)?[0-9a-fA-F]{40}$".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("ABCD"));
        assert!(message.contains("[0-9a-fA-F]{40}"));
    }

    #[test]
    fn test_transparent_wrapping() {
        let err: Error = RosterError::Invalid {
            team: "Kiffix".to_string(),
            reason: "no administrators".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Invalid team 'Kiffix': no administrators");
    }
}
