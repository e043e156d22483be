//! Exit codes for the CLI

/// Success
pub const SUCCESS: u8 = 0;

/// General error
pub const ERROR: u8 = 1;

/// Configuration error
pub const CONFIG_ERROR: u8 = 2;

/// Validation error (bad fingerprint, invalid roster)
pub const VALIDATION_ERROR: u8 = 5;

/// Map an error to the exit code reported to the shell
pub fn for_error(err: &anyhow::Error) -> u8 {
    use keyteam_core::{Error, RosterError};

    if err.downcast_ref::<keyteam_core::FingerprintError>().is_some() {
        return VALIDATION_ERROR;
    }

    match err.downcast_ref::<Error>() {
        Some(Error::Config(_)) => CONFIG_ERROR,
        Some(Error::Fingerprint(_)) | Some(Error::Roster(RosterError::Invalid { .. })) => {
            VALIDATION_ERROR
        }
        _ => ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyteam_core::{ConfigError, Fingerprint};
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_mapping() {
        let parse = Fingerprint::parse("nope").unwrap_err();
        assert_eq!(for_error(&anyhow::Error::from(parse)), VALIDATION_ERROR);

        let config: keyteam_core::Error = ConfigError::NotFound(PathBuf::from("x")).into();
        assert_eq!(for_error(&anyhow::Error::from(config)), CONFIG_ERROR);

        assert_eq!(for_error(&anyhow::anyhow!("boom")), ERROR);
    }
}
