//! OpenPGP key fingerprints
//!
//! A [`Fingerprint`] is the 160-bit digest identifying an OpenPGP key. It can
//! be parsed from the forms people actually type (spaced, unspaced, `0x`
//! prefixed, any letter case) and rendered back in the canonical forms used
//! for display, URIs and configuration files.
//!
//! The default value is *unset*. Rendering an unset fingerprint is a bug in
//! the caller and panics instead of producing an all-zero identity.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FingerprintError;

/// Length of a fingerprint digest in bytes
pub const FINGERPRINT_LEN: usize = 20;

/// Pattern a fingerprint must match once spaces are removed
pub const FINGERPRINT_PATTERN: &str = "^(0x)?[0-9a-fA-F]{40}$";

/// Prefix used by [`Fingerprint::uri`]
pub const URI_PREFIX: &str = "OPENPGP4FPR:";

static FINGERPRINT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FINGERPRINT_PATTERN).expect("Invalid regex"));

/// A 20-byte OpenPGP fingerprint
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    bytes: Option<[u8; FINGERPRINT_LEN]>,
}

impl Fingerprint {
    /// Parse a fingerprint from text.
    ///
    /// Spaces anywhere in the input are ignored, an optional `0x` prefix is
    /// accepted and hex digits may be in either case.
    pub fn parse(text: &str) -> Result<Self, FingerprintError> {
        let compact: String = text.chars().filter(|c| *c != ' ').collect();

        if !FINGERPRINT_REGEX.is_match(&compact) {
            return Err(FingerprintError::InvalidFormat {
                input: text.to_string(),
                pattern: FINGERPRINT_PATTERN.to_string(),
            });
        }

        // Strips any run of leading '0' and 'x' characters, not only a
        // literal "0x". Digests whose hex starts with '0' end up here as
        // DecodeError; see DESIGN.md.
        let digits = compact.trim_start_matches(|c: char| c == '0' || c == 'x');

        let decoded = hex::decode(digits).map_err(|e| FingerprintError::DecodeError {
            input: text.to_string(),
            reason: e.to_string(),
        })?;

        let bytes: [u8; FINGERPRINT_LEN] =
            decoded
                .try_into()
                .map_err(|short: Vec<u8>| FingerprintError::DecodeError {
                    input: text.to_string(),
                    reason: format!(
                        "expected {} bytes, decoded {}",
                        FINGERPRINT_LEN,
                        short.len()
                    ),
                })?;

        Ok(Self::from_bytes(bytes))
    }

    /// Parse a fingerprint that is known to be valid, such as a literal.
    ///
    /// # Panics
    ///
    /// Panics if `text` is not a valid fingerprint.
    #[track_caller]
    pub fn must_parse(text: &str) -> Self {
        match Self::parse(text) {
            Ok(fingerprint) => fingerprint,
            Err(e) => panic!("must_parse: {e}"),
        }
    }

    /// Wrap a raw digest computed from key material
    pub const fn from_bytes(bytes: [u8; FINGERPRINT_LEN]) -> Self {
        Self { bytes: Some(bytes) }
    }

    /// Whether this fingerprint holds a value
    pub fn is_set(&self) -> bool {
        self.bytes.is_some()
    }

    /// The raw digest, or `None` when unset
    pub fn try_bytes(&self) -> Option<&[u8; FINGERPRINT_LEN]> {
        self.bytes.as_ref()
    }

    /// The raw 20-byte digest.
    ///
    /// # Panics
    ///
    /// Panics if the fingerprint is unset.
    #[track_caller]
    pub fn bytes(&self) -> [u8; FINGERPRINT_LEN] {
        *self.expect_set("bytes")
    }

    /// Uppercase hex without separators, e.g. `AB01AB01...` (40 characters).
    ///
    /// # Panics
    ///
    /// Panics if the fingerprint is unset.
    #[track_caller]
    pub fn hex(&self) -> String {
        hex::encode_upper(self.expect_set("hex"))
    }

    /// OpenPGP URI form, e.g. `OPENPGP4FPR:AB01AB01...`.
    ///
    /// # Panics
    ///
    /// Panics if the fingerprint is unset.
    #[track_caller]
    pub fn uri(&self) -> String {
        format!("{}{}", URI_PREFIX, hex::encode_upper(self.expect_set("uri")))
    }

    #[track_caller]
    fn expect_set(&self, operation: &str) -> &[u8; FINGERPRINT_LEN] {
        match &self.bytes {
            Some(bytes) => bytes,
            None => panic!("{operation}() called on an unset fingerprint"),
        }
    }
}

impl From<[u8; FINGERPRINT_LEN]> for Fingerprint {
    fn from(bytes: [u8; FINGERPRINT_LEN]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl FromStr for Fingerprint {
    type Err = FingerprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Canonical display form: ten groups of four hex digits with a double
/// space in the middle, `AB01 AB01 AB01 AB01 AB01  AB01 AB01 AB01 AB01 AB01`.
///
/// Panics if the fingerprint is unset.
impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.expect_set("to_string");
        for (i, pair) in bytes.chunks(2).enumerate() {
            match i {
                0 => {}
                5 => f.write_str("  ")?,
                _ => f.write_str(" ")?,
            }
            write!(f, "{:02X}{:02X}", pair[0], pair[1])?;
        }
        Ok(())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.bytes {
            Some(bytes) => write!(f, "Fingerprint({})", hex::encode_upper(bytes)),
            None => f.write_str("Fingerprint(unset)"),
        }
    }
}

impl Serialize for Fingerprint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.bytes {
            Some(bytes) => serializer.serialize_str(&hex::encode_upper(bytes)),
            None => Err(serde::ser::Error::custom(
                "cannot serialize an unset fingerprint",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Fingerprint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
