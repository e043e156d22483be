//! Local record of imported keys
//!
//! Tracks which fingerprints have been imported into the user's keyring.
//! The record only stores identities; key material lives in the keyring
//! itself.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument};

use crate::error::{KeyringError, Result};
use crate::fingerprint::Fingerprint;

/// A source of fingerprints the current user holds locally
pub trait KeyImportRecord {
    /// List every fingerprint currently imported, in import order
    fn imported_fingerprints(&self) -> Result<Vec<Fingerprint>>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RecordFile {
    #[serde(rename = "key", default)]
    keys: Vec<ImportedKey>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ImportedKey {
    fingerprint: Fingerprint,
}

/// Key-import record stored as a TOML file
#[derive(Debug, Clone)]
pub struct KeyringFile {
    path: PathBuf,
}

impl KeyringFile {
    /// Create a record backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record that a key was imported.
    ///
    /// Returns `false` if the fingerprint was already recorded.
    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub fn record_import(&self, fingerprint: Fingerprint) -> Result<bool> {
        let mut record = self.load()?;
        if record.keys.iter().any(|k| k.fingerprint == fingerprint) {
            debug!(?fingerprint, "key already recorded");
            return Ok(false);
        }

        record.keys.push(ImportedKey { fingerprint });
        self.save(&record)?;
        info!(?fingerprint, "recorded key import");
        Ok(true)
    }

    /// Remove a fingerprint from the record.
    ///
    /// Returns `false` if it was not recorded.
    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub fn forget(&self, fingerprint: &Fingerprint) -> Result<bool> {
        let mut record = self.load()?;
        let before = record.keys.len();
        record.keys.retain(|k| k.fingerprint != *fingerprint);
        if record.keys.len() == before {
            return Ok(false);
        }

        self.save(&record)?;
        info!(?fingerprint, "removed key from record");
        Ok(true)
    }

    fn load(&self) -> Result<RecordFile> {
        if !self.path.exists() {
            debug!("key record does not exist yet");
            return Ok(RecordFile::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| KeyringError::Io {
            path: self.path.clone(),
            source,
        })?;

        let record = toml::from_str(&content).map_err(|source| KeyringError::Parse {
            path: self.path.clone(),
            source,
        })?;
        Ok(record)
    }

    fn save(&self, record: &RecordFile) -> Result<()> {
        let content = toml::to_string_pretty(record).map_err(KeyringError::Serialize)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let io_err = |source: std::io::Error| KeyringError::Io {
            path: dir.to_path_buf(),
            source,
        };
        std::fs::create_dir_all(dir).map_err(io_err)?;

        // Rename over the record; a partial write never replaces it
        let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
        tmp.write_all(content.as_bytes()).map_err(io_err)?;
        tmp.persist(&self.path).map_err(|e| KeyringError::Io {
            path: self.path.clone(),
            source: e.error,
        })?;
        Ok(())
    }
}

impl KeyImportRecord for KeyringFile {
    fn imported_fingerprints(&self) -> Result<Vec<Fingerprint>> {
        let record = self.load()?;
        Ok(record.keys.into_iter().map(|k| k.fingerprint).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    fn fp(c: char) -> Fingerprint {
        Fingerprint::must_parse(&c.to_string().repeat(40))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let keyring = KeyringFile::new(temp.path().join("keys.toml"));
        assert!(keyring.imported_fingerprints().unwrap().is_empty());
    }

    #[test]
    fn test_record_import_preserves_order() {
        let temp = TempDir::new().unwrap();
        let keyring = KeyringFile::new(temp.path().join("nested").join("keys.toml"));

        assert!(keyring.record_import(fp('B')).unwrap());
        assert!(keyring.record_import(fp('A')).unwrap());
        assert!(!keyring.record_import(fp('B')).unwrap());

        assert_eq!(
            keyring.imported_fingerprints().unwrap(),
            vec![fp('B'), fp('A')]
        );
    }

    #[test]
    fn test_forget() {
        let temp = TempDir::new().unwrap();
        let keyring = KeyringFile::new(temp.path().join("keys.toml"));
        keyring.record_import(fp('A')).unwrap();
        keyring.record_import(fp('C')).unwrap();

        assert!(keyring.forget(&fp('A')).unwrap());
        assert!(!keyring.forget(&fp('A')).unwrap());
        assert_eq!(keyring.imported_fingerprints().unwrap(), vec![fp('C')]);
    }

    #[test]
    fn test_reads_any_fingerprint_form() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("keys.toml");
        std::fs::write(
            &path,
            "[[key]]\nfingerprint = \"aaaa aaaa aaaa aaaa aaaa  aaaa aaaa aaaa aaaa aaaa\"\n",
        )
        .unwrap();

        let keyring = KeyringFile::new(&path);
        assert_eq!(keyring.imported_fingerprints().unwrap(), vec![fp('A')]);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("keys.toml");
        std::fs::write(&path, "[[key]]\nfingerprint = \"nope\"\n").unwrap();

        let err = KeyringFile::new(&path).imported_fingerprints().unwrap_err();
        assert!(matches!(err, Error::Keyring(KeyringError::Parse { .. })));
    }

    #[test]
    fn test_save_replaces_record_without_leftovers() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("keys.toml");
        let keyring = KeyringFile::new(&path);

        keyring.record_import(fp('A')).unwrap();
        keyring.record_import(fp('B')).unwrap();
        keyring.forget(&fp('A')).unwrap();

        let names: Vec<_> = std::fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("keys.toml")]);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains(&fp('B').hex()));
        assert!(!content.contains(&fp('A').hex()));
        assert_eq!(keyring.imported_fingerprints().unwrap(), vec![fp('B')]);
    }
}
