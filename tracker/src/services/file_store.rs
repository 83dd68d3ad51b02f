//! File-backed key-value medium
//!
//! Each key maps to one file inside the base directory. Writes land in a
//! temporary sibling first and are renamed into place, so a crash mid-write
//! leaves the previous value intact.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use shared::process_debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::KeyValueStore;

/// Real file store implementation
#[derive(Debug, Clone)]
pub struct RealFileStore {
    /// Directory holding one file per key
    base_dir: PathBuf,
}

impl RealFileStore {
    /// Create file store rooted at ./data
    pub fn new() -> Self {
        Self {
            base_dir: PathBuf::from("./data"),
        }
    }

    /// Create with custom base directory
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the file holding `key`
    fn item_path(&self, key: &str) -> StoreResult<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(StoreError::InvalidKey { key: key.to_string() });
        }
        Ok(self.base_dir.join(format!("{key}.json")))
    }

    fn io_failure(key: &str, source: std::io::Error) -> StoreError {
        StoreError::PersistenceFailure {
            key: key.to_string(),
            source,
        }
    }
}

impl Default for RealFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for RealFileStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.item_path(key)?;

        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_failure(key, e)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.item_path(key)?;

        fs::create_dir_all(&self.base_dir).map_err(|e| Self::io_failure(key, e))?;

        let tmp_path = path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp_path).map_err(|e| Self::io_failure(key, e))?;
            file.write_all(value.as_bytes())
                .map_err(|e| Self::io_failure(key, e))?;
            file.sync_all().map_err(|e| Self::io_failure(key, e))?;
        }

        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(Self::io_failure(key, e));
        }

        process_debug!(shared::ProcessId::current(), "💾 Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}
