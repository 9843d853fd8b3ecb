//! JSON file store: one pretty-printed file per block instance.

use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{validate_block_id, ConfigStore, StoreError};
use crate::platform::BlockKind;

/// Stores records as `<dir>/<kind>/<block_id>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a file store rooted at `path`. The directory is created on
    /// first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the root directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `block_id` has passed `validate_block_id`.
    fn record_path(&self, kind: BlockKind, block_id: &str) -> PathBuf {
        self.path
            .join(kind.id())
            .join(format!("{}.json", block_id))
    }
}

impl ConfigStore for FileStore {
    fn load(&self, kind: BlockKind, block_id: &str) -> Result<Option<Value>, StoreError> {
        validate_block_id(block_id)?;
        let path = self.record_path(kind, block_id);

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), "loaded block configuration");
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn save(&self, kind: BlockKind, block_id: &str, record: &Value) -> Result<(), StoreError> {
        validate_block_id(block_id)?;
        let path = self.record_path(kind, block_id);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write to a sibling file, then rename over the record
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(record)?)?;
        fs::rename(&tmp, &path)?;

        debug!(path = %path.display(), "saved block configuration");
        Ok(())
    }

    fn delete(&self, kind: BlockKind, block_id: &str) -> Result<(), StoreError> {
        validate_block_id(block_id)?;
        match fs::remove_file(self.record_path(kind, block_id)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()), // Already deleted
            Err(e) => Err(e.into()),
        }
    }
}
