// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration Store
//!
//! Block instance configuration is persisted by the host. This module
//! defines the seam the blocks read and write through, plus an in-memory
//! store and a JSON file store.

mod error;
mod file;

pub use error::StoreError;
pub use file::FileStore;

use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::platform::BlockKind;

/// Persistence for block configuration records.
///
/// A record is keyed by block kind and block instance id. Reads before
/// the first write return None.
pub trait ConfigStore: Send + Sync {
    /// Loads a record.
    fn load(&self, kind: BlockKind, block_id: &str) -> Result<Option<Value>, StoreError>;

    /// Saves a record, replacing any previous one.
    fn save(&self, kind: BlockKind, block_id: &str, record: &Value) -> Result<(), StoreError>;

    /// Deletes a record. Deleting a missing record is not an error.
    fn delete(&self, kind: BlockKind, block_id: &str) -> Result<(), StoreError>;

    /// Checks if a record exists.
    fn exists(&self, kind: BlockKind, block_id: &str) -> Result<bool, StoreError> {
        Ok(self.load(kind, block_id)?.is_some())
    }
}

/// Block ids are non-empty and limited to ASCII alphanumerics, `_` and `-`,
/// so every store can use them verbatim as keys or file names.
pub(crate) fn validate_block_id(block_id: &str) -> Result<(), StoreError> {
    let valid = !block_id.is_empty()
        && block_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid {
        return Err(StoreError::InvalidBlockId(block_id.to_string()));
    }
    Ok(())
}

/// Volatile store, mostly for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<(BlockKind, String), Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryStore {
    fn load(&self, kind: BlockKind, block_id: &str) -> Result<Option<Value>, StoreError> {
        validate_block_id(block_id)?;
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        Ok(records.get(&(kind, block_id.to_string())).cloned())
    }

    fn save(&self, kind: BlockKind, block_id: &str, record: &Value) -> Result<(), StoreError> {
        validate_block_id(block_id)?;
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        records.insert((kind, block_id.to_string()), record.clone());
        Ok(())
    }

    fn delete(&self, kind: BlockKind, block_id: &str) -> Result<(), StoreError> {
        validate_block_id(block_id)?;
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        records.remove(&(kind, block_id.to_string()));
        Ok(())
    }
}
