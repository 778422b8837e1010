//! In-memory store implementation.
//!
//! The collection lives for the lifetime of the process; it starts empty
//! and is discarded at exit.

use std::sync::RwLock;

use crate::store::{Repository, RepositoryStore, StoreError, StoreResult};

/// In-memory repository store backed by `RwLock<Vec<Repository>>`.
///
/// Lookups are linear scans, which is fine at demo scale. Mutating
/// operations take the write lock once, so the existence check and the
/// mutation happen under the same guard.
pub struct MemoryStore {
    records: RwLock<Vec<Repository>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryStore for MemoryStore {
    fn list(&self) -> StoreResult<Vec<Repository>> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned { op: "read" })?;
        Ok(records.clone())
    }

    fn create(&self, title: String, url: String, techs: Vec<String>) -> StoreResult<Repository> {
        let record = Repository::new(title, url, techs);
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned { op: "write" })?;
        records.push(record.clone());
        Ok(record)
    }

    fn get(&self, id: &str) -> StoreResult<Repository> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned { op: "read" })?;
        records
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    fn replace(
        &self,
        id: &str,
        title: String,
        url: String,
        techs: Vec<String>,
    ) -> StoreResult<Repository> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned { op: "write" })?;
        let record = records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        record.title = title;
        record.url = url;
        record.techs = techs;
        Ok(record.clone())
    }

    fn delete(&self, id: &str) -> StoreResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned { op: "write" })?;
        let idx = records
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        records.remove(idx);
        Ok(())
    }

    fn like(&self, id: &str) -> StoreResult<Repository> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned { op: "write" })?;
        let record = records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        record.likes += 1;
        Ok(record.clone())
    }
}
