//! Store trait for data access abstraction.
//!
//! This trait defines the contract for the repository collection, allowing
//! different storage backends to be swapped without changing the HTTP layer.

use crate::store::{StoreResult, models::Repository};

/// Authoritative collection of repository records.
///
/// Every `id`-addressed operation checks existence and mutates within a
/// single call, so the check and the act cannot interleave with another
/// writer for the same request.
pub trait RepositoryStore: Send + Sync {
    /// Get all records in insertion order.
    fn list(&self) -> StoreResult<Vec<Repository>>;

    /// Create a new record with a fresh id and zero likes, appended last.
    fn create(&self, title: String, url: String, techs: Vec<String>) -> StoreResult<Repository>;

    /// Get a record by ID.
    fn get(&self, id: &str) -> StoreResult<Repository>;

    /// Overwrite title, url and techs of an existing record.
    ///
    /// `id` and `likes` are left untouched.
    fn replace(
        &self,
        id: &str,
        title: String,
        url: String,
        techs: Vec<String>,
    ) -> StoreResult<Repository>;

    /// Delete a record by ID, preserving the order of the remaining records.
    fn delete(&self, id: &str) -> StoreResult<()>;

    /// Increment the like counter of an existing record by one.
    fn like(&self, id: &str) -> StoreResult<Repository>;
}
