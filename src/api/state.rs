//! Application state for the API server.

use std::sync::Arc;

use crate::store::RepositoryStore;

/// Shared application state.
///
/// Holds the repository store behind an `Arc`, so cloned states address the
/// same collection. The store is injected via constructor rather than
/// created internally, which lets tests run against isolated instances.
pub struct AppState<S: RepositoryStore> {
    store: Arc<S>,
}

// Manual Clone impl - we only need Arc to be cloneable, not S
impl<S: RepositoryStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: RepositoryStore> AppState<S> {
    /// Create a new AppState owning the given store.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Get a reference to the repository store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
