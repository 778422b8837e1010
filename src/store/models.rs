//! Domain models for the repository collection.
//!
//! These models are storage-agnostic and represent the core entity
//! used throughout the application.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// UUID string used as the record identifier.
pub type Id = String;

/// A showcased repository and its like counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: Id,
    pub title: String,
    pub url: String,
    pub techs: Vec<String>,
    pub likes: u64,
}

impl Repository {
    /// Build a new record with a generated id and zero likes.
    pub fn new(title: String, url: String, techs: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            url,
            techs,
            likes: 0,
        }
    }
}
