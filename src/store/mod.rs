//! Store abstraction layer.
//!
//! This module provides trait-based abstractions for the repository
//! collection, allowing different storage backends to be swapped without
//! changing the HTTP layer.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entity (Repository)
//! - `repository`: Trait definition for data access
//! - `memory`: In-memory implementation backing the server

mod error;
mod memory;
mod models;
mod repository;


pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use models::*;
pub use repository::*;
