//! Store error types.
//!
//! This module provides abstracted error types for store operations.
//! It uses miette for fancy diagnostic output and thiserror for derive
//! macros. The error types are storage-backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Store operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum StoreError {
    #[error("Repository not found: '{id}'")]
    #[diagnostic(code(repoboard::store::not_found))]
    NotFound { id: String },

    #[error("Store lock poisoned during {op}")]
    #[diagnostic(code(repoboard::store::lock_poisoned))]
    LockPoisoned { op: &'static str },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
