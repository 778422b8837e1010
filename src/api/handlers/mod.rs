//! HTTP request handlers.

mod repositories;
mod system;


use serde::Serialize;
use utoipa::ToSchema;

pub use repositories::*;
pub use system::*;

/// Error response DTO
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "data not found")]
    pub error: String,
}
