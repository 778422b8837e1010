//! Repository collection handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::store::{Repository, RepositoryStore, StoreError};

use super::ErrorResponse;

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Repository response DTO
#[derive(Serialize, ToSchema)]
pub struct RepositoryResponse {
    /// Unique identifier (UUID v4)
    #[schema(example = "0a1f9e42-7c3b-4d7e-9f2a-5b6c8d0e1f23")]
    pub id: String,
    /// Free-form display title
    #[schema(example = "Desafio Node.js")]
    pub title: String,
    /// Link to the project page
    #[schema(example = "https://github.com/user/project")]
    pub url: String,
    /// Technology labels
    pub techs: Vec<String>,
    /// Number of likes received
    #[schema(example = 0)]
    pub likes: u64,
}

impl From<Repository> for RepositoryResponse {
    fn from(r: Repository) -> Self {
        Self {
            id: r.id,
            title: r.title,
            url: r.url,
            techs: r.techs,
            likes: r.likes,
        }
    }
}

/// Create repository request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRepositoryRequest {
    /// Free-form display title
    #[schema(example = "Desafio Node.js")]
    pub title: String,
    /// Link to the project page
    #[schema(example = "https://github.com/user/project")]
    pub url: String,
    /// Technology labels
    pub techs: Vec<String>,
}

/// Update repository request DTO
///
/// PUT overwrites title, url and techs wholesale; there is no partial form.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRepositoryRequest {
    /// Free-form display title
    #[schema(example = "Desafio Node.js")]
    pub title: String,
    /// Link to the project page
    #[schema(example = "https://github.com/user/project")]
    pub url: String,
    /// Technology labels
    pub techs: Vec<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// List all repositories
///
/// Returns every repository currently held, in insertion order
#[utoipa::path(
    get,
    path = "/repositories",
    tag = "repositories",
    responses(
        (status = 200, description = "Full list of repositories", body = [RepositoryResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_repositories<S: RepositoryStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<RepositoryResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let records = state.store().list().map_err(store_error)?;

    Ok(Json(
        records.into_iter().map(RepositoryResponse::from).collect(),
    ))
}

/// Create a new repository
///
/// Registers a new repository with a generated id and zero likes
#[utoipa::path(
    post,
    path = "/repositories",
    tag = "repositories",
    request_body = CreateRepositoryRequest,
    responses(
        (status = 200, description = "Repository created", body = RepositoryResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_repository<S: RepositoryStore>(
    State(state): State<AppState<S>>,
    Json(req): Json<CreateRepositoryRequest>,
) -> Result<Json<RepositoryResponse>, (StatusCode, Json<ErrorResponse>)> {
    let record = state
        .store()
        .create(req.title, req.url, req.techs)
        .map_err(store_error)?;

    Ok(Json(RepositoryResponse::from(record)))
}

/// Update a repository
///
/// Overwrites title, url and techs of the repository with the given id;
/// id and likes are untouched
#[utoipa::path(
    put,
    path = "/repositories/{id}",
    tag = "repositories",
    params(
        ("id" = String, Path, description = "Repository ID (UUID v4)")
    ),
    request_body = UpdateRepositoryRequest,
    responses(
        (status = 200, description = "Repository updated", body = RepositoryResponse),
        (status = 400, description = "Repository not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_repository<S: RepositoryStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateRepositoryRequest>,
) -> Result<Json<RepositoryResponse>, (StatusCode, Json<ErrorResponse>)> {
    let record = state
        .store()
        .replace(&id, req.title, req.url, req.techs)
        .map_err(store_error)?;

    Ok(Json(RepositoryResponse::from(record)))
}

/// Delete a repository
///
/// Removes the repository with the given id from the collection
#[utoipa::path(
    delete,
    path = "/repositories/{id}",
    tag = "repositories",
    params(
        ("id" = String, Path, description = "Repository ID (UUID v4)")
    ),
    responses(
        (status = 204, description = "Repository deleted"),
        (status = 400, description = "Repository not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_repository<S: RepositoryStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    state.store().delete(&id).map_err(store_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Like a repository
///
/// Increments the like counter of the repository with the given id by one
#[utoipa::path(
    post,
    path = "/repositories/{id}/like",
    tag = "repositories",
    params(
        ("id" = String, Path, description = "Repository ID (UUID v4)")
    ),
    responses(
        (status = 200, description = "Repository with incremented likes", body = RepositoryResponse),
        (status = 400, description = "Repository not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn like_repository<S: RepositoryStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<RepositoryResponse>, (StatusCode, Json<ErrorResponse>)> {
    let record = state.store().like(&id).map_err(store_error)?;

    Ok(Json(RepositoryResponse::from(record)))
}

// =============================================================================
// Helpers
// =============================================================================

/// Map store errors onto the wire contract.
///
/// Unknown ids surface as 400 with a fixed message; anything else is a 500.
fn store_error(err: StoreError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        StoreError::NotFound { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "data not found".to_string(),
            }),
        ),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: other.to_string(),
            }),
        ),
    }
}
