//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, post, put};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, CreateRepositoryRequest, ErrorResponse, HealthResponse, RepositoryResponse,
    UpdateRepositoryRequest,
};
use super::state::AppState;
use crate::store::RepositoryStore;

/// Build routes with generic store type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the RepositoryStore trait. It applies the turbofish operator
/// automatically.
macro_rules! routes {
    ($S:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$S>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Repoboard API",
        version = "0.1.0",
        description = "In-memory repository portfolio API",
        license(name = "MIT")
    ),
    paths(
        handlers::health,
        handlers::list_repositories,
        handlers::create_repository,
        handlers::update_repository,
        handlers::delete_repository,
        handlers::like_repository,
    ),
    components(
        schemas(
            HealthResponse,
            RepositoryResponse,
            CreateRepositoryRequest,
            UpdateRepositoryRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health endpoints"),
        (name = "repositories", description = "Repository collection endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
///
/// Cross-origin requests are permitted unconditionally.
pub fn create_router<S: RepositoryStore + 'static>(state: AppState<S>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new().route("/health", get(handlers::health));

    // Repository routes (generic over RepositoryStore)
    let repository_routes = routes!(S => {
        get "/repositories" => handlers::list_repositories,
        post "/repositories" => handlers::create_repository,
        put "/repositories/{id}" => handlers::update_repository,
        delete "/repositories/{id}" => handlers::delete_repository,
        post "/repositories/{id}/like" => handlers::like_repository,
    });

    system_routes
        .merge(repository_routes)
        .merge(Scalar::with_url("/docs", api))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
