//! HTTP adapters - REST API implementations.
//!
//! [`api_router`] assembles the full application: the versioned mood API
//! behind bearer authentication plus the unauthenticated service routes.

pub mod middleware;
pub mod mood;

pub use middleware::{auth_middleware, AuthState, RequireAuth};
pub use mood::{mood_router, MoodAppState, MoodSettings};

use axum::{routing::get, Json, Router};

use mood::dto::{HealthResponse, ServiceInfoResponse};

/// Mount point used when none is configured.
pub const DEFAULT_API_PREFIX: &str = "/api/v1";

/// GET / - Service banner and version
pub async fn service_info() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        message: "Friday API",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health - Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// Build the application router.
///
/// Mounts the mood routes under `api_prefix` (e.g. `/api/v1`) with the auth
/// middleware applied, and `/` and `/health` without authentication.
///
/// `api_prefix` must start with `/` and must not be `/` itself.
pub fn api_router(state: MoodAppState, auth: AuthState, api_prefix: &str) -> Router {
    let api = mood_router()
        .with_state(state)
        .layer(axum::middleware::from_fn_with_state(auth, auth_middleware));

    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
        .nest(api_prefix, api)
}
