//! Home and health check handlers.

use axum::{response::Json, routing::get, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Greeting returned by the home endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct Greeting {
    #[serde(rename = "Hello")]
    #[schema(example = "World")]
    pub hello: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
}

/// Create home routes
pub fn home_routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}

/// Create health routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Home
///
/// This path operation gives a World message.
#[utoipa::path(
    get,
    path = "/",
    tag = "Home",
    responses((status = 200, description = "Greeting", body = Greeting))
)]
pub async fn home() -> Json<Greeting> {
    Json(Greeting {
        hello: "World".to_string(),
    })
}

/// Liveness probe. There are no backing services to check.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Home",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
