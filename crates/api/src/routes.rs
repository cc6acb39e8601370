//! Route configuration.

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{
    auth_routes, contact_routes, file_routes, health_routes, home_routes, person_routes,
};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Prefix under which every endpoint is mounted a second time
pub const API_PREFIX: &str = "/api";

/// One row of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub method: &'static str,
    pub path: &'static str,
    pub input: &'static str,
    pub output: &'static str,
}

/// Every endpoint served by [`create_router`], besides documentation.
pub const ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry {
        method: "GET",
        path: "/",
        input: "none",
        output: "greeting",
    },
    RouteEntry {
        method: "GET",
        path: "/health",
        input: "none",
        output: "health status",
    },
    RouteEntry {
        method: "POST",
        path: "/person/new",
        input: "body: Person",
        output: "PersonOut",
    },
    RouteEntry {
        method: "GET",
        path: "/person/detail",
        input: "query: name?, age",
        output: "{name: age}",
    },
    RouteEntry {
        method: "GET",
        path: "/person/detail/{person_id}",
        input: "path: person_id",
        output: "existence acknowledgment",
    },
    RouteEntry {
        method: "PUT",
        path: "/person/{person_id}",
        input: "path: person_id; body: {person, location}",
        output: "{person: PersonOut, location}",
    },
    RouteEntry {
        method: "POST",
        path: "/login",
        input: "form: username, password",
        output: "LoginOut",
    },
    RouteEntry {
        method: "POST",
        path: "/contact",
        input: "form: ContactForm; header: user-agent?; cookie: ads?",
        output: "user agent",
    },
    RouteEntry {
        method: "POST",
        path: "/post-image",
        input: "multipart: image",
        output: "ImageSummary",
    },
];

/// Every endpoint, relative to where it is mounted.
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(home_routes())
        .merge(health_routes())
        .merge(person_routes())
        .merge(auth_routes())
        .merge(contact_routes())
        .merge(file_routes())
}

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.upload.max_bytes;

    Router::new()
        .merge(api_routes())
        .nest(API_PREFIX, api_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
