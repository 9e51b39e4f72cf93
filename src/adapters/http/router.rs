//! Top-level router for the club API.

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

use super::athletes::athlete_routes;
use super::classes::class_routes;
use super::middleware::{auth_middleware, AuthState};
use super::registrations::registration_routes;
use super::schedule::schedule_routes;
use super::seasons::season_routes;
use super::state::ClubAppState;

/// Club-scoped routes, relative to `/api/clubs/:web_name`.
pub fn club_routes() -> Router<ClubAppState> {
    Router::new()
        .merge(season_routes())
        .merge(class_routes())
        .merge(schedule_routes())
        .merge(registration_routes())
        .merge(athlete_routes())
}

/// Full API with authentication applied.
///
/// Every club route lives under `/api/clubs/:web_name`; `/health` is outside.
pub fn api_router(state: ClubAppState, validator: AuthState) -> Router {
    Router::new()
        .nest("/api/clubs/:web_name", club_routes())
        .layer(middleware::from_fn_with_state(validator, auth_middleware))
        .route("/health", get(health))
        .with_state(state)
}

/// Adds tracing, CORS and the request timeout.
pub fn with_server_layers(router: Router, config: &ServerConfig) -> Router {
    router
        .layer(cors_layer(&config.allowed_origins()))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[&str]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
