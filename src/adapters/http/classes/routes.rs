//! HTTP routes for class endpoints.

use axum::{
    routing::{get, put},
    Router,
};

use crate::adapters::http::state::ClubAppState;

use super::handlers::{create_class, get_class_roster, list_classes, update_class};

/// Class routes, relative to `/api/clubs/:web_name`.
///
/// - `GET /classes` - current season catalog (public)
/// - `POST /classes` - create (manager)
/// - `PUT /classes/:id` - edit (manager)
/// - `GET /classes/:id/roster` - roster (manager, teacher)
pub fn class_routes() -> Router<ClubAppState> {
    Router::new()
        .route("/classes", get(list_classes).post(create_class))
        .route("/classes/:id", put(update_class))
        .route("/classes/:id/roster", get(get_class_roster))
}
