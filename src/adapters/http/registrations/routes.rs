//! HTTP routes for registration endpoints.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::adapters::http::state::ClubAppState;

use super::handlers::{
    get_registration_options, register_existing_athlete, register_new_athlete,
    update_registration_status,
};

/// Registration routes, relative to `/api/clubs/:web_name`.
///
/// - `POST /registrations` - register a new athlete (public)
/// - `GET /athletes/:id/registration-options` - classes open to an athlete (public)
/// - `POST /athletes/:id/registrations` - register an existing athlete (public)
/// - `PATCH /registrations/:id/status` - change status (manager)
pub fn registration_routes() -> Router<ClubAppState> {
    Router::new()
        .route("/registrations", post(register_new_athlete))
        .route("/registrations/:id/status", patch(update_registration_status))
        .route("/athletes/:id/registration-options", get(get_registration_options))
        .route("/athletes/:id/registrations", post(register_existing_athlete))
}
