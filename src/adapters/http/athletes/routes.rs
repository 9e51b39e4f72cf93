//! HTTP routes for athlete endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::state::ClubAppState;

use super::handlers::{get_athlete_profile, list_athletes, lookup_athlete};

/// Athlete routes, relative to `/api/clubs/:web_name`.
///
/// - `GET /athletes` - every athlete of the club (staff)
/// - `GET /athletes/lookup?athlete_id=CODE` - find by card code (public)
/// - `GET /athletes/:id` - profile with registrations (staff)
pub fn athlete_routes() -> Router<ClubAppState> {
    Router::new()
        .route("/athletes", get(list_athletes))
        .route("/athletes/lookup", get(lookup_athlete))
        .route("/athletes/:id", get(get_athlete_profile))
}
