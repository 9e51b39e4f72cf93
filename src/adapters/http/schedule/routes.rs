//! HTTP routes for the weekly schedule.

use axum::{routing::get, Router};

use crate::adapters::http::state::ClubAppState;

use super::handlers::get_schedule;

/// `GET /schedule?days=mon,wed` - weekly grid (public)
pub fn schedule_routes() -> Router<ClubAppState> {
    Router::new().route("/schedule", get(get_schedule))
}
