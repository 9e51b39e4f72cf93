//! HTTP routes for season endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::ClubAppState;

use super::handlers::{activate_season, create_season, get_active_season, list_seasons};

/// Season routes, relative to `/api/clubs/:web_name`.
///
/// - `GET /season` - active season (public)
/// - `GET /seasons` - all seasons (manager)
/// - `POST /seasons` - create (manager)
/// - `POST /seasons/:id/activate` - activate (manager)
pub fn season_routes() -> Router<ClubAppState> {
    Router::new()
        .route("/season", get(get_active_season))
        .route("/seasons", get(list_seasons).post(create_season))
        .route("/seasons/:id/activate", post(activate_season))
}
