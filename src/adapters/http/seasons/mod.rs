//! HTTP adapter for season endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ActiveSeasonResponse, ClubResponse, CreateSeasonRequest, SeasonResponse};
pub use handlers::{activate_season, create_season, get_active_season, list_seasons};
pub use routes::season_routes;
