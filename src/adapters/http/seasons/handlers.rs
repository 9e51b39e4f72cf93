//! HTTP handlers for season endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_club_error, parse_id};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::ClubAppState;
use crate::application::handlers::{
    ActivateSeasonCommand, CreateSeasonCommand, GetActiveSeasonQuery, ListSeasonsQuery,
};
use crate::domain::club::ClubError;
use crate::domain::foundation::SeasonId;

use super::dto::{ActiveSeasonResponse, CreateSeasonRequest, SeasonResponse};

/// GET /api/clubs/:web_name/season - The club's active season
pub async fn get_active_season(
    State(state): State<ClubAppState>,
    Path(web_name): Path<String>,
) -> Response {
    let query = GetActiveSeasonQuery { web_name };

    match state.get_active_season_handler().handle(query).await {
        Ok(result) => {
            let response = ActiveSeasonResponse {
                club: (&result.club).into(),
                season: result.season.as_ref().map(SeasonResponse::from),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_club_error(e),
    }
}

/// GET /api/clubs/:web_name/seasons - Every season, newest first
pub async fn list_seasons(
    State(state): State<ClubAppState>,
    RequireAuth(user): RequireAuth,
    Path(web_name): Path<String>,
) -> Response {
    let query = ListSeasonsQuery { web_name, user };

    match state.list_seasons_handler().handle(query).await {
        Ok(seasons) => {
            let response: Vec<SeasonResponse> = seasons.iter().map(SeasonResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_club_error(e),
    }
}

/// POST /api/clubs/:web_name/seasons - Create a season
pub async fn create_season(
    State(state): State<ClubAppState>,
    RequireAuth(user): RequireAuth,
    Path(web_name): Path<String>,
    Json(req): Json<CreateSeasonRequest>,
) -> Response {
    let (start_date, end_date) = match req.dates() {
        Ok(dates) => dates,
        Err(fields) => {
            return handle_club_error(ClubError::ValidationFailed {
                message: "Season is invalid".to_string(),
                fields,
            })
        }
    };

    let cmd = CreateSeasonCommand {
        web_name,
        user,
        start_date,
        end_date,
        activate: req.activate,
    };

    match state.create_season_handler().handle(cmd).await {
        Ok(season) => (StatusCode::CREATED, Json(SeasonResponse::from(&season))).into_response(),
        Err(e) => handle_club_error(e),
    }
}

/// POST /api/clubs/:web_name/seasons/:id/activate - Make a season the active one
pub async fn activate_season(
    State(state): State<ClubAppState>,
    RequireAuth(user): RequireAuth,
    Path((web_name, season_id)): Path<(String, String)>,
) -> Response {
    let season_id = match parse_id::<SeasonId>(&season_id, "season") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = ActivateSeasonCommand {
        web_name,
        user,
        season_id,
    };

    match state.activate_season_handler().handle(cmd).await {
        Ok(season) => (StatusCode::OK, Json(SeasonResponse::from(&season))).into_response(),
        Err(e) => handle_club_error(e),
    }
}
