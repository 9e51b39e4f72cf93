//! HTTP handlers for athlete endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_club_error, parse_id};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::ClubAppState;
use crate::application::handlers::{FindAthleteQuery, GetAthleteProfileQuery, ListAthletesQuery};
use crate::domain::foundation::AthleteId;

use super::dto::{AthleteLookupParams, AthleteProfileResponse, AthleteResponse};

/// GET /api/clubs/:web_name/athletes - Every athlete, by last name
pub async fn list_athletes(
    State(state): State<ClubAppState>,
    RequireAuth(user): RequireAuth,
    Path(web_name): Path<String>,
) -> Response {
    let query = ListAthletesQuery { web_name, user };

    match state.list_athletes_handler().handle(query).await {
        Ok(athletes) => {
            let response: Vec<AthleteResponse> = athletes.iter().map(AthleteResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_club_error(e),
    }
}

/// GET /api/clubs/:web_name/athletes/lookup?athlete_id=CODE - Find by card code
pub async fn lookup_athlete(
    State(state): State<ClubAppState>,
    Path(web_name): Path<String>,
    Query(params): Query<AthleteLookupParams>,
) -> Response {
    let query = FindAthleteQuery {
        web_name,
        athlete_code: params.athlete_id,
    };

    match state.find_athlete_handler().handle(query).await {
        Ok(athlete) => (StatusCode::OK, Json(AthleteResponse::from(&athlete))).into_response(),
        Err(e) => handle_club_error(e),
    }
}

/// GET /api/clubs/:web_name/athletes/:id - Athlete profile
pub async fn get_athlete_profile(
    State(state): State<ClubAppState>,
    RequireAuth(user): RequireAuth,
    Path((web_name, athlete_id)): Path<(String, String)>,
) -> Response {
    let athlete_id = match parse_id::<AthleteId>(&athlete_id, "athlete") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetAthleteProfileQuery {
        web_name,
        user,
        athlete_id,
    };

    match state.athlete_profile_handler().handle(query).await {
        Ok(view) => (StatusCode::OK, Json(AthleteProfileResponse::from(&view))).into_response(),
        Err(e) => handle_club_error(e),
    }
}
