//! HTTP handler for the weekly schedule.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::handle_club_error;
use crate::adapters::http::seasons::SeasonResponse;
use crate::adapters::http::state::ClubAppState;
use crate::application::handlers::GetWeeklyScheduleQuery;
use crate::domain::club::ClubError;

use super::dto::{ScheduleParams, ScheduleResponse};

/// GET /api/clubs/:web_name/schedule - Weekly grid of the active season
pub async fn get_schedule(
    State(state): State<ClubAppState>,
    Path(web_name): Path<String>,
    Query(params): Query<ScheduleParams>,
) -> Response {
    let days = match params.day_set() {
        Ok(days) => days,
        Err(e) => return handle_club_error(ClubError::validation(e.field().to_string(), e.to_string())),
    };

    let query = GetWeeklyScheduleQuery { web_name, days };

    match state.weekly_schedule_handler().handle(query).await {
        Ok(result) => {
            let page = state.page_context("schedule", &result.club, result.season.as_ref());
            let season = result.season.as_ref().map(SeasonResponse::from);
            let response = ScheduleResponse::new(page, season, &result.schedule);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_club_error(e),
    }
}
