//! HTTP handlers for class endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_club_error, parse_id};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::seasons::SeasonResponse;
use crate::adapters::http::state::ClubAppState;
use crate::application::handlers::{
    CreateClassCommand, GetClassRosterQuery, ListCurrentClassesQuery, UpdateClassCommand,
};
use crate::domain::class::ClassDetails;
use crate::domain::club::ClubError;
use crate::domain::foundation::{ClassId, FieldErrors, SeasonId, INVALID_CHOICE, REQUIRED};

use super::dto::{ClassCatalogResponse, ClassRequest, ClassResponse, ClassRosterResponse};

const CLASS_INVALID: &str = "Class is invalid";

/// Splits the form into an optional season and class details.
fn read_form(req: ClassRequest) -> Result<(Option<SeasonId>, ClassDetails), ClubError> {
    let mut errors = FieldErrors::new();

    let season_id = match req.season_id.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match raw.parse::<SeasonId>() {
            Ok(id) => Some(id),
            Err(_) => {
                errors.add("season", INVALID_CHOICE);
                None
            }
        },
    };

    match req.into_details() {
        Ok(details) if errors.is_empty() => Ok((season_id, details)),
        Ok(_) => Err(invalid(errors)),
        Err(more) => {
            errors.merge(more);
            Err(invalid(errors))
        }
    }
}

fn invalid(fields: FieldErrors) -> ClubError {
    ClubError::ValidationFailed {
        message: CLASS_INVALID.to_string(),
        fields,
    }
}

/// GET /api/clubs/:web_name/classes - Active season's classes
pub async fn list_classes(
    State(state): State<ClubAppState>,
    Path(web_name): Path<String>,
) -> Response {
    let query = ListCurrentClassesQuery { web_name };

    match state.list_current_classes_handler().handle(query).await {
        Ok(result) => {
            let response = ClassCatalogResponse {
                page: state.page_context("classes", &result.club, result.season.as_ref()),
                season: result.season.as_ref().map(SeasonResponse::from),
                classes: result.catalog.sorted().into_iter().cloned().collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_club_error(e),
    }
}

/// POST /api/clubs/:web_name/classes - Add a class to a season
pub async fn create_class(
    State(state): State<ClubAppState>,
    RequireAuth(user): RequireAuth,
    Path(web_name): Path<String>,
    Json(req): Json<ClassRequest>,
) -> Response {
    let (season_id, details) = match read_form(req) {
        Ok(form) => form,
        Err(e) => return handle_club_error(e),
    };
    let Some(season_id) = season_id else {
        return handle_club_error(ClubError::validation("season", REQUIRED));
    };

    let cmd = CreateClassCommand {
        web_name,
        user,
        season_id,
        details,
    };

    match state.create_class_handler().handle(cmd).await {
        Ok(class) => (StatusCode::CREATED, Json(ClassResponse::from(&class))).into_response(),
        Err(e) => handle_club_error(e),
    }
}

/// PUT /api/clubs/:web_name/classes/:id - Edit a class
pub async fn update_class(
    State(state): State<ClubAppState>,
    RequireAuth(user): RequireAuth,
    Path((web_name, class_id)): Path<(String, String)>,
    Json(req): Json<ClassRequest>,
) -> Response {
    let class_id = match parse_id::<ClassId>(&class_id, "class") {
        Ok(id) => id,
        Err(response) => return response,
    };
    let (season_id, details) = match read_form(req) {
        Ok(form) => form,
        Err(e) => return handle_club_error(e),
    };

    let cmd = UpdateClassCommand {
        web_name,
        user,
        class_id,
        season_id,
        details,
    };

    match state.update_class_handler().handle(cmd).await {
        Ok(class) => (StatusCode::OK, Json(ClassResponse::from(&class))).into_response(),
        Err(e) => handle_club_error(e),
    }
}

/// GET /api/clubs/:web_name/classes/:id/roster - Athletes registered to a class
pub async fn get_class_roster(
    State(state): State<ClubAppState>,
    RequireAuth(user): RequireAuth,
    Path((web_name, class_id)): Path<(String, String)>,
) -> Response {
    let class_id = match parse_id::<ClassId>(&class_id, "class") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetClassRosterQuery {
        web_name,
        user,
        class_id,
    };

    match state.class_roster_handler().handle(query).await {
        Ok(roster) => {
            let response = ClassRosterResponse {
                class: ClassResponse::from(&roster.class),
                athletes: roster.entries,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_club_error(e),
    }
}
