//! HTTP handlers for registration endpoints.

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
    GetRegistrationOptionsQuery, RegisterExistingAthleteCommand, RegisterNewAthleteCommand,
    UpdateRegistrationStatusCommand,
};
use crate::domain::club::ClubError;
use crate::domain::foundation::{AthleteId, FieldErrors, RegistrationId};

use super::dto::{
    ExistingAthleteRegistrationRequest, NewAthleteRegistrationRequest, NewRegistrationResponse,
    RegistrationOptionsResponse, RegistrationResponse, StatusChangeRequest, StatusChangeResponse,
};

fn invalid_registration(fields: FieldErrors) -> Response {
    handle_club_error(ClubError::ValidationFailed {
        message: "Registration is invalid".to_string(),
        fields,
    })
}

/// POST /api/clubs/:web_name/registrations - Register a new athlete
pub async fn register_new_athlete(
    State(state): State<ClubAppState>,
    Path(web_name): Path<String>,
    Json(req): Json<NewAthleteRegistrationRequest>,
) -> Response {
    let form = match req.into_form() {
        Ok(form) => form,
        Err(fields) => return invalid_registration(fields),
    };

    let cmd = RegisterNewAthleteCommand {
        web_name,
        season_id: form.season_id,
        class_id: form.class_id,
        profile: form.profile,
    };

    match state.register_new_athlete_handler().handle(cmd).await {
        Ok(result) => {
            (StatusCode::CREATED, Json(NewRegistrationResponse::from(&result))).into_response()
        }
        Err(e) => handle_club_error(e),
    }
}

/// GET /api/clubs/:web_name/athletes/:id/registration-options - Classes open to an athlete
pub async fn get_registration_options(
    State(state): State<ClubAppState>,
    Path((web_name, athlete_id)): Path<(String, String)>,
) -> Response {
    let athlete_id = match parse_id::<AthleteId>(&athlete_id, "athlete") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetRegistrationOptionsQuery {
        web_name,
        athlete_id,
    };

    match state.registration_options_handler().handle(query).await {
        Ok(options) => {
            (StatusCode::OK, Json(RegistrationOptionsResponse::from(&options))).into_response()
        }
        Err(e) => handle_club_error(e),
    }
}

/// POST /api/clubs/:web_name/athletes/:id/registrations - Register an existing athlete
pub async fn register_existing_athlete(
    State(state): State<ClubAppState>,
    Path((web_name, athlete_id)): Path<(String, String)>,
    Json(req): Json<ExistingAthleteRegistrationRequest>,
) -> Response {
    let athlete_id = match parse_id::<AthleteId>(&athlete_id, "athlete") {
        Ok(id) => id,
        Err(response) => return response,
    };
    let class_id = match req.class_id() {
        Ok(id) => id,
        Err(fields) => return invalid_registration(fields),
    };

    let cmd = RegisterExistingAthleteCommand {
        web_name,
        athlete_id,
        class_id,
    };

    match state.register_existing_athlete_handler().handle(cmd).await {
        Ok(registration) => {
            (StatusCode::CREATED, Json(RegistrationResponse::from(&registration))).into_response()
        }
        Err(e) => handle_club_error(e),
    }
}

/// PATCH /api/clubs/:web_name/registrations/:id/status - Change a registration's status
pub async fn update_registration_status(
    State(state): State<ClubAppState>,
    RequireAuth(user): RequireAuth,
    Path((web_name, registration_id)): Path<(String, String)>,
    Json(req): Json<StatusChangeRequest>,
) -> Response {
    let registration_id = match parse_id::<RegistrationId>(&registration_id, "registration") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = UpdateRegistrationStatusCommand {
        web_name,
        user,
        registration_id,
        status: req.status,
    };

    match state.update_registration_status_handler().handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(StatusChangeResponse::from(&result))).into_response(),
        Err(e) => handle_club_error(e),
    }
}
