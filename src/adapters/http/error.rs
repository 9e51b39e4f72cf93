//! Shared error responses for the club API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::str::FromStr;

use crate::domain::club::ClubError;
use crate::domain::foundation::{ErrorCode, FieldErrors};

/// Standard error response.
///
/// Validation failures carry per-field messages in `details`:
///
/// ```json
/// { "code": "VALIDATION_FAILED", "message": "Class is invalid",
///   "details": { "end_date": ["End date must be after start date."] } }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<FieldErrors>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    pub fn with_details(mut self, details: FieldErrors) -> Self {
        self.details = Some(details);
        self
    }
}

/// HTTP status for an application error.
pub fn status_for(error: &ClubError) -> StatusCode {
    match error {
        ClubError::ClubNotFound(_)
        | ClubError::SeasonNotFound(_)
        | ClubError::ClassNotFound(_)
        | ClubError::AthleteNotFound(_)
        | ClubError::AthleteCodeNotFound(_)
        | ClubError::RegistrationNotFound(_)
        | ClubError::TeacherNotFound(_) => StatusCode::NOT_FOUND,
        ClubError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        ClubError::Forbidden(_) => StatusCode::FORBIDDEN,
        ClubError::InvalidState(_) => StatusCode::CONFLICT,
        ClubError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Converts an application error into a JSON response.
pub fn handle_club_error(error: ClubError) -> Response {
    let status = status_for(&error);
    let body = match error {
        ClubError::ValidationFailed { message, fields } => {
            ErrorResponse::new(ErrorCode::ValidationFailed, message).with_details(fields)
        }
        ClubError::Infrastructure(msg) => {
            tracing::error!("Internal error: {}", msg);
            ErrorResponse::internal("Internal server error")
        }
        other => ErrorResponse::new(other.code(), other.message()),
    };

    (status, Json(body)).into_response()
}

/// Parses a path identifier, answering 400 on malformed input.
pub fn parse_id<T: FromStr>(raw: &str, what: &str) -> Result<T, Response> {
    raw.parse::<T>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!("Invalid {} ID", what))),
        )
            .into_response()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ClassId, DomainError, SeasonId};

    #[test]
    fn not_found_errors_map_to_404() {
        let response = handle_club_error(ClubError::ClassNotFound(ClassId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = handle_club_error(ClubError::club_not_found("nowhere"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let error = ClubError::from(DomainError::validation("end_date", "bad range"));
        assert_eq!(handle_club_error(error).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn forbidden_maps_to_403() {
        let response = handle_club_error(ClubError::forbidden("nope"));
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn invalid_state_maps_to_409() {
        let response = handle_club_error(ClubError::InvalidState("already new".to_string()));
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let response = handle_club_error(ClubError::infrastructure("db down"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_body_carries_field_details() {
        let body = ErrorResponse::new(ErrorCode::ValidationFailed, "Class is invalid")
            .with_details({
                let mut fields = FieldErrors::new();
                fields.add("end_date", "End date must be after start date.");
                fields
            });

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], "VALIDATION_FAILED");
        assert_eq!(json["details"]["end_date"][0], "End date must be after start date.");
    }

    #[test]
    fn parse_id_rejects_garbage() {
        assert!(parse_id::<SeasonId>("not-a-uuid", "season").is_err());
        let id = SeasonId::new();
        assert_eq!(parse_id::<SeasonId>(&id.to_string(), "season").unwrap(), id);
    }
}
