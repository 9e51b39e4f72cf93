//! Club-level error type returned by every application handler.

use crate::domain::foundation::{
    AthleteId, ClassId, DomainError, ErrorCode, FieldErrors, RegistrationId, SeasonId, TeacherId,
};

/// Errors surfaced to callers of the club application handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClubError {
    /// No club with this web name.
    ClubNotFound(String),
    /// Season missing, belongs to another club, or is not the active one.
    SeasonNotFound(SeasonId),
    /// Class missing or outside the season it was looked up in.
    ClassNotFound(ClassId),
    /// Athlete missing from this club, by id.
    AthleteNotFound(AthleteId),
    /// No athlete with this public code in this club.
    AthleteCodeNotFound(String),
    RegistrationNotFound(RegistrationId),
    TeacherNotFound(TeacherId),
    /// Caller lacks the capability for this operation.
    Forbidden(String),
    /// Field-level validation failures.
    ValidationFailed { message: String, fields: FieldErrors },
    /// Requested state change is not allowed.
    InvalidState(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl ClubError {
    pub fn club_not_found(web_name: impl Into<String>) -> Self {
        ClubError::ClubNotFound(web_name.into())
    }
    pub fn forbidden(message: impl Into<String>) -> Self {
        ClubError::Forbidden(message.into())
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut fields = FieldErrors::new();
        fields.add(field, message.clone());
        ClubError::ValidationFailed { message, fields }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ClubError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ClubError::ClubNotFound(_) => ErrorCode::ClubNotFound,
            ClubError::SeasonNotFound(_) => ErrorCode::SeasonNotFound,
            ClubError::ClassNotFound(_) => ErrorCode::ClassNotFound,
            ClubError::AthleteNotFound(_) | ClubError::AthleteCodeNotFound(_) => {
                ErrorCode::AthleteNotFound
            }
            ClubError::RegistrationNotFound(_) => ErrorCode::RegistrationNotFound,
            ClubError::TeacherNotFound(_) => ErrorCode::TeacherNotFound,
            ClubError::Forbidden(_) => ErrorCode::Forbidden,
            ClubError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ClubError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            ClubError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ClubError::ClubNotFound(name) => format!("Club not found: {}", name),
            ClubError::SeasonNotFound(id) => format!("Season not found: {}", id),
            ClubError::ClassNotFound(id) => format!("Class not found: {}", id),
            ClubError::AthleteNotFound(id) => format!("Athlete not found: {}", id),
            ClubError::AthleteCodeNotFound(code) => {
                format!("No athlete with ID '{}' in this club", code)
            }
            ClubError::RegistrationNotFound(id) => format!("Registration not found: {}", id),
            ClubError::TeacherNotFound(id) => format!("Teacher not found: {}", id),
            ClubError::Forbidden(_) => "Permission denied".to_string(),
            ClubError::ValidationFailed { message, .. } => message.clone(),
            ClubError::InvalidState(msg) => format!("Invalid state: {}", msg),
            ClubError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code().is_not_found()
    }
}

impl std::fmt::Display for ClubError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ClubError {}

impl From<DomainError> for ClubError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => ClubError::Forbidden(err.message),
            ErrorCode::InvalidStateTransition => ClubError::InvalidState(err.message),
            code if code.is_validation() => ClubError::ValidationFailed {
                message: err.message,
                fields: err.field_errors,
            },
            _ => ClubError::Infrastructure(err.to_string()),
        }
    }
}
