//! Teacher entity.

use crate::domain::foundation::{ClubId, DomainError, FieldErrors, TeacherId, REQUIRED};
use serde::{Deserialize, Serialize};

use crate::domain::athlete::is_valid_email;

/// A coach who can be assigned to classes of one club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    id: TeacherId,
    club_id: ClubId,
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
    biography: Option<String>,
}

impl Teacher {
    /// Creates a teacher.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` listing every bad field
    pub fn new(
        id: TeacherId,
        club_id: ClubId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let email = email.into();

        let mut errors = FieldErrors::new();
        if first_name.trim().is_empty() {
            errors.add("first_name", REQUIRED);
        }
        if last_name.trim().is_empty() {
            errors.add("last_name", REQUIRED);
        }
        if !is_valid_email(&email) {
            errors.add("email", "Enter a valid email address.");
        }
        errors.into_result("Teacher is invalid")?;

        Ok(Self {
            id,
            club_id,
            first_name,
            last_name,
            email,
            phone: None,
            biography: None,
        })
    }

    /// Reconstitute a teacher from persistence.
    pub fn reconstitute(
        id: TeacherId,
        club_id: ClubId,
        first_name: String,
        last_name: String,
        email: String,
        phone: Option<String>,
        biography: Option<String>,
    ) -> Self {
        Self {
            id,
            club_id,
            first_name,
            last_name,
            email,
            phone,
            biography,
        }
    }

    pub fn id(&self) -> &TeacherId {
        &self.id
    }

    pub fn club_id(&self) -> &ClubId {
        &self.club_id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn biography(&self) -> Option<&str> {
        self.biography.as_deref()
    }

    /// "First Last", as shown on schedules.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
