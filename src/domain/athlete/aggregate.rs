//! Athlete aggregate.

use crate::domain::foundation::{AthleteId, ClubId, DomainError, FieldErrors, Timestamp, REQUIRED};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maximum length for the public athlete code.
pub const MAX_ATHLETE_CODE_LENGTH: usize = 10;
/// Maximum length for first and last name.
pub const MAX_NAME_LENGTH: usize = 100;
/// Maximum length for phone numbers.
pub const MAX_PHONE_LENGTH: usize = 10;


/// Submitted athlete fields, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteProfile {
    pub athlete_code: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub dob: Option<NaiveDate>,
    pub email: String,
    pub phone: Option<String>,
    pub parent_name: Option<String>,
    pub parent_phone: Option<String>,
    pub home_address: Option<String>,
}

impl AthleteProfile {
    /// Collects every field problem without failing fast.
    pub fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if let Some(code) = non_blank(&self.athlete_code) {
            check_max(&mut errors, "athlete_id", code, MAX_ATHLETE_CODE_LENGTH);
        }

        for (field, value) in [("first_name", &self.first_name), ("last_name", &self.last_name)] {
            let value = value.trim();
            if value.is_empty() {
                errors.add(field, REQUIRED);
            } else {
                check_max(&mut errors, field, value, MAX_NAME_LENGTH);
            }
        }

        if self.dob.is_none() {
            errors.add("dob", REQUIRED);
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.add("email", REQUIRED);
        } else if !is_valid_email(email) {
            errors.add("email", "Enter a valid email address.");
        }

        for (field, value) in [("phone", &self.phone), ("parent_phone", &self.parent_phone)] {
            if let Some(phone) = non_blank(value) {
                check_max(&mut errors, field, phone, MAX_PHONE_LENGTH);
            }
        }

        errors
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        self.field_errors().into_result("Athlete is invalid")
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn check_max(errors: &mut FieldErrors, field: &str, value: &str, max: usize) {
    let len = value.chars().count();
    if len > max {
        errors.add(
            field,
            format!("Ensure this value has at most {} characters (it has {}).", max, len),
        );
    }
}

/// Loose structural email check: one `@`, non-empty local part, dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !email.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}

/// An athlete registered with one club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Athlete {
    id: AthleteId,
    club_id: ClubId,
    athlete_code: Option<String>,
    first_name: String,
    last_name: String,
    dob: NaiveDate,
    email: String,
    phone: Option<String>,
    parent_name: Option<String>,
    parent_phone: Option<String>,
    home_address: Option<String>,
    description: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Athlete {
    /// Creates an athlete from a submitted profile.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` with one entry per invalid field
    pub fn new(
        id: AthleteId,
        club_id: ClubId,
        profile: AthleteProfile,
        description: Option<String>,
    ) -> Result<Self, DomainError> {
        profile.validate()?;
        let dob = profile
            .dob
            .ok_or_else(|| DomainError::validation("dob", REQUIRED))?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            club_id,
            athlete_code: non_blank(&profile.athlete_code).map(str::to_string),
            first_name: profile.first_name.trim().to_string(),
            last_name: profile.last_name.trim().to_string(),
            dob,
            email: profile.email.trim().to_string(),
            phone: non_blank(&profile.phone).map(str::to_string),
            parent_name: non_blank(&profile.parent_name).map(str::to_string),
            parent_phone: non_blank(&profile.parent_phone).map(str::to_string),
            home_address: non_blank(&profile.home_address).map(str::to_string),
            description,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute an athlete from persistence.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: AthleteId,
        club_id: ClubId,
        athlete_code: Option<String>,
        first_name: String,
        last_name: String,
        dob: NaiveDate,
        email: String,
        phone: Option<String>,
        parent_name: Option<String>,
        parent_phone: Option<String>,
        home_address: Option<String>,
        description: Option<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            club_id,
            athlete_code,
            first_name,
            last_name,
            dob,
            email,
            phone,
            parent_name,
            parent_phone,
            home_address,
            description,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &AthleteId {
        &self.id
    }

    pub fn club_id(&self) -> &ClubId {
        &self.club_id
    }

    /// Short public code used for lookup, if one was issued.
    pub fn athlete_code(&self) -> Option<&str> {
        self.athlete_code.as_deref()
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn dob(&self) -> NaiveDate {
        self.dob
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn parent_name(&self) -> Option<&str> {
        self.parent_name.as_deref()
    }

    pub fn parent_phone(&self) -> Option<&str> {
        self.parent_phone.as_deref()
    }

    pub fn home_address(&self) -> Option<&str> {
        self.home_address.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn belongs_to(&self, club_id: &ClubId) -> bool {
        &self.club_id == club_id
    }
}
