//! HTTP DTOs for registration endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::athletes::AthleteResponse;
use crate::adapters::http::form::parse_date;
use crate::adapters::http::seasons::SeasonResponse;
use crate::application::handlers::{
    RegisterNewAthleteResult, RegistrationOptions, UpdateRegistrationStatusResult,
};
use crate::domain::athlete::AthleteProfile;
use crate::domain::foundation::{ClassId, FieldErrors, SeasonId, Timestamp, INVALID_CHOICE, REQUIRED};
use crate::domain::registration::{Registration, RegistrationStatus};
use crate::domain::schedule::ClassSummary;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// New-athlete registration form.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAthleteRegistrationRequest {
    #[serde(default)]
    pub season_id: String,
    #[serde(default)]
    pub class_id: Option<String>,
    /// Card code, optional.
    #[serde(default)]
    pub athlete_id: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    /// `YYYY-MM-DD`.
    pub dob: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub parent_name: Option<String>,
    #[serde(default)]
    pub parent_phone: Option<String>,
    #[serde(default)]
    pub home_address: Option<String>,
}

/// Parsed form: season, optional class and the athlete profile.
#[derive(Debug, Clone)]
pub struct NewAthleteForm {
    pub season_id: SeasonId,
    pub class_id: Option<ClassId>,
    pub profile: AthleteProfile,
}

impl NewAthleteRegistrationRequest {
    pub fn into_form(self) -> Result<NewAthleteForm, FieldErrors> {
        let mut errors = FieldErrors::new();

        let season_id = match self.season_id.trim() {
            "" => {
                errors.add("season", REQUIRED);
                None
            }
            raw => match raw.parse::<SeasonId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.add("season", INVALID_CHOICE);
                    None
                }
            },
        };

        let class_id = match parse_class_id(self.class_id.as_deref()) {
            Ok(id) => id,
            Err(e) => {
                errors.merge(e);
                None
            }
        };

        let dob = parse_date(&mut errors, "dob", self.dob.as_deref());

        let profile = AthleteProfile {
            athlete_code: self.athlete_id,
            first_name: self.first_name,
            last_name: self.last_name,
            dob,
            email: self.email,
            phone: self.phone,
            parent_name: self.parent_name,
            parent_phone: self.parent_phone,
            home_address: self.home_address,
        };
        // A malformed dob already carries its own message.
        errors.merge_unreported(profile.field_errors());

        match season_id {
            Some(season_id) if errors.is_empty() => Ok(NewAthleteForm {
                season_id,
                class_id,
                profile,
            }),
            _ => Err(errors),
        }
    }
}

/// Existing-athlete registration form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExistingAthleteRegistrationRequest {
    #[serde(default)]
    pub class_id: Option<String>,
}

impl ExistingAthleteRegistrationRequest {
    pub fn class_id(&self) -> Result<Option<ClassId>, FieldErrors> {
        parse_class_id(self.class_id.as_deref())
    }
}

/// Blank means "no class chosen"; anything unparseable is an invalid choice.
fn parse_class_id(raw: Option<&str>) -> Result<Option<ClassId>, FieldErrors> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse::<ClassId>().map(Some).map_err(|_| {
            let mut errors = FieldErrors::new();
            errors.add("class", INVALID_CHOICE);
            errors
        }),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusChangeRequest {
    pub status: RegistrationStatus,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct RegistrationResponse {
    pub id: String,
    pub athlete_id: String,
    pub class_id: String,
    pub status: RegistrationStatus,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

impl From<&Registration> for RegistrationResponse {
    fn from(registration: &Registration) -> Self {
        Self {
            id: registration.id().to_string(),
            athlete_id: registration.athlete_id().to_string(),
            class_id: registration.class_id().to_string(),
            status: registration.status(),
            description: registration.description().map(str::to_string),
            created_at: *registration.created_at(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewRegistrationResponse {
    pub athlete: AthleteResponse,
    pub registration: RegistrationResponse,
}

impl From<&RegisterNewAthleteResult> for NewRegistrationResponse {
    fn from(result: &RegisterNewAthleteResult) -> Self {
        Self {
            athlete: AthleteResponse::from(&result.athlete),
            registration: RegistrationResponse::from(&result.registration),
        }
    }
}

/// Athlete plus the active season's classes to pick from.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationOptionsResponse {
    pub athlete: AthleteResponse,
    pub season: Option<SeasonResponse>,
    pub classes: Vec<ClassSummary>,
}

impl From<&RegistrationOptions> for RegistrationOptionsResponse {
    fn from(options: &RegistrationOptions) -> Self {
        Self {
            athlete: AthleteResponse::from(&options.athlete),
            season: options.season.as_ref().map(SeasonResponse::from),
            classes: options.classes.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusChangeResponse {
    pub registration: RegistrationResponse,
    pub previous: RegistrationStatus,
}

impl From<&UpdateRegistrationStatusResult> for StatusChangeResponse {
    fn from(result: &UpdateRegistrationStatusResult) -> Self {
        Self {
            registration: RegistrationResponse::from(&result.registration),
            previous: result.previous,
        }
    }
}
