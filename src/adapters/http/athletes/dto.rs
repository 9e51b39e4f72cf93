//! HTTP DTOs for athlete endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::handlers::{AthleteProfileView, RegistrationLine};
use crate::domain::athlete::Athlete;
use crate::domain::foundation::Timestamp;
use crate::domain::registration::RegistrationStatus;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AthleteLookupParams {
    /// The athlete's card code.
    #[serde(default)]
    pub athlete_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AthleteResponse {
    pub id: String,
    /// Card code, when the athlete has one.
    pub athlete_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub dob: NaiveDate,
    pub email: String,
    pub phone: Option<String>,
    pub parent_name: Option<String>,
    pub parent_phone: Option<String>,
    pub home_address: Option<String>,
    pub description: Option<String>,
}

impl From<&Athlete> for AthleteResponse {
    fn from(athlete: &Athlete) -> Self {
        Self {
            id: athlete.id().to_string(),
            athlete_id: athlete.athlete_code().map(str::to_string),
            first_name: athlete.first_name().to_string(),
            last_name: athlete.last_name().to_string(),
            full_name: athlete.full_name(),
            dob: athlete.dob(),
            email: athlete.email().to_string(),
            phone: athlete.phone().map(str::to_string),
            parent_name: athlete.parent_name().map(str::to_string),
            parent_phone: athlete.parent_phone().map(str::to_string),
            home_address: athlete.home_address().map(str::to_string),
            description: athlete.description().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegistrationLineResponse {
    pub id: String,
    pub class_id: String,
    pub class_name: Option<String>,
    pub status: RegistrationStatus,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

impl From<&RegistrationLine> for RegistrationLineResponse {
    fn from(line: &RegistrationLine) -> Self {
        let registration = &line.registration;
        Self {
            id: registration.id().to_string(),
            class_id: registration.class_id().to_string(),
            class_name: line.class_name.clone(),
            status: registration.status(),
            description: registration.description().map(str::to_string),
            created_at: *registration.created_at(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AthleteProfileResponse {
    pub athlete: AthleteResponse,
    pub registrations: Vec<RegistrationLineResponse>,
}

impl From<&AthleteProfileView> for AthleteProfileResponse {
    fn from(view: &AthleteProfileView) -> Self {
        Self {
            athlete: AthleteResponse::from(&view.athlete),
            registrations: view
                .registrations
                .iter()
                .map(RegistrationLineResponse::from)
                .collect(),
        }
    }
}
