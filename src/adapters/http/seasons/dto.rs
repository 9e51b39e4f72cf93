//! HTTP DTOs for season endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::adapters::http::form::require_date;
use crate::domain::club::Club;
use crate::domain::foundation::FieldErrors;
use crate::domain::season::Season;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a season. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSeasonRequest {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    /// Make the new season the club's active one.
    #[serde(default)]
    pub activate: bool,
}

impl CreateSeasonRequest {
    pub fn dates(&self) -> Result<(NaiveDate, NaiveDate), FieldErrors> {
        let mut errors = FieldErrors::new();
        let start = require_date(&mut errors, "start_date", self.start_date.as_deref());
        let end = require_date(&mut errors, "end_date", self.end_date.as_deref());

        match (start, end) {
            (Some(start), Some(end)) => Ok((start, end)),
            _ => Err(errors),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct SeasonResponse {
    pub id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// `YYYY - YYYY` label shown on club pages.
    pub label: String,
    pub is_active: bool,
}

impl From<&Season> for SeasonResponse {
    fn from(season: &Season) -> Self {
        Self {
            id: season.id().to_string(),
            start_date: season.start_date(),
            end_date: season.end_date(),
            label: season.label(),
            is_active: season.is_active(),
        }
    }
}

/// Public club details.
#[derive(Debug, Clone, Serialize)]
pub struct ClubResponse {
    pub name: String,
    pub web_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
}

impl From<&Club> for ClubResponse {
    fn from(club: &Club) -> Self {
        Self {
            name: club.name().to_string(),
            web_name: club.web_name().to_string(),
            location: club.location().map(str::to_string),
            contact_email: club.contact_email().map(str::to_string),
            contact_phone: club.contact_phone().map(str::to_string),
        }
    }
}

/// A club and its active season, if any.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveSeasonResponse {
    pub club: ClubResponse,
    pub season: Option<SeasonResponse>,
}
