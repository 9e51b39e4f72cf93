//! HTTP DTOs for class endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::adapters::http::form::{parse_amount, require_date, require_time, FormAmount};
use crate::adapters::http::seasons::SeasonResponse;
use crate::domain::class::{ClassDetails, ClassOffering};
use crate::domain::foundation::{FieldErrors, TeacherId, WeekdaySet, INVALID_CHOICE};
use crate::domain::presentation::PageContext;
use crate::domain::registration::RosterEntry;
use crate::domain::schedule::{format_hhmm, ClassSummary};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Class form, used for both create and edit.
///
/// Dates are `YYYY-MM-DD`, times `HH:MM` or `HH:MM:SS`, amounts a number or a
/// numeric string.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassRequest {
    /// Required on create. On edit, moves the class to another season.
    #[serde(default)]
    pub season_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    /// Day codes (`sun` .. `sat`).
    #[serde(default)]
    pub days: Vec<String>,
    #[serde(default)]
    pub teacher_id: Option<String>,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub price: Option<FormAmount>,
    #[serde(default)]
    pub registration_fee: Option<FormAmount>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ClassRequest {
    /// Converts the form into class details, collecting parse failures by field.
    pub fn into_details(self) -> Result<ClassDetails, FieldErrors> {
        let mut errors = FieldErrors::new();

        let start_date = require_date(&mut errors, "start_date", self.start_date.as_deref());
        let end_date = require_date(&mut errors, "end_date", self.end_date.as_deref());
        let start_time = require_time(&mut errors, "start_time", self.start_time.as_deref());
        let end_time = require_time(&mut errors, "end_time", self.end_time.as_deref());
        let price = parse_amount(&mut errors, "price", self.price.as_ref());
        let registration_fee =
            parse_amount(&mut errors, "registration_fee", self.registration_fee.as_ref());

        let days = match WeekdaySet::parse_codes(&self.days) {
            Ok(days) => days,
            Err(e) => {
                errors.push(e);
                WeekdaySet::new()
            }
        };

        let teacher_id = match self.teacher_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => match raw.parse::<TeacherId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.add("teacher", INVALID_CHOICE);
                    None
                }
            },
        };

        match (start_date, end_date, start_time, end_time) {
            (Some(start_date), Some(end_date), Some(start_time), Some(end_time))
                if errors.is_empty() =>
            {
                Ok(ClassDetails {
                    name: self.name,
                    start_date,
                    end_date,
                    start_time,
                    end_time,
                    days,
                    teacher_id,
                    place: self.place.filter(|p| !p.trim().is_empty()),
                    price,
                    registration_fee,
                    description: self.description.filter(|d| !d.trim().is_empty()),
                })
            }
            _ => Err(errors),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct ClassResponse {
    pub id: String,
    pub season_id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub days: Vec<String>,
    pub teacher_id: Option<String>,
    pub place: Option<String>,
    pub price: Decimal,
    pub registration_fee: Decimal,
    pub description: Option<String>,
}

impl From<&ClassOffering> for ClassResponse {
    fn from(class: &ClassOffering) -> Self {
        Self {
            id: class.id().to_string(),
            season_id: class.season_id().to_string(),
            name: class.name().to_string(),
            start_date: class.start_date(),
            end_date: class.end_date(),
            start_time: format_hhmm(class.start_time()),
            end_time: format_hhmm(class.end_time()),
            days: class.days().codes(),
            teacher_id: class.teacher_id().map(ToString::to_string),
            place: class.place().map(str::to_string),
            price: class.price(),
            registration_fee: class.registration_fee(),
            description: class.description().map(str::to_string),
        }
    }
}

/// Current season's classes with the page context.
#[derive(Debug, Clone, Serialize)]
pub struct ClassCatalogResponse {
    pub page: PageContext,
    pub season: Option<SeasonResponse>,
    pub classes: Vec<ClassSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassRosterResponse {
    pub class: ClassResponse,
    pub athletes: Vec<RosterEntry>,
}
