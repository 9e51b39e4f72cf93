//! Class offering aggregate.
//!
//! A class belongs to exactly one season and meets on a set of weekdays
//! between a start and end time.

use crate::domain::foundation::{
    ClassId, DomainError, FieldErrors, SeasonId, TeacherId, Timestamp, WeekdaySet, REQUIRED,
};
use crate::domain::season::END_BEFORE_START_MESSAGE;
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Maximum length for a class name.
pub const MAX_CLASS_NAME_LENGTH: usize = 255;

/// Error attached to `end_time` when the time range is empty or inverted.
pub const END_TIME_BEFORE_START_MESSAGE: &str = "End time must be after start time.";

/// Largest price a `NUMERIC(10,2)` column can hold.
const MAX_PRICE_CENTS: i64 = 99_999_999_99;

/// Editable fields of a class, validated as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDetails {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub days: WeekdaySet,
    pub teacher_id: Option<TeacherId>,
    pub place: Option<String>,
    pub price: Decimal,
    pub registration_fee: Decimal,
    pub description: Option<String>,
}

impl ClassDetails {
    /// Validates every field and reports all problems together.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", REQUIRED);
        } else if name.chars().count() > MAX_CLASS_NAME_LENGTH {
            errors.add(
                "name",
                format!(
                    "Ensure this value has at most {} characters.",
                    MAX_CLASS_NAME_LENGTH
                ),
            );
        }

        if self.start_date > self.end_date {
            errors.add("end_date", END_BEFORE_START_MESSAGE);
        }
        if self.start_time >= self.end_time {
            errors.add("end_time", END_TIME_BEFORE_START_MESSAGE);
        }
        if self.days.is_empty() {
            errors.add("days_of_week", "Select at least one day.");
        }

        check_amount(&mut errors, "price", self.price);
        check_amount(&mut errors, "registration_fee", self.registration_fee);

        errors.into_result("Class is invalid")
    }
}

fn check_amount(errors: &mut FieldErrors, field: &str, amount: Decimal) {
    if amount.is_sign_negative() && !amount.is_zero() {
        errors.add(field, "Ensure this value is greater than or equal to 0.");
    }
    if amount.normalize().scale() > 2 {
        errors.add(field, "Ensure that there are no more than 2 decimal places.");
    }
    if amount > Decimal::new(MAX_PRICE_CENTS, 2) {
        errors.add(field, "Ensure that there are no more than 10 digits in total.");
    }
}

/// A class offered during one season.
///
/// # Invariants
///
/// - `start_date <= end_date`
/// - `start_time < end_time`
/// - `days` is non-empty
/// - `price` and `registration_fee` are non-negative with two decimal places
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassOffering {
    id: ClassId,
    season_id: SeasonId,
    details: ClassDetails,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl ClassOffering {
    /// Creates a class in the given season.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` with one entry per invalid field
    pub fn new(id: ClassId, season_id: SeasonId, details: ClassDetails) -> Result<Self, DomainError> {
        details.validate()?;
        let details = Self::normalize(details);

        let now = Timestamp::now();
        Ok(Self {
            id,
            season_id,
            details,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a class from persistence.
    pub fn reconstitute(
        id: ClassId,
        season_id: SeasonId,
        details: ClassDetails,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            season_id,
            details,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ClassId {
        &self.id
    }

    pub fn season_id(&self) -> &SeasonId {
        &self.season_id
    }

    pub fn details(&self) -> &ClassDetails {
        &self.details
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }

    pub fn start_date(&self) -> NaiveDate {
        self.details.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.details.end_date
    }

    pub fn start_time(&self) -> NaiveTime {
        self.details.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.details.end_time
    }

    pub fn days(&self) -> &WeekdaySet {
        &self.details.days
    }

    pub fn teacher_id(&self) -> Option<&TeacherId> {
        self.details.teacher_id.as_ref()
    }

    pub fn place(&self) -> Option<&str> {
        self.details.place.as_deref()
    }

    pub fn price(&self) -> Decimal {
        self.details.price
    }

    pub fn registration_fee(&self) -> Decimal {
        self.details.registration_fee
    }

    pub fn description(&self) -> Option<&str> {
        self.details.description.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn in_season(&self, season_id: &SeasonId) -> bool {
        &self.season_id == season_id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces the editable fields. Nothing changes when validation fails.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` with one entry per invalid field
    pub fn update(&mut self, details: ClassDetails) -> Result<(), DomainError> {
        details.validate()?;
        self.details = Self::normalize(details);
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Moves the class to another season of the same club.
    pub fn move_to_season(&mut self, season_id: SeasonId) {
        if self.season_id != season_id {
            self.season_id = season_id;
            self.updated_at = Timestamp::now();
        }
    }

    fn normalize(mut details: ClassDetails) -> ClassDetails {
        details.name = details.name.trim().to_string();
        details.place = details
            .place
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        details.price = details.price.round_dp(2);
        details.registration_fee = details.registration_fee.round_dp(2);
        details
    }
}
