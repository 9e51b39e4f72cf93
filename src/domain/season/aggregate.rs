//! Season aggregate.
//!
//! A season bounds the classes a club offers. At most one season per club
//! is active at a time; persistence enforces that with a partial unique
//! index and a transactional activate.

use crate::domain::foundation::{ClubId, DomainError, SeasonId, Timestamp};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Error attached to `end_date` when a range is inverted.
pub const END_BEFORE_START_MESSAGE: &str = "End date must be after start date.";

/// One season of a club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    id: SeasonId,
    club_id: ClubId,
    start_date: NaiveDate,
    end_date: NaiveDate,
    is_active: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Season {
    /// Creates an inactive season.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` on `end_date` if `start_date > end_date`
    pub fn new(
        id: SeasonId,
        club_id: ClubId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, DomainError> {
        if start_date > end_date {
            return Err(DomainError::validation("end_date", END_BEFORE_START_MESSAGE));
        }

        let now = Timestamp::now();
        Ok(Self {
            id,
            club_id,
            start_date,
            end_date,
            is_active: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a season from persistence.
    pub fn reconstitute(
        id: SeasonId,
        club_id: ClubId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        is_active: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            club_id,
            start_date,
            end_date,
            is_active,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SeasonId {
        &self.id
    }

    pub fn club_id(&self) -> &ClubId {
        &self.club_id
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Human label, e.g. `2024 - 2025`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.start_date.year(), self.end_date.year())
    }

    pub fn belongs_to(&self, club_id: &ClubId) -> bool {
        &self.club_id == club_id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    pub fn activate(&mut self) {
        if !self.is_active {
            self.is_active = true;
            self.updated_at = Timestamp::now();
        }
    }

    pub fn deactivate(&mut self) {
        if self.is_active {
            self.is_active = false;
            self.updated_at = Timestamp::now();
        }
    }
}
