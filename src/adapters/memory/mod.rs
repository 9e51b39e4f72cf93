//! In-Memory Repository Adapters
//!
//! One shared store implements every persistence port. All tables sit
//! behind a single lock, so multi-record writes (new-athlete enrollment,
//! season activation) are all-or-nothing just like their SQL counterparts.
//! Used by tests and for running the service without a database.

mod athletes;
mod classes;
mod clubs;
mod registrations;
mod seasons;

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::athlete::Athlete;
use crate::domain::class::ClassOffering;
use crate::domain::club::{Club, Teacher};
use crate::domain::foundation::{
    AthleteId, ClassId, ClubId, DomainError, ErrorCode, RegistrationId, SeasonId, TeacherId,
};
use crate::domain::registration::Registration;
use crate::domain::season::Season;

#[derive(Debug, Default)]
struct Tables {
    clubs: HashMap<ClubId, Club>,
    teachers: HashMap<TeacherId, Teacher>,
    seasons: HashMap<SeasonId, Season>,
    classes: HashMap<ClassId, ClassOffering>,
    athletes: HashMap<AthleteId, Athlete>,
    registrations: HashMap<RegistrationId, Registration>,
}

impl Tables {
    /// Mirrors the partial unique index on `seasons(club_id) WHERE is_active`.
    fn check_single_active(&self, season: &Season) -> Result<(), DomainError> {
        if !season.is_active() {
            return Ok(());
        }
        let clash = self.seasons.values().any(|other| {
            other.id() != season.id() && other.club_id() == season.club_id() && other.is_active()
        });
        if clash {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Failed to save season: club already has an active season",
            ));
        }
        Ok(())
    }

    /// Mirrors the registrations foreign keys.
    fn check_registration_refs(&self, registration: &Registration) -> Result<(), DomainError> {
        if !self.athletes.contains_key(registration.athlete_id()) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Failed to save registration: athlete does not exist",
            ));
        }
        if !self.classes.contains_key(registration.class_id()) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Failed to save registration: class does not exist",
            ));
        }
        Ok(())
    }
}

/// In-memory implementation of every club persistence port.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClubStore {
    tables: Arc<RwLock<Tables>>,
    fail_registration_writes: Arc<AtomicBool>,
}

impl InMemoryClubStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every registration write fail after earlier writes in the same
    /// unit have been applied, to exercise rollback.
    pub fn fail_registration_writes(&self, fail: bool) {
        self.fail_registration_writes.store(fail, Ordering::SeqCst);
    }

    fn registration_writes_fail(&self) -> bool {
        self.fail_registration_writes.load(Ordering::SeqCst)
    }

    /// Number of stored athletes.
    pub async fn athlete_count(&self) -> usize {
        self.tables.read().await.athletes.len()
    }

    /// Number of stored registrations.
    pub async fn registration_count(&self) -> usize {
        self.tables.read().await.registrations.len()
    }

    /// Number of stored classes.
    pub async fn class_count(&self) -> usize {
        self.tables.read().await.classes.len()
    }
}
