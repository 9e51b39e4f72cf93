//! Athlete repository port.

use crate::domain::athlete::Athlete;
use crate::domain::foundation::{AthleteId, ClubId, DomainError};
use async_trait::async_trait;

/// Repository port for Athlete persistence.
///
/// New athletes from the registration form are written through
/// `RegistrationRepository::enroll_new_athlete` so the athlete and its first
/// registration land together.
#[async_trait]
pub trait AthleteRepository: Send + Sync {
    /// Save a standalone athlete.
    async fn save(&self, athlete: &Athlete) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &AthleteId) -> Result<Option<Athlete>, DomainError>;

    /// Athletes with the given ids. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[AthleteId]) -> Result<Vec<Athlete>, DomainError>;

    /// Public lookup by short athlete code, scoped to one club.
    async fn find_by_code(&self, code: &str, club_id: &ClubId) -> Result<Option<Athlete>, DomainError>;

    /// All athletes of a club, ordered by last then first name.
    async fn list_by_club(&self, club_id: &ClubId) -> Result<Vec<Athlete>, DomainError>;
}
