//! Season repository port.
//!
//! Implementations must keep at most one active season per club. `activate`
//! and `save_active` are the only ways a season becomes active.

use crate::domain::foundation::{ClubId, DomainError, SeasonId};
use crate::domain::season::Season;
use async_trait::async_trait;

/// Repository port for Season persistence.
#[async_trait]
pub trait SeasonRepository: Send + Sync {
    /// Save a new season.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, season: &Season) -> Result<(), DomainError>;

    /// Inserts an active season and deactivates every other season of its
    /// club in one transaction.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure (nothing changes)
    async fn save_active(&self, season: &Season) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &SeasonId) -> Result<Option<Season>, DomainError>;

    /// The club's active season.
    ///
    /// If more than one row is flagged active, the latest `start_date` wins.
    async fn find_active(&self, club_id: &ClubId) -> Result<Option<Season>, DomainError>;

    /// All seasons of a club, newest start date first.
    async fn list_by_club(&self, club_id: &ClubId) -> Result<Vec<Season>, DomainError>;

    /// Atomically deactivates every season of the club and activates `season_id`.
    ///
    /// # Errors
    ///
    /// - `SeasonNotFound` if the season does not exist in this club
    /// - `DatabaseError` on persistence failure (nothing changes)
    async fn activate(&self, club_id: &ClubId, season_id: &SeasonId) -> Result<(), DomainError>;
}
