//! Lookups shared by every club-scoped handler.

use crate::domain::athlete::Athlete;
use crate::domain::club::{Club, ClubError};
use crate::domain::foundation::AthleteId;
use crate::ports::{AthleteRepository, ClubRepository};

/// Resolves the club addressed by `web_name`.
pub async fn load_club(clubs: &dyn ClubRepository, web_name: &str) -> Result<Club, ClubError> {
    clubs
        .find_by_web_name(web_name)
        .await?
        .ok_or_else(|| ClubError::club_not_found(web_name))
}

/// Loads an athlete, treating athletes of other clubs as missing.
pub async fn load_club_athlete(
    athletes: &dyn AthleteRepository,
    club: &Club,
    athlete_id: &AthleteId,
) -> Result<Athlete, ClubError> {
    athletes
        .find_by_id(athlete_id)
        .await?
        .filter(|a| a.belongs_to(club.id()))
        .ok_or(ClubError::AthleteNotFound(*athlete_id))
}
