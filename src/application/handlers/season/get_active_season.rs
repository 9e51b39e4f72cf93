//! GetActiveSeasonHandler - Query handler for a club's active season.

use std::sync::Arc;

use crate::domain::club::{Club, ClubError};
use crate::domain::season::Season;
use crate::ports::{ClubRepository, SeasonRepository};

use super::super::club_scope::load_club;

/// Query for the season a club currently runs.
#[derive(Debug, Clone)]
pub struct GetActiveSeasonQuery {
    pub web_name: String,
}

#[derive(Debug, Clone)]
pub struct ActiveSeasonResult {
    pub club: Club,
    /// `None` when no season is active.
    pub season: Option<Season>,
}

pub struct GetActiveSeasonHandler {
    clubs: Arc<dyn ClubRepository>,
    seasons: Arc<dyn SeasonRepository>,
}

impl GetActiveSeasonHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>, seasons: Arc<dyn SeasonRepository>) -> Self {
        Self { clubs, seasons }
    }

    pub async fn handle(&self, query: GetActiveSeasonQuery) -> Result<ActiveSeasonResult, ClubError> {
        let club = load_club(self.clubs.as_ref(), &query.web_name).await?;
        let season = self.seasons.find_active(club.id()).await?;
        Ok(ActiveSeasonResult { club, season })
    }
}
