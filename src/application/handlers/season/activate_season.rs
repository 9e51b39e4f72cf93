//! ActivateSeasonHandler - Command handler for switching the active season.

use std::sync::Arc;

use crate::domain::club::ClubError;
use crate::domain::foundation::{require_capability, AuthenticatedUser, Capability, SeasonId};
use crate::domain::season::Season;
use crate::ports::{ClubRepository, SeasonRepository};

use super::super::club_scope::load_club;

/// Command to make one season the club's active season.
#[derive(Debug, Clone)]
pub struct ActivateSeasonCommand {
    pub web_name: String,
    pub user: AuthenticatedUser,
    pub season_id: SeasonId,
}

pub struct ActivateSeasonHandler {
    clubs: Arc<dyn ClubRepository>,
    seasons: Arc<dyn SeasonRepository>,
}

impl ActivateSeasonHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>, seasons: Arc<dyn SeasonRepository>) -> Self {
        Self { clubs, seasons }
    }

    pub async fn handle(&self, cmd: ActivateSeasonCommand) -> Result<Season, ClubError> {
        let club = load_club(self.clubs.as_ref(), &cmd.web_name).await?;
        require_capability(&cmd.user, club.id(), Capability::ManageSeasons)?;

        let season_id = self
            .seasons
            .find_by_id(&cmd.season_id)
            .await?
            .filter(|s| s.belongs_to(club.id()))
            .map(|s| *s.id())
            .ok_or(ClubError::SeasonNotFound(cmd.season_id))?;

        self.seasons.activate(club.id(), &season_id).await?;
        let season = self
            .seasons
            .find_by_id(&season_id)
            .await?
            .ok_or(ClubError::SeasonNotFound(season_id))?;

        tracing::info!(club = %club.web_name(), season_id = %season.id(), "season activated");
        Ok(season)
    }
}
