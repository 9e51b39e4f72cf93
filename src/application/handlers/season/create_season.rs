//! CreateSeasonHandler - Command handler for opening a new season.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::club::ClubError;
use crate::domain::foundation::{require_capability, AuthenticatedUser, Capability, SeasonId};
use crate::domain::season::Season;
use crate::ports::{ClubRepository, SeasonRepository};

use super::super::club_scope::load_club;

/// Command to create a season.
#[derive(Debug, Clone)]
pub struct CreateSeasonCommand {
    pub web_name: String,
    pub user: AuthenticatedUser,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Make the new season the club's only active one.
    pub activate: bool,
}

pub struct CreateSeasonHandler {
    clubs: Arc<dyn ClubRepository>,
    seasons: Arc<dyn SeasonRepository>,
}

impl CreateSeasonHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>, seasons: Arc<dyn SeasonRepository>) -> Self {
        Self { clubs, seasons }
    }

    pub async fn handle(&self, cmd: CreateSeasonCommand) -> Result<Season, ClubError> {
        // 1. Resolve club and check role
        let club = load_club(self.clubs.as_ref(), &cmd.web_name).await?;
        require_capability(&cmd.user, club.id(), Capability::ManageSeasons)?;

        // 2. Build, then persist; activation replaces the club's active season
        let mut season = Season::new(SeasonId::new(), *club.id(), cmd.start_date, cmd.end_date)?;
        if cmd.activate {
            season.activate();
            self.seasons.save_active(&season).await?;
        } else {
            self.seasons.save(&season).await?;
        }

        tracing::info!(
            club = %club.web_name(),
            season_id = %season.id(),
            active = season.is_active(),
            "season created"
        );
        Ok(season)
    }
}
