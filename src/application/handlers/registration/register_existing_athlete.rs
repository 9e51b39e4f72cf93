//! RegisterExistingAthleteHandler - Command handler for registering a known
//! athlete in another class.

use std::sync::Arc;

use crate::domain::club::ClubError;
use crate::domain::foundation::{AthleteId, ClassId, RegistrationId, INVALID_CHOICE, REQUIRED};
use crate::domain::registration::{Registration, EXISTING_ATHLETE_DESCRIPTION};
use crate::ports::{AthleteRepository, ClassRepository, ClubRepository, RegistrationRepository, SeasonRepository};

use super::super::club_scope::{load_club, load_club_athlete};

#[derive(Debug, Clone)]
pub struct RegisterExistingAthleteCommand {
    pub web_name: String,
    pub athlete_id: AthleteId,
    pub class_id: Option<ClassId>,
}

pub struct RegisterExistingAthleteHandler {
    clubs: Arc<dyn ClubRepository>,
    seasons: Arc<dyn SeasonRepository>,
    classes: Arc<dyn ClassRepository>,
    athletes: Arc<dyn AthleteRepository>,
    registrations: Arc<dyn RegistrationRepository>,
}

impl RegisterExistingAthleteHandler {
    pub fn new(
        clubs: Arc<dyn ClubRepository>,
        seasons: Arc<dyn SeasonRepository>,
        classes: Arc<dyn ClassRepository>,
        athletes: Arc<dyn AthleteRepository>,
        registrations: Arc<dyn RegistrationRepository>,
    ) -> Self {
        Self {
            clubs,
            seasons,
            classes,
            athletes,
            registrations,
        }
    }

    pub async fn handle(&self, cmd: RegisterExistingAthleteCommand) -> Result<Registration, ClubError> {
        let club = load_club(self.clubs.as_ref(), &cmd.web_name).await?;
        let athlete = load_club_athlete(self.athletes.as_ref(), &club, &cmd.athlete_id).await?;

        let class_id = cmd.class_id.ok_or_else(|| ClubError::validation("class", REQUIRED))?;

        // Re-resolve the choice against the active season at submit time
        let class = match self.seasons.find_active(club.id()).await? {
            Some(season) => self.classes.find_in_season(season.id(), &class_id).await?,
            None => None,
        }
        .ok_or_else(|| ClubError::validation("class", INVALID_CHOICE))?;

        let registration = Registration::new(
            RegistrationId::new(),
            *athlete.id(),
            *class.id(),
            EXISTING_ATHLETE_DESCRIPTION,
        );
        self.registrations.save(&registration).await?;

        tracing::info!(
            club = %club.web_name(),
            class_id = %class.id(),
            athlete_id = %athlete.id(),
            "athlete registered"
        );
        Ok(registration)
    }
}
