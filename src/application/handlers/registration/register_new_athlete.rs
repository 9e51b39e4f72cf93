//! RegisterNewAthleteHandler - Command handler for the public sign-up form.
//!
//! Creates an athlete and their first registration in one unit of work.

use std::sync::Arc;

use crate::domain::athlete::{Athlete, AthleteProfile};
use crate::domain::club::ClubError;
use crate::domain::foundation::{AthleteId, ClassId, RegistrationId, SeasonId, REQUIRED};
use crate::domain::registration::{new_athlete_description, Registration};
use crate::ports::{ClassRepository, ClubRepository, RegistrationRepository, SeasonRepository};

use super::super::club_scope::load_club;

/// Command submitted by the new-athlete registration form.
#[derive(Debug, Clone)]
pub struct RegisterNewAthleteCommand {
    pub web_name: String,
    pub season_id: SeasonId,
    /// `None` when the form was submitted without a class.
    pub class_id: Option<ClassId>,
    pub profile: AthleteProfile,
}

#[derive(Debug, Clone)]
pub struct RegisterNewAthleteResult {
    pub athlete: Athlete,
    pub registration: Registration,
}

pub struct RegisterNewAthleteHandler {
    clubs: Arc<dyn ClubRepository>,
    seasons: Arc<dyn SeasonRepository>,
    classes: Arc<dyn ClassRepository>,
    registrations: Arc<dyn RegistrationRepository>,
}

impl RegisterNewAthleteHandler {
    pub fn new(
        clubs: Arc<dyn ClubRepository>,
        seasons: Arc<dyn SeasonRepository>,
        classes: Arc<dyn ClassRepository>,
        registrations: Arc<dyn RegistrationRepository>,
    ) -> Self {
        Self {
            clubs,
            seasons,
            classes,
            registrations,
        }
    }

    pub async fn handle(&self, cmd: RegisterNewAthleteCommand) -> Result<RegisterNewAthleteResult, ClubError> {
        // 1. Club, then the season, which must be the club's active one
        let club = load_club(self.clubs.as_ref(), &cmd.web_name).await?;
        let season = self
            .seasons
            .find_active(club.id())
            .await?
            .filter(|s| s.id() == &cmd.season_id)
            .ok_or(ClubError::SeasonNotFound(cmd.season_id))?;

        // 2. The class, when given, must belong to that season
        let class = match cmd.class_id {
            Some(class_id) => Some(
                self.classes
                    .find_in_season(season.id(), &class_id)
                    .await?
                    .ok_or(ClubError::ClassNotFound(class_id))?,
            ),
            None => None,
        };

        // 3. Athlete and registration fields are validated together
        let mut fields = cmd.profile.field_errors();
        if class.is_none() {
            fields.add("class", REQUIRED);
        }
        fields.into_result("Registration is invalid")?;
        let Some(class) = class else {
            return Err(ClubError::validation("class", REQUIRED));
        };

        // 4. Build both records
        let description = new_athlete_description(club.name(), &season.label(), class.name());
        let athlete = Athlete::new(AthleteId::new(), *club.id(), cmd.profile, Some(description.clone()))?;
        let registration = Registration::new(RegistrationId::new(), *athlete.id(), *class.id(), description);

        // 5. Write both or neither
        self.registrations
            .enroll_new_athlete(&athlete, &registration)
            .await?;

        tracing::info!(
            club = %club.web_name(),
            season_id = %season.id(),
            class_id = %class.id(),
            athlete_id = %athlete.id(),
            "new athlete registered"
        );
        Ok(RegisterNewAthleteResult {
            athlete,
            registration,
        })
    }
}
