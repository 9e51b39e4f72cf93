//! GetAthleteProfileHandler - Query handler for an athlete and their registrations.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::athlete::Athlete;
use crate::domain::club::ClubError;
use crate::domain::foundation::{require_capability, AthleteId, AuthenticatedUser, Capability, ClassId};
use crate::domain::registration::Registration;
use crate::ports::{AthleteRepository, ClassRepository, ClubRepository, RegistrationRepository};

use super::super::club_scope::{load_club, load_club_athlete};

#[derive(Debug, Clone)]
pub struct GetAthleteProfileQuery {
    pub web_name: String,
    pub user: AuthenticatedUser,
    pub athlete_id: AthleteId,
}

/// A registration together with the name of its class.
#[derive(Debug, Clone)]
pub struct RegistrationLine {
    pub registration: Registration,
    pub class_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AthleteProfileView {
    pub athlete: Athlete,
    /// Newest first.
    pub registrations: Vec<RegistrationLine>,
}

pub struct GetAthleteProfileHandler {
    clubs: Arc<dyn ClubRepository>,
    athletes: Arc<dyn AthleteRepository>,
    classes: Arc<dyn ClassRepository>,
    registrations: Arc<dyn RegistrationRepository>,
}

impl GetAthleteProfileHandler {
    pub fn new(
        clubs: Arc<dyn ClubRepository>,
        athletes: Arc<dyn AthleteRepository>,
        classes: Arc<dyn ClassRepository>,
        registrations: Arc<dyn RegistrationRepository>,
    ) -> Self {
        Self {
            clubs,
            athletes,
            classes,
            registrations,
        }
    }

    pub async fn handle(&self, query: GetAthleteProfileQuery) -> Result<AthleteProfileView, ClubError> {
        let club = load_club(self.clubs.as_ref(), &query.web_name).await?;
        require_capability(&query.user, club.id(), Capability::ViewAthletes)?;

        let athlete = load_club_athlete(self.athletes.as_ref(), &club, &query.athlete_id).await?;
        let registrations = self.registrations.list_by_athlete(athlete.id()).await?;

        let class_ids: Vec<ClassId> = registrations.iter().map(|r| *r.class_id()).collect();
        let class_names: HashMap<ClassId, String> = self
            .classes
            .find_by_ids(&class_ids)
            .await?
            .into_iter()
            .map(|c| (*c.id(), c.name().to_string()))
            .collect();

        let registrations = registrations
            .into_iter()
            .map(|registration| RegistrationLine {
                class_name: class_names.get(registration.class_id()).cloned(),
                registration,
            })
            .collect();

        Ok(AthleteProfileView {
            athlete,
            registrations,
        })
    }
}
