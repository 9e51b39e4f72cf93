//! GetClassRosterHandler - Query handler for the athletes registered in a class.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::class::ClassOffering;
use crate::domain::club::ClubError;
use crate::domain::foundation::{require_capability, AthleteId, AuthenticatedUser, Capability, ClassId};
use crate::domain::registration::RosterEntry;
use crate::ports::{AthleteRepository, ClassRepository, ClubRepository, RegistrationRepository, SeasonRepository};

use super::super::club_scope::load_club;
use super::load_club_class;

#[derive(Debug, Clone)]
pub struct GetClassRosterQuery {
    pub web_name: String,
    pub user: AuthenticatedUser,
    pub class_id: ClassId,
}

#[derive(Debug, Clone)]
pub struct ClassRoster {
    pub class: ClassOffering,
    /// One entry per registration, newest first.
    pub entries: Vec<RosterEntry>,
}

pub struct GetClassRosterHandler {
    clubs: Arc<dyn ClubRepository>,
    seasons: Arc<dyn SeasonRepository>,
    classes: Arc<dyn ClassRepository>,
    athletes: Arc<dyn AthleteRepository>,
    registrations: Arc<dyn RegistrationRepository>,
}

impl GetClassRosterHandler {
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

    pub async fn handle(&self, query: GetClassRosterQuery) -> Result<ClassRoster, ClubError> {
        let club = load_club(self.clubs.as_ref(), &query.web_name).await?;
        require_capability(&query.user, club.id(), Capability::ViewRoster)?;

        let class = load_club_class(
            self.seasons.as_ref(),
            self.classes.as_ref(),
            &club,
            &query.class_id,
        )
        .await?;

        let registrations = self.registrations.list_by_class(class.id()).await?;
        let athlete_ids: Vec<AthleteId> = registrations.iter().map(|r| *r.athlete_id()).collect();
        let athletes: HashMap<_, _> = self
            .athletes
            .find_by_ids(&athlete_ids)
            .await?
            .into_iter()
            .map(|a| (*a.id(), a))
            .collect();

        let entries = registrations
            .iter()
            .filter_map(|r| athletes.get(r.athlete_id()).map(|a| RosterEntry::new(a, r)))
            .collect();

        Ok(ClassRoster { class, entries })
    }
}
