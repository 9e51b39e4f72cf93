//! GetRegistrationOptionsHandler - Query handler for the classes an existing
//! athlete may register for.

use std::sync::Arc;

use crate::domain::athlete::Athlete;
use crate::domain::club::ClubError;
use crate::domain::foundation::AthleteId;
use crate::domain::schedule::ClassSummary;
use crate::domain::season::Season;
use crate::ports::{AthleteRepository, ClubRepository};

use super::super::catalog::ClassCatalogService;
use super::super::club_scope::{load_club, load_club_athlete};

#[derive(Debug, Clone)]
pub struct GetRegistrationOptionsQuery {
    pub web_name: String,
    pub athlete_id: AthleteId,
}

#[derive(Debug, Clone)]
pub struct RegistrationOptions {
    pub athlete: Athlete,
    pub season: Option<Season>,
    /// Classes of the active season, by start time then name.
    pub classes: Vec<ClassSummary>,
}

pub struct GetRegistrationOptionsHandler {
    clubs: Arc<dyn ClubRepository>,
    athletes: Arc<dyn AthleteRepository>,
    catalog: ClassCatalogService,
}

impl GetRegistrationOptionsHandler {
    pub fn new(
        clubs: Arc<dyn ClubRepository>,
        athletes: Arc<dyn AthleteRepository>,
        catalog: ClassCatalogService,
    ) -> Self {
        Self {
            clubs,
            athletes,
            catalog,
        }
    }

    pub async fn handle(&self, query: GetRegistrationOptionsQuery) -> Result<RegistrationOptions, ClubError> {
        let club = load_club(self.clubs.as_ref(), &query.web_name).await?;
        let athlete = load_club_athlete(self.athletes.as_ref(), &club, &query.athlete_id).await?;
        let current = self.catalog.classes_for_current_season(&club).await?;

        Ok(RegistrationOptions {
            athlete,
            season: current.season,
            classes: current.catalog.sorted().into_iter().cloned().collect(),
        })
    }
}
