//! ListCurrentClassesHandler - Query handler for the public class list.

use std::sync::Arc;

use crate::domain::club::{Club, ClubError};
use crate::domain::schedule::ClassCatalog;
use crate::domain::season::Season;
use crate::ports::ClubRepository;

use super::super::club_scope::load_club;
use super::ClassCatalogService;

/// Query for the classes of a club's active season.
#[derive(Debug, Clone)]
pub struct ListCurrentClassesQuery {
    pub web_name: String,
}

/// Classes offered right now.
#[derive(Debug, Clone)]
pub struct CurrentClassesResult {
    pub club: Club,
    pub season: Option<Season>,
    pub catalog: ClassCatalog,
}

pub struct ListCurrentClassesHandler {
    clubs: Arc<dyn ClubRepository>,
    catalog: ClassCatalogService,
}

impl ListCurrentClassesHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>, catalog: ClassCatalogService) -> Self {
        Self { clubs, catalog }
    }

    pub async fn handle(&self, query: ListCurrentClassesQuery) -> Result<CurrentClassesResult, ClubError> {
        let club = load_club(self.clubs.as_ref(), &query.web_name).await?;
        let current = self.catalog.classes_for_current_season(&club).await?;

        Ok(CurrentClassesResult {
            club,
            season: current.season,
            catalog: current.catalog,
        })
    }
}
