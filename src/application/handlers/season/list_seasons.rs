//! ListSeasonsHandler - Query handler listing every season of a club.

use std::sync::Arc;

use crate::domain::club::ClubError;
use crate::domain::foundation::{require_capability, AuthenticatedUser, Capability};
use crate::domain::season::Season;
use crate::ports::{ClubRepository, SeasonRepository};

use super::super::club_scope::load_club;

#[derive(Debug, Clone)]
pub struct ListSeasonsQuery {
    pub web_name: String,
    pub user: AuthenticatedUser,
}

pub struct ListSeasonsHandler {
    clubs: Arc<dyn ClubRepository>,
    seasons: Arc<dyn SeasonRepository>,
}

impl ListSeasonsHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>, seasons: Arc<dyn SeasonRepository>) -> Self {
        Self { clubs, seasons }
    }

    /// Seasons newest first.
    pub async fn handle(&self, query: ListSeasonsQuery) -> Result<Vec<Season>, ClubError> {
        let club = load_club(self.clubs.as_ref(), &query.web_name).await?;
        require_capability(&query.user, club.id(), Capability::ManageSeasons)?;

        Ok(self.seasons.list_by_club(club.id()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryClubStore;
    use crate::application::handlers::test_support::{manager, seed_club, seed_season, visitor};

    fn handler(store: &InMemoryClubStore) -> ListSeasonsHandler {
        let store = Arc::new(store.clone());
        ListSeasonsHandler::new(store.clone(), store)
    }

    #[tokio::test]
    async fn manager_sees_seasons_newest_first() {
        let store = InMemoryClubStore::new();
        let club = seed_club(&store, "botlahug").await;
        seed_season(&store, &club, 2023, false).await;
        seed_season(&store, &club, 2024, true).await;

        let seasons = handler(&store)
            .handle(ListSeasonsQuery {
                web_name: "botlahug".to_string(),
                user: manager(&club),
            })
            .await
            .unwrap();

        let labels: Vec<_> = seasons.iter().map(Season::label).collect();
        assert_eq!(labels, vec!["2024 - 2025", "2023 - 2024"]);
    }

    #[tokio::test]
    async fn visitor_is_forbidden() {
        let store = InMemoryClubStore::new();
        seed_club(&store, "botlahug").await;

        let result = handler(&store)
            .handle(ListSeasonsQuery {
                web_name: "botlahug".to_string(),
                user: visitor(),
            })
            .await;

        assert!(matches!(result, Err(ClubError::Forbidden(_))));
    }
}
