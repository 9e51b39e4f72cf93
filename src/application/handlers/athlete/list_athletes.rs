//! ListAthletesHandler - Query handler for a club's athlete directory.

use std::sync::Arc;

use crate::domain::athlete::Athlete;
use crate::domain::club::ClubError;
use crate::domain::foundation::{require_capability, AuthenticatedUser, Capability};
use crate::ports::{AthleteRepository, ClubRepository};

use super::super::club_scope::load_club;

#[derive(Debug, Clone)]
pub struct ListAthletesQuery {
    pub web_name: String,
    pub user: AuthenticatedUser,
}

pub struct ListAthletesHandler {
    clubs: Arc<dyn ClubRepository>,
    athletes: Arc<dyn AthleteRepository>,
}

impl ListAthletesHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>, athletes: Arc<dyn AthleteRepository>) -> Self {
        Self { clubs, athletes }
    }

    /// Athletes ordered by last name, then first name.
    pub async fn handle(&self, query: ListAthletesQuery) -> Result<Vec<Athlete>, ClubError> {
        let club = load_club(self.clubs.as_ref(), &query.web_name).await?;
        require_capability(&query.user, club.id(), Capability::ViewAthletes)?;

        Ok(self.athletes.list_by_club(club.id()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryClubStore;
    use crate::application::handlers::test_support::{manager, seed_athlete, seed_club, visitor};

    fn handler(store: &InMemoryClubStore) -> ListAthletesHandler {
        let store = Arc::new(store.clone());
        ListAthletesHandler::new(store.clone(), store)
    }

    #[tokio::test]
    async fn manager_lists_club_athletes_only() {
        let store = InMemoryClubStore::new();
        let club = seed_club(&store, "botlahug").await;
        let other = seed_club(&store, "other").await;
        let mine = seed_athlete(&store, &club, "A1").await;
        seed_athlete(&store, &other, "B1").await;

        let athletes = handler(&store)
            .handle(ListAthletesQuery {
                web_name: "botlahug".to_string(),
                user: manager(&club),
            })
            .await
            .unwrap();

        assert_eq!(athletes, vec![mine]);
    }

    #[tokio::test]
    async fn manager_of_other_club_is_forbidden() {
        let store = InMemoryClubStore::new();
        seed_club(&store, "botlahug").await;
        let other = seed_club(&store, "other").await;

        let result = handler(&store)
            .handle(ListAthletesQuery {
                web_name: "botlahug".to_string(),
                user: manager(&other),
            })
            .await;

        assert!(matches!(result, Err(ClubError::Forbidden(_))));

        let result = handler(&store)
            .handle(ListAthletesQuery {
                web_name: "botlahug".to_string(),
                user: visitor(),
            })
            .await;
        assert!(matches!(result, Err(ClubError::Forbidden(_))));
    }
}
