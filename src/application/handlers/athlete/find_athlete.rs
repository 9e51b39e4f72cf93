//! FindAthleteHandler - Query handler for the public athlete-code lookup.

use std::sync::Arc;

use crate::domain::athlete::Athlete;
use crate::domain::club::ClubError;
use crate::domain::foundation::REQUIRED;
use crate::ports::{AthleteRepository, ClubRepository};

use super::super::club_scope::load_club;

#[derive(Debug, Clone)]
pub struct FindAthleteQuery {
    pub web_name: String,
    /// Short public code printed on the athlete's card.
    pub athlete_code: String,
}

pub struct FindAthleteHandler {
    clubs: Arc<dyn ClubRepository>,
    athletes: Arc<dyn AthleteRepository>,
}

impl FindAthleteHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>, athletes: Arc<dyn AthleteRepository>) -> Self {
        Self { clubs, athletes }
    }

    pub async fn handle(&self, query: FindAthleteQuery) -> Result<Athlete, ClubError> {
        let club = load_club(self.clubs.as_ref(), &query.web_name).await?;

        let code = query.athlete_code.trim();
        if code.is_empty() {
            return Err(ClubError::validation("athlete_id", REQUIRED));
        }

        self.athletes
            .find_by_code(code, club.id())
            .await?
            .ok_or_else(|| ClubError::AthleteCodeNotFound(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryClubStore;
    use crate::application::handlers::test_support::{seed_athlete, seed_club};

    fn handler(store: &InMemoryClubStore) -> FindAthleteHandler {
        let store = Arc::new(store.clone());
        FindAthleteHandler::new(store.clone(), store)
    }

    fn query(code: &str) -> FindAthleteQuery {
        FindAthleteQuery {
            web_name: "botlahug".to_string(),
            athlete_code: code.to_string(),
        }
    }

    #[tokio::test]
    async fn finds_athlete_by_code() {
        let store = InMemoryClubStore::new();
        let club = seed_club(&store, "botlahug").await;
        let athlete = seed_athlete(&store, &club, "A17").await;

        let found = handler(&store).handle(query(" A17 ")).await.unwrap();

        assert_eq!(found.id(), athlete.id());
    }

    #[tokio::test]
    async fn unknown_code_is_not_found() {
        let store = InMemoryClubStore::new();
        let club = seed_club(&store, "botlahug").await;
        seed_athlete(&store, &club, "A17").await;

        let result = handler(&store).handle(query("B22")).await;

        assert!(matches!(result, Err(ClubError::AthleteCodeNotFound(code)) if code == "B22"));
    }

    #[tokio::test]
    async fn code_from_other_club_is_not_found() {
        let store = InMemoryClubStore::new();
        seed_club(&store, "botlahug").await;
        let other = seed_club(&store, "other").await;
        seed_athlete(&store, &other, "A17").await;

        let result = handler(&store).handle(query("A17")).await;

        assert!(matches!(result, Err(ClubError::AthleteCodeNotFound(_))));
    }

    #[tokio::test]
    async fn blank_code_is_validation_error() {
        let store = InMemoryClubStore::new();
        seed_club(&store, "botlahug").await;

        let result = handler(&store).handle(query("  ")).await;

        assert!(matches!(result, Err(ClubError::ValidationFailed { .. })));
    }
}
