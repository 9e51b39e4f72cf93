use async_trait::async_trait;

use crate::domain::athlete::Athlete;
use crate::domain::foundation::{AthleteId, ClubId, DomainError};
use crate::ports::AthleteRepository;

use super::InMemoryClubStore;

#[async_trait]
impl AthleteRepository for InMemoryClubStore {
    async fn save(&self, athlete: &Athlete) -> Result<(), DomainError> {
        self.tables
            .write()
            .await
            .athletes
            .insert(*athlete.id(), athlete.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &AthleteId) -> Result<Option<Athlete>, DomainError> {
        Ok(self.tables.read().await.athletes.get(id).cloned())
    }

    async fn find_by_ids(&self, ids: &[AthleteId]) -> Result<Vec<Athlete>, DomainError> {
        let tables = self.tables.read().await;
        Ok(ids.iter().filter_map(|id| tables.athletes.get(id).cloned()).collect())
    }

    async fn find_by_code(&self, code: &str, club_id: &ClubId) -> Result<Option<Athlete>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .athletes
            .values()
            .filter(|a| a.belongs_to(club_id) && a.athlete_code() == Some(code))
            .min_by_key(|a| *a.created_at())
            .cloned())
    }

    async fn list_by_club(&self, club_id: &ClubId) -> Result<Vec<Athlete>, DomainError> {
        let tables = self.tables.read().await;
        let mut athletes: Vec<_> = tables
            .athletes
            .values()
            .filter(|a| a.belongs_to(club_id))
            .cloned()
            .collect();
        athletes.sort_by(|a, b| {
            (a.last_name(), a.first_name()).cmp(&(b.last_name(), b.first_name()))
        });
        Ok(athletes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::athlete::AthleteProfile;
    use chrono::NaiveDate;

    fn athlete(club: ClubId, code: &str, first: &str, last: &str) -> Athlete {
        let profile = AthleteProfile {
            athlete_code: Some(code.to_string()),
            first_name: first.to_string(),
            last_name: last.to_string(),
            dob: NaiveDate::from_ymd_opt(2012, 3, 14),
            email: "parent@example.com".to_string(),
            ..AthleteProfile::default()
        };
        Athlete::new(AthleteId::new(), club, profile, None).unwrap()
    }

    #[tokio::test]
    async fn find_by_code_is_scoped_to_club() {
        let store = InMemoryClubStore::new();
        let (a, b) = (ClubId::new(), ClubId::new());
        let dana = athlete(a, "123", "Dana", "Levi");
        store.save(&dana).await.unwrap();

        assert_eq!(store.find_by_code("123", &a).await.unwrap(), Some(dana));
        assert!(store.find_by_code("123", &b).await.unwrap().is_none());
        assert!(store.find_by_code("999", &a).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_by_club_sorts_by_last_name() {
        let store = InMemoryClubStore::new();
        let club = ClubId::new();
        store.save(&athlete(club, "1", "Noa", "Shapira")).await.unwrap();
        store.save(&athlete(club, "2", "Omer", "Avraham")).await.unwrap();
        store.save(&athlete(ClubId::new(), "3", "Other", "Club")).await.unwrap();

        let names: Vec<_> = store
            .list_by_club(&club)
            .await
            .unwrap()
            .iter()
            .map(Athlete::full_name)
            .collect();
        assert_eq!(names, vec!["Omer Avraham", "Noa Shapira"]);
    }
}
