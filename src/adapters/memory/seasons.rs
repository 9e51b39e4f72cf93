use async_trait::async_trait;

use crate::domain::foundation::{ClubId, DomainError, ErrorCode, SeasonId};
use crate::domain::season::Season;
use crate::ports::SeasonRepository;

use super::InMemoryClubStore;

#[async_trait]
impl SeasonRepository for InMemoryClubStore {
    async fn save(&self, season: &Season) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        tables.check_single_active(season)?;
        tables.seasons.insert(*season.id(), season.clone());
        Ok(())
    }

    async fn save_active(&self, season: &Season) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        for other in tables.seasons.values_mut().filter(|s| s.club_id() == season.club_id()) {
            other.deactivate();
        }
        tables.seasons.insert(*season.id(), season.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &SeasonId) -> Result<Option<Season>, DomainError> {
        Ok(self.tables.read().await.seasons.get(id).cloned())
    }

    async fn find_active(&self, club_id: &ClubId) -> Result<Option<Season>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .seasons
            .values()
            .filter(|s| s.club_id() == club_id && s.is_active())
            .max_by_key(|s| (s.start_date(), *s.id()))
            .cloned())
    }

    async fn list_by_club(&self, club_id: &ClubId) -> Result<Vec<Season>, DomainError> {
        let tables = self.tables.read().await;
        let mut seasons: Vec<_> = tables
            .seasons
            .values()
            .filter(|s| s.club_id() == club_id)
            .cloned()
            .collect();
        seasons.sort_by(|a, b| b.start_date().cmp(&a.start_date()));
        Ok(seasons)
    }

    async fn activate(&self, club_id: &ClubId, season_id: &SeasonId) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        let belongs = tables
            .seasons
            .get(season_id)
            .map(|s| s.belongs_to(club_id))
            .unwrap_or(false);
        if !belongs {
            return Err(DomainError::new(
                ErrorCode::SeasonNotFound,
                format!("Season not found: {}", season_id),
            ));
        }

        for season in tables.seasons.values_mut().filter(|s| s.club_id() == club_id) {
            if season.id() == season_id {
                season.activate();
            } else {
                season.deactivate();
            }
        }
        Ok(())
    }
}
