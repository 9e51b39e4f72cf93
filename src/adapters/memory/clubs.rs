use async_trait::async_trait;

use crate::domain::club::{Club, Teacher};
use crate::domain::foundation::{ClubId, DomainError, TeacherId};
use crate::ports::{ClubRepository, TeacherRepository};

use super::InMemoryClubStore;

#[async_trait]
impl ClubRepository for InMemoryClubStore {
    async fn save(&self, club: &Club) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        let taken = tables
            .clubs
            .values()
            .any(|other| other.id() != club.id() && other.web_name() == club.web_name());
        if taken {
            return Err(DomainError::validation("web_name", "Club with this web name already exists."));
        }
        tables.clubs.insert(*club.id(), club.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ClubId) -> Result<Option<Club>, DomainError> {
        Ok(self.tables.read().await.clubs.get(id).cloned())
    }

    async fn find_by_web_name(&self, web_name: &str) -> Result<Option<Club>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.clubs.values().find(|c| c.web_name() == web_name).cloned())
    }
}

#[async_trait]
impl TeacherRepository for InMemoryClubStore {
    async fn save(&self, teacher: &Teacher) -> Result<(), DomainError> {
        self.tables
            .write()
            .await
            .teachers
            .insert(*teacher.id(), teacher.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &TeacherId) -> Result<Option<Teacher>, DomainError> {
        Ok(self.tables.read().await.teachers.get(id).cloned())
    }

    async fn find_by_ids(&self, ids: &[TeacherId]) -> Result<Vec<Teacher>, DomainError> {
        let tables = self.tables.read().await;
        Ok(ids.iter().filter_map(|id| tables.teachers.get(id).cloned()).collect())
    }

    async fn list_by_club(&self, club_id: &ClubId) -> Result<Vec<Teacher>, DomainError> {
        let tables = self.tables.read().await;
        let mut teachers: Vec<_> = tables
            .teachers
            .values()
            .filter(|t| t.club_id() == club_id)
            .cloned()
            .collect();
        teachers.sort_by(|a, b| {
            (a.last_name(), a.first_name()).cmp(&(b.last_name(), b.first_name()))
        });
        Ok(teachers)
    }
}
