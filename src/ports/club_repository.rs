//! Club and teacher repository ports.

use crate::domain::club::{Club, Teacher};
use crate::domain::foundation::{ClubId, DomainError, TeacherId};
use async_trait::async_trait;

/// Repository port for clubs.
#[async_trait]
pub trait ClubRepository: Send + Sync {
    /// Save a new club.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the web name is already taken
    /// - `DatabaseError` on persistence failure
    async fn save(&self, club: &Club) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &ClubId) -> Result<Option<Club>, DomainError>;

    /// Find a club by its URL slug.
    async fn find_by_web_name(&self, web_name: &str) -> Result<Option<Club>, DomainError>;
}

/// Repository port for teachers.
#[async_trait]
pub trait TeacherRepository: Send + Sync {
    async fn save(&self, teacher: &Teacher) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &TeacherId) -> Result<Option<Teacher>, DomainError>;

    /// Teachers with the given ids. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[TeacherId]) -> Result<Vec<Teacher>, DomainError>;

    /// All teachers of a club, ordered by last then first name.
    async fn list_by_club(&self, club_id: &ClubId) -> Result<Vec<Teacher>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn club_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ClubRepository) {}
    }

    #[test]
    fn teacher_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn TeacherRepository) {}
    }
}
