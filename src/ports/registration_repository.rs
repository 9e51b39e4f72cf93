//! Registration repository port.

use crate::domain::athlete::Athlete;
use crate::domain::foundation::{AthleteId, ClassId, DomainError, RegistrationId};
use crate::domain::registration::Registration;
use async_trait::async_trait;

/// Repository port for Registration persistence.
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Save a registration for an athlete that already exists.
    async fn save(&self, registration: &Registration) -> Result<(), DomainError>;

    /// Writes a new athlete and its first registration as one unit.
    ///
    /// Either both records exist afterwards or neither does.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure (nothing written)
    async fn enroll_new_athlete(
        &self,
        athlete: &Athlete,
        registration: &Registration,
    ) -> Result<(), DomainError>;

    /// Update status and description of an existing registration.
    ///
    /// # Errors
    ///
    /// - `RegistrationNotFound` if it doesn't exist
    async fn update(&self, registration: &Registration) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &RegistrationId) -> Result<Option<Registration>, DomainError>;

    /// Registrations of one athlete, newest first.
    async fn list_by_athlete(&self, athlete_id: &AthleteId) -> Result<Vec<Registration>, DomainError>;

    /// Registrations in one class, newest first.
    async fn list_by_class(&self, class_id: &ClassId) -> Result<Vec<Registration>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn RegistrationRepository) {}
    }
}
