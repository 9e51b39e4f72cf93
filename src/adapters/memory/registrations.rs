use async_trait::async_trait;

use crate::domain::athlete::Athlete;
use crate::domain::foundation::{AthleteId, ClassId, DomainError, ErrorCode, RegistrationId};
use crate::domain::registration::Registration;
use crate::ports::RegistrationRepository;

use super::InMemoryClubStore;

fn injected_failure() -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        "Failed to save registration: write rejected",
    )
}

fn newest_first(registrations: &mut [Registration]) {
    registrations.sort_by(|a, b| b.created_at().cmp(a.created_at()));
}

#[async_trait]
impl RegistrationRepository for InMemoryClubStore {
    async fn save(&self, registration: &Registration) -> Result<(), DomainError> {
        if self.registration_writes_fail() {
            return Err(injected_failure());
        }
        let mut tables = self.tables.write().await;
        tables.check_registration_refs(registration)?;
        tables
            .registrations
            .insert(*registration.id(), registration.clone());
        Ok(())
    }

    async fn enroll_new_athlete(
        &self,
        athlete: &Athlete,
        registration: &Registration,
    ) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        tables.athletes.insert(*athlete.id(), athlete.clone());

        let outcome = if self.registration_writes_fail() {
            Err(injected_failure())
        } else {
            tables.check_registration_refs(registration)
        };

        match outcome {
            Ok(()) => {
                tables
                    .registrations
                    .insert(*registration.id(), registration.clone());
                Ok(())
            }
            Err(err) => {
                tables.athletes.remove(athlete.id());
                Err(err)
            }
        }
    }

    async fn update(&self, registration: &Registration) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        match tables.registrations.get_mut(registration.id()) {
            Some(stored) => {
                *stored = registration.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::RegistrationNotFound,
                format!("Registration not found: {}", registration.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &RegistrationId) -> Result<Option<Registration>, DomainError> {
        Ok(self.tables.read().await.registrations.get(id).cloned())
    }

    async fn list_by_athlete(&self, athlete_id: &AthleteId) -> Result<Vec<Registration>, DomainError> {
        let tables = self.tables.read().await;
        let mut registrations: Vec<_> = tables
            .registrations
            .values()
            .filter(|r| r.athlete_id() == athlete_id)
            .cloned()
            .collect();
        newest_first(&mut registrations);
        Ok(registrations)
    }

    async fn list_by_class(&self, class_id: &ClassId) -> Result<Vec<Registration>, DomainError> {
        let tables = self.tables.read().await;
        let mut registrations: Vec<_> = tables
            .registrations
            .values()
            .filter(|r| r.class_id() == class_id)
            .cloned()
            .collect();
        newest_first(&mut registrations);
        Ok(registrations)
    }
}
