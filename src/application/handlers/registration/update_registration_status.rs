//! UpdateRegistrationStatusHandler - Command handler for staff status changes.

use std::sync::Arc;

use crate::domain::club::ClubError;
use crate::domain::foundation::{require_capability, AuthenticatedUser, Capability, RegistrationId};
use crate::domain::registration::{Registration, RegistrationStatus};
use crate::ports::{AthleteRepository, ClubRepository, RegistrationRepository};

use super::super::club_scope::{load_club, load_club_athlete};

#[derive(Debug, Clone)]
pub struct UpdateRegistrationStatusCommand {
    pub web_name: String,
    pub user: AuthenticatedUser,
    pub registration_id: RegistrationId,
    pub status: RegistrationStatus,
}

#[derive(Debug, Clone)]
pub struct UpdateRegistrationStatusResult {
    pub registration: Registration,
    pub previous: RegistrationStatus,
}

pub struct UpdateRegistrationStatusHandler {
    clubs: Arc<dyn ClubRepository>,
    athletes: Arc<dyn AthleteRepository>,
    registrations: Arc<dyn RegistrationRepository>,
}

impl UpdateRegistrationStatusHandler {
    pub fn new(
        clubs: Arc<dyn ClubRepository>,
        athletes: Arc<dyn AthleteRepository>,
        registrations: Arc<dyn RegistrationRepository>,
    ) -> Self {
        Self {
            clubs,
            athletes,
            registrations,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateRegistrationStatusCommand,
    ) -> Result<UpdateRegistrationStatusResult, ClubError> {
        let club = load_club(self.clubs.as_ref(), &cmd.web_name).await?;
        require_capability(&cmd.user, club.id(), Capability::ManageRegistrations)?;

        let not_found = ClubError::RegistrationNotFound(cmd.registration_id);
        let mut registration = self
            .registrations
            .find_by_id(&cmd.registration_id)
            .await?
            .ok_or_else(|| not_found.clone())?;

        // Registrations of athletes from other clubs do not exist here
        load_club_athlete(self.athletes.as_ref(), &club, registration.athlete_id())
            .await
            .map_err(|_| not_found)?;

        let previous = registration.change_status(cmd.status)?;
        self.registrations.update(&registration).await?;

        tracing::info!(
            club = %club.web_name(),
            registration_id = %registration.id(),
            from = %previous,
            to = %registration.status(),
            "registration status changed"
        );
        Ok(UpdateRegistrationStatusResult {
            registration,
            previous,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryClubStore;
    use crate::application::handlers::test_support::{
        manager, seed_athlete, seed_class, seed_club, seed_season, user_with_role,
    };
    use crate::domain::foundation::Role;

    struct Fixture {
        store: InMemoryClubStore,
        club: crate::domain::club::Club,
        registration: Registration,
    }

    async fn fixture() -> Fixture {
        let store = InMemoryClubStore::new();
        let club = seed_club(&store, "botlahug").await;
        let season = seed_season(&store, &club, 2024, true).await;
        let class = seed_class(&store, &season, "Judo", 17).await;
        let athlete = seed_athlete(&store, &club, "A1").await;
        let registration = Registration::new(RegistrationId::new(), *athlete.id(), *class.id(), "form");
        RegistrationRepository::save(&store, &registration).await.unwrap();
        Fixture {
            store,
            club,
            registration,
        }
    }

    fn handler(store: &InMemoryClubStore) -> UpdateRegistrationStatusHandler {
        let store = Arc::new(store.clone());
        UpdateRegistrationStatusHandler::new(store.clone(), store.clone(), store)
    }

    fn command(user: AuthenticatedUser, id: RegistrationId, status: RegistrationStatus) -> UpdateRegistrationStatusCommand {
        UpdateRegistrationStatusCommand {
            web_name: "botlahug".to_string(),
            user,
            registration_id: id,
            status,
        }
    }

    #[tokio::test]
    async fn manager_activates_new_registration() {
        let f = fixture().await;

        let result = handler(&f.store)
            .handle(command(manager(&f.club), *f.registration.id(), RegistrationStatus::Active))
            .await
            .unwrap();

        assert_eq!(result.previous, RegistrationStatus::New);
        assert_eq!(result.registration.status(), RegistrationStatus::Active);
        let stored = RegistrationRepository::find_by_id(&f.store, f.registration.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status(), RegistrationStatus::Active);
    }

    #[tokio::test]
    async fn cannot_move_back_to_new() {
        let f = fixture().await;

        let result = handler(&f.store)
            .handle(command(manager(&f.club), *f.registration.id(), RegistrationStatus::New))
            .await;

        assert!(matches!(result, Err(ClubError::InvalidState(_))));
    }

    #[tokio::test]
    async fn teacher_cannot_change_status() {
        let f = fixture().await;

        let result = handler(&f.store)
            .handle(command(
                user_with_role(&f.club, Role::Teacher),
                *f.registration.id(),
                RegistrationStatus::Dropped,
            ))
            .await;

        assert!(matches!(result, Err(ClubError::Forbidden(_))));
    }

    #[tokio::test]
    async fn registration_of_other_club_is_not_found() {
        let f = fixture().await;
        let other = seed_club(&f.store, "other").await;

        let result = UpdateRegistrationStatusHandler::new(
            Arc::new(f.store.clone()),
            Arc::new(f.store.clone()),
            Arc::new(f.store.clone()),
        )
        .handle(UpdateRegistrationStatusCommand {
            web_name: "other".to_string(),
            user: manager(&other),
            registration_id: *f.registration.id(),
            status: RegistrationStatus::Active,
        })
        .await;

        assert!(matches!(result, Err(ClubError::RegistrationNotFound(_))));
    }
}
