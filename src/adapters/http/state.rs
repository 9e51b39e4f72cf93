//! Shared state for the club API.

use std::sync::Arc;

use sqlx::PgPool;

use crate::adapters::clock::SystemClock;
use crate::adapters::memory::InMemoryClubStore;
use crate::adapters::postgres::{
    PostgresAthleteRepository, PostgresClassRepository, PostgresClubRepository,
    PostgresRegistrationRepository, PostgresSeasonRepository,
};
use crate::application::handlers::{
    ActivateSeasonHandler, ClassCatalogService, CreateClassHandler, CreateSeasonHandler,
    FindAthleteHandler, GetActiveSeasonHandler, GetAthleteProfileHandler, GetClassRosterHandler,
    GetRegistrationOptionsHandler, GetWeeklyScheduleHandler, ListAthletesHandler,
    ListCurrentClassesHandler, ListSeasonsHandler, RegisterExistingAthleteHandler,
    RegisterNewAthleteHandler, UpdateClassHandler, UpdateRegistrationStatusHandler,
};
use crate::domain::club::Club;
use crate::domain::presentation::{MinuteParityTitle, PageContext, TitlePolicy};
use crate::domain::schedule::ColorScheme;
use crate::domain::season::Season;
use crate::ports::{
    AthleteRepository, ClassRepository, Clock, ClubRepository, RegistrationRepository,
    SeasonRepository, TeacherRepository,
};

/// Shared application state containing all dependencies.
///
/// Cloned per request; every dependency is behind an `Arc`.
#[derive(Clone)]
pub struct ClubAppState {
    pub clubs: Arc<dyn ClubRepository>,
    pub teachers: Arc<dyn TeacherRepository>,
    pub seasons: Arc<dyn SeasonRepository>,
    pub classes: Arc<dyn ClassRepository>,
    pub athletes: Arc<dyn AthleteRepository>,
    pub registrations: Arc<dyn RegistrationRepository>,
    pub clock: Arc<dyn Clock>,
    pub title_policy: Arc<dyn TitlePolicy>,
    pub colors: ColorScheme,
}

impl ClubAppState {
    /// State backed by one in-memory store.
    pub fn in_memory(store: InMemoryClubStore) -> Self {
        let store = Arc::new(store);
        Self {
            clubs: store.clone(),
            teachers: store.clone(),
            seasons: store.clone(),
            classes: store.clone(),
            athletes: store.clone(),
            registrations: store,
            clock: Arc::new(SystemClock),
            title_policy: Arc::new(MinuteParityTitle),
            colors: ColorScheme::default(),
        }
    }

    /// State backed by PostgreSQL.
    pub fn postgres(pool: PgPool) -> Self {
        let clubs = Arc::new(PostgresClubRepository::new(pool.clone()));
        Self {
            clubs: clubs.clone(),
            teachers: clubs,
            seasons: Arc::new(PostgresSeasonRepository::new(pool.clone())),
            classes: Arc::new(PostgresClassRepository::new(pool.clone())),
            athletes: Arc::new(PostgresAthleteRepository::new(pool.clone())),
            registrations: Arc::new(PostgresRegistrationRepository::new(pool)),
            clock: Arc::new(SystemClock),
            title_policy: Arc::new(MinuteParityTitle),
            colors: ColorScheme::default(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_title_policy(mut self, policy: Arc<dyn TitlePolicy>) -> Self {
        self.title_policy = policy;
        self
    }

    pub fn with_colors(mut self, colors: ColorScheme) -> Self {
        self.colors = colors;
        self
    }

    /// Page context for `page`, rendered now.
    pub fn page_context(&self, page: &str, club: &Club, season: Option<&Season>) -> PageContext {
        let now = self.clock.now();
        PageContext::build(self.title_policy.as_ref(), page, &now, club, season)
    }

    // ════════════════════════════════════════════════════════════════════════
    // Handler factories
    // ════════════════════════════════════════════════════════════════════════

    fn catalog_service(&self) -> ClassCatalogService {
        ClassCatalogService::new(
            self.seasons.clone(),
            self.classes.clone(),
            self.teachers.clone(),
        )
    }

    pub fn get_active_season_handler(&self) -> GetActiveSeasonHandler {
        GetActiveSeasonHandler::new(self.clubs.clone(), self.seasons.clone())
    }

    pub fn list_seasons_handler(&self) -> ListSeasonsHandler {
        ListSeasonsHandler::new(self.clubs.clone(), self.seasons.clone())
    }

    pub fn create_season_handler(&self) -> CreateSeasonHandler {
        CreateSeasonHandler::new(self.clubs.clone(), self.seasons.clone())
    }

    pub fn activate_season_handler(&self) -> ActivateSeasonHandler {
        ActivateSeasonHandler::new(self.clubs.clone(), self.seasons.clone())
    }

    pub fn list_current_classes_handler(&self) -> ListCurrentClassesHandler {
        ListCurrentClassesHandler::new(self.clubs.clone(), self.catalog_service())
    }

    pub fn weekly_schedule_handler(&self) -> GetWeeklyScheduleHandler {
        GetWeeklyScheduleHandler::new(
            self.clubs.clone(),
            self.catalog_service(),
            self.colors.clone(),
        )
    }

    pub fn create_class_handler(&self) -> CreateClassHandler {
        CreateClassHandler::new(
            self.clubs.clone(),
            self.seasons.clone(),
            self.classes.clone(),
            self.teachers.clone(),
        )
    }

    pub fn update_class_handler(&self) -> UpdateClassHandler {
        UpdateClassHandler::new(
            self.clubs.clone(),
            self.seasons.clone(),
            self.classes.clone(),
            self.teachers.clone(),
        )
    }

    pub fn class_roster_handler(&self) -> GetClassRosterHandler {
        GetClassRosterHandler::new(
            self.clubs.clone(),
            self.seasons.clone(),
            self.classes.clone(),
            self.athletes.clone(),
            self.registrations.clone(),
        )
    }

    pub fn register_new_athlete_handler(&self) -> RegisterNewAthleteHandler {
        RegisterNewAthleteHandler::new(
            self.clubs.clone(),
            self.seasons.clone(),
            self.classes.clone(),
            self.registrations.clone(),
        )
    }

    pub fn registration_options_handler(&self) -> GetRegistrationOptionsHandler {
        GetRegistrationOptionsHandler::new(
            self.clubs.clone(),
            self.athletes.clone(),
            self.catalog_service(),
        )
    }

    pub fn register_existing_athlete_handler(&self) -> RegisterExistingAthleteHandler {
        RegisterExistingAthleteHandler::new(
            self.clubs.clone(),
            self.seasons.clone(),
            self.classes.clone(),
            self.athletes.clone(),
            self.registrations.clone(),
        )
    }

    pub fn update_registration_status_handler(&self) -> UpdateRegistrationStatusHandler {
        UpdateRegistrationStatusHandler::new(
            self.clubs.clone(),
            self.athletes.clone(),
            self.registrations.clone(),
        )
    }

    pub fn find_athlete_handler(&self) -> FindAthleteHandler {
        FindAthleteHandler::new(self.clubs.clone(), self.athletes.clone())
    }

    pub fn list_athletes_handler(&self) -> ListAthletesHandler {
        ListAthletesHandler::new(self.clubs.clone(), self.athletes.clone())
    }

    pub fn athlete_profile_handler(&self) -> GetAthleteProfileHandler {
        GetAthleteProfileHandler::new(
            self.clubs.clone(),
            self.athletes.clone(),
            self.classes.clone(),
            self.registrations.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_is_send_sync_clone() {
        fn assert_bounds<T: Send + Sync + Clone>() {}
        assert_bounds::<ClubAppState>();
    }
}
