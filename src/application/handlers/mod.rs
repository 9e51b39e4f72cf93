//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod athlete;
pub mod catalog;
pub mod class;
pub mod registration;
pub mod season;

mod club_scope;

#[cfg(test)]
mod test_support;

pub use athlete::{
    AthleteProfileView, FindAthleteHandler, FindAthleteQuery, GetAthleteProfileHandler,
    GetAthleteProfileQuery, ListAthletesHandler, ListAthletesQuery, RegistrationLine,
};
pub use catalog::{
    ClassCatalogService, CurrentClasses, CurrentClassesResult, GetWeeklyScheduleHandler,
    GetWeeklyScheduleQuery, ListCurrentClassesHandler, ListCurrentClassesQuery,
    WeeklyScheduleResult,
};
pub use class::{
    ClassRoster, CreateClassCommand, CreateClassHandler, GetClassRosterHandler,
    GetClassRosterQuery, UpdateClassCommand, UpdateClassHandler,
};
pub use registration::{
    GetRegistrationOptionsHandler, GetRegistrationOptionsQuery, RegisterExistingAthleteCommand,
    RegisterExistingAthleteHandler, RegisterNewAthleteCommand, RegisterNewAthleteHandler,
    RegisterNewAthleteResult, RegistrationOptions, UpdateRegistrationStatusCommand,
    UpdateRegistrationStatusHandler, UpdateRegistrationStatusResult,
};
pub use season::{
    ActivateSeasonCommand, ActivateSeasonHandler, ActiveSeasonResult, CreateSeasonCommand,
    CreateSeasonHandler, GetActiveSeasonHandler, GetActiveSeasonQuery, ListSeasonsHandler,
    ListSeasonsQuery,
};
