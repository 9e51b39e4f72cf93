//! Registration command and query handlers.

mod get_registration_options;
mod register_existing_athlete;
mod register_new_athlete;
mod update_registration_status;

pub use get_registration_options::{
    GetRegistrationOptionsHandler, GetRegistrationOptionsQuery, RegistrationOptions,
};
pub use register_existing_athlete::{RegisterExistingAthleteCommand, RegisterExistingAthleteHandler};
pub use register_new_athlete::{
    RegisterNewAthleteCommand, RegisterNewAthleteHandler, RegisterNewAthleteResult,
};
pub use update_registration_status::{
    UpdateRegistrationStatusCommand, UpdateRegistrationStatusHandler, UpdateRegistrationStatusResult,
};
