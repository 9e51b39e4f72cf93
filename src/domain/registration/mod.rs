//! Registration domain module.
//!
//! Registrations are created by the public forms with status `New`; staff
//! move them through the remaining statuses afterwards.

mod aggregate;
mod roster;
mod status;

pub use aggregate::{new_athlete_description, Registration, EXISTING_ATHLETE_DESCRIPTION};
pub use roster::{RosterEntry, NO_DESCRIPTION};
pub use status::RegistrationStatus;
