//! Athlete directory query handlers.

mod find_athlete;
mod get_athlete_profile;
mod list_athletes;

pub use find_athlete::{FindAthleteHandler, FindAthleteQuery};
pub use get_athlete_profile::{
    AthleteProfileView, GetAthleteProfileHandler, GetAthleteProfileQuery, RegistrationLine,
};
pub use list_athletes::{ListAthletesHandler, ListAthletesQuery};
