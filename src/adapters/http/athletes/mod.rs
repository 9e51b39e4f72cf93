//! Athlete HTTP endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{AthleteLookupParams, AthleteProfileResponse, AthleteResponse, RegistrationLineResponse};
pub use handlers::{get_athlete_profile, list_athletes, lookup_athlete};
pub use routes::athlete_routes;
