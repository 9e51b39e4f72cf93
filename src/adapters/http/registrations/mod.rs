//! Registration HTTP endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ExistingAthleteRegistrationRequest, NewAthleteRegistrationRequest, NewRegistrationResponse,
    RegistrationOptionsResponse, RegistrationResponse, StatusChangeRequest, StatusChangeResponse,
};
pub use handlers::{
    get_registration_options, register_existing_athlete, register_new_athlete,
    update_registration_status,
};
pub use routes::registration_routes;
