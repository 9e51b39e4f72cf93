//! HTTP adapter - REST API for club pages and staff tools.
//!
//! One module per resource, each with `dto`, `handlers` and `routes`.
//! Routes from every module are merged under `/api/clubs/:web_name`.

pub mod athletes;
pub mod classes;
pub mod error;
pub mod form;
pub mod middleware;
pub mod registrations;
pub mod schedule;
pub mod seasons;

mod router;
mod state;

pub use error::{handle_club_error, ErrorResponse};
pub use router::{api_router, club_routes, with_server_layers};
pub use state::ClubAppState;
