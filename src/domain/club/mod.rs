//! Club domain module.
//!
//! The club is the tenant: seasons, athletes and teachers all belong to one.

mod aggregate;
mod errors;
mod teacher;

pub use aggregate::{Club, MAX_WEB_NAME_LENGTH};
pub use errors::ClubError;
pub use teacher::Teacher;
