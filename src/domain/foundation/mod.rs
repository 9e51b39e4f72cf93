//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the club scheduling domain.

mod auth;
mod authorization;
mod errors;
mod ids;
mod role;
mod state_machine;
mod timestamp;
mod weekday;

pub use auth::{AuthError, AuthenticatedUser};
pub use authorization::{authorize, require_capability, AuthorizationResult};
pub use errors::{DomainError, ErrorCode, FieldErrors, ValidationError, INVALID_CHOICE, REQUIRED};
pub use ids::{AthleteId, ClassId, ClubId, RegistrationId, SeasonId, TeacherId, UserId};
pub use role::{Capability, Role};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
pub use weekday::{Weekday, WeekdaySet};
