//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `ClubRepository`, `TeacherRepository`
//! - `SeasonRepository` - active-season lookup and atomic activation
//! - `ClassRepository` - season-scoped class lookup
//! - `AthleteRepository` - club-scoped athlete lookup
//! - `RegistrationRepository` - registrations, with atomic new-athlete enrollment
//!
//! ## Other Ports
//!
//! - `SessionValidator` - bearer-token validation
//! - `Clock` - current instant for page rendering

mod athlete_repository;
mod class_repository;
mod clock;
mod club_repository;
mod registration_repository;
mod season_repository;
mod session_validator;

pub use athlete_repository::AthleteRepository;
pub use class_repository::ClassRepository;
pub use clock::Clock;
pub use club_repository::{ClubRepository, TeacherRepository};
pub use registration_repository::RegistrationRepository;
pub use season_repository::SeasonRepository;
pub use session_validator::SessionValidator;
