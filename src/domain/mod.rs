//! Domain layer - Pure business logic with no external dependencies.
//!
//! Organized by module:
//! - `foundation` - Shared value objects, identifiers, roles and errors
//! - `club` - Clubs, teachers and the club-level error type
//! - `season` - Seasons and the active-season flag
//! - `class` - Class offerings and their validation
//! - `athlete` - Athletes and submitted athlete profiles
//! - `registration` - Registrations, statuses and class rosters
//! - `schedule` - Class catalog and the weekly time-slot grid
//! - `presentation` - Page titles and page context

pub mod athlete;
pub mod class;
pub mod club;
pub mod foundation;
pub mod presentation;
pub mod registration;
pub mod schedule;
pub mod season;
