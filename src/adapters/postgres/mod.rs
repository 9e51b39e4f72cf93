//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresClubRepository` - clubs and their teachers
//! - `PostgresSeasonRepository` - seasons, with transactional activation
//! - `PostgresClassRepository` - class offerings
//! - `PostgresAthleteRepository` - athletes
//! - `PostgresRegistrationRepository` - registrations, with transactional
//!   new-athlete enrollment
//!
//! Schema lives in `migrations/`.

mod athlete_repository;
mod class_repository;
mod club_repository;
mod registration_repository;
mod season_repository;

pub use athlete_repository::PostgresAthleteRepository;
pub use class_repository::PostgresClassRepository;
pub use club_repository::PostgresClubRepository;
pub use registration_repository::PostgresRegistrationRepository;
pub use season_repository::PostgresSeasonRepository;

use sqlx::postgres::PgRow;
use sqlx::{Postgres, Row};

use crate::domain::foundation::DomainError;

/// Reads one column, mapping decode failures to `DatabaseError`.
fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("get {}", name), e))
}
