//! Adapters - Implementations of port interfaces.
//!
//! - `auth` - session validators (JWT, mock)
//! - `clock` - wall and fixed clocks
//! - `http` - axum REST API
//! - `memory` - in-memory store for tests and database-less runs
//! - `postgres` - sqlx repositories

pub mod auth;
pub mod clock;
pub mod http;
pub mod memory;
pub mod postgres;

pub use auth::{JwtSessionValidator, MockSessionValidator};
pub use clock::{FixedClock, SystemClock};
pub use memory::InMemoryClubStore;
