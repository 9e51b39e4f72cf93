//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` port:
//!
//! - `jwt` - HS256 tokens carrying the caller's club role
//! - `mock` - fixed token table for tests

mod jwt;
mod mock;

pub use jwt::{ClubClaims, JwtConfig, JwtSessionValidator};
pub use mock::MockSessionValidator;
