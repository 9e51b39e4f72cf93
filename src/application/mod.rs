//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (write) and query handlers (read) live side by side,
//! grouped by the part of the club they act on.

pub mod handlers;

pub use handlers::*;
