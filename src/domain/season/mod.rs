//! Season domain module.

mod aggregate;

pub use aggregate::{Season, END_BEFORE_START_MESSAGE};
