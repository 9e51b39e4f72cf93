//! Schedule domain module.
//!
//! Turns a season's classes into display records (`ClassCatalog`) and the
//! weekly slot × day grid (`WeeklySchedule`).

mod catalog;
mod color;
mod grid;

pub use catalog::{format_hhmm, ClassCatalog, ClassSummary};
pub use color::{ColorScheme, DEFAULT_COLOR, DEFAULT_PALETTE};
pub use grid::{generate_time_slots, ClassCell, SlotRow, TimeSlot, WeeklySchedule};
