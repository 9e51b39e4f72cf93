//! Weekly schedule HTTP endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{ScheduleParams, ScheduleResponse, SlotResponse};
pub use handlers::get_schedule;
pub use routes::schedule_routes;
