//! Catalog and schedule query handlers.

mod class_catalog_service;
mod get_weekly_schedule;
mod list_current_classes;

pub use class_catalog_service::{ClassCatalogService, CurrentClasses};
pub use get_weekly_schedule::{GetWeeklyScheduleHandler, GetWeeklyScheduleQuery, WeeklyScheduleResult};
pub use list_current_classes::{CurrentClassesResult, ListCurrentClassesHandler, ListCurrentClassesQuery};
