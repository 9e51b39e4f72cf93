//! GetWeeklyScheduleHandler - Query handler for the weekly schedule grid.

use std::sync::Arc;

use crate::domain::club::{Club, ClubError};
use crate::domain::foundation::WeekdaySet;
use crate::domain::schedule::{generate_time_slots, ColorScheme, WeeklySchedule};
use crate::domain::season::Season;
use crate::ports::ClubRepository;

use super::super::club_scope::load_club;
use super::ClassCatalogService;

/// Query for a club's weekly grid.
#[derive(Debug, Clone)]
pub struct GetWeeklyScheduleQuery {
    pub web_name: String,
    /// Columns of the grid. `None` shows the full week.
    pub days: Option<WeekdaySet>,
}

#[derive(Debug, Clone)]
pub struct WeeklyScheduleResult {
    pub club: Club,
    pub season: Option<Season>,
    pub schedule: WeeklySchedule,
}

pub struct GetWeeklyScheduleHandler {
    clubs: Arc<dyn ClubRepository>,
    catalog: ClassCatalogService,
    colors: ColorScheme,
}

impl GetWeeklyScheduleHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>, catalog: ClassCatalogService, colors: ColorScheme) -> Self {
        Self {
            clubs,
            catalog,
            colors,
        }
    }

    pub async fn handle(&self, query: GetWeeklyScheduleQuery) -> Result<WeeklyScheduleResult, ClubError> {
        let club = load_club(self.clubs.as_ref(), &query.web_name).await?;
        let current = self.catalog.classes_for_current_season(&club).await?;

        let days = query.days.unwrap_or_else(WeekdaySet::full_week);
        let schedule = generate_time_slots(current.catalog.sorted(), &days, &self.colors);
        tracing::debug!(
            club = %club.web_name(),
            slots = schedule.slot_count(),
            "weekly schedule built"
        );

        Ok(WeeklyScheduleResult {
            club,
            season: current.season,
            schedule,
        })
    }
}
