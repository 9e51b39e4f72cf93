//! HTTP DTOs for the weekly schedule.

use serde::{Deserialize, Serialize};

use crate::adapters::http::seasons::SeasonResponse;
use crate::domain::foundation::{ValidationError, WeekdaySet};
use crate::domain::presentation::PageContext;
use crate::domain::schedule::{SlotRow, WeeklySchedule};

/// Query string for the schedule page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleParams {
    /// Comma-separated day codes, e.g. `mon,wed`. Absent means the full week.
    #[serde(default)]
    pub days: Option<String>,
}

impl ScheduleParams {
    pub fn day_set(&self) -> Result<Option<WeekdaySet>, ValidationError> {
        let Some(raw) = self.days.as_deref() else {
            return Ok(None);
        };
        let codes: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .collect();
        if codes.is_empty() {
            return Ok(None);
        }
        WeekdaySet::parse_codes(codes).map(Some)
    }
}

/// One row of the grid.
#[derive(Debug, Clone, Serialize)]
pub struct SlotResponse {
    /// `HH:MM-HH:MM`
    pub time: String,
    /// Cells keyed by day display name.
    pub days: SlotRow,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResponse {
    pub page: PageContext,
    pub season: Option<SeasonResponse>,
    /// Column headers, Sunday first.
    pub days: Vec<&'static str>,
    /// Rows in slot order.
    pub slots: Vec<SlotResponse>,
    /// The same grid keyed `"HH:MM-HH:MM"` → day name → cells.
    pub time_slots: WeeklySchedule,
}

impl ScheduleResponse {
    pub fn new(page: PageContext, season: Option<SeasonResponse>, schedule: &WeeklySchedule) -> Self {
        Self {
            page,
            season,
            days: schedule.days().iter().map(|day| day.display_name()).collect(),
            slots: schedule
                .slots()
                .map(|(slot, row)| SlotResponse {
                    time: slot.to_string(),
                    days: row.clone(),
                })
                .collect(),
            time_slots: schedule.clone(),
        }
    }
}
