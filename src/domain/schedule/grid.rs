//! Weekly schedule grid: time slot × weekday → class cells.
//!
//! Every slot row carries every requested day, empty or not, so a renderer
//! can index `[slot][day]` without a presence check.

use chrono::NaiveTime;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::{ClassId, Weekday, WeekdaySet};

use super::{format_hhmm, ClassSummary, ColorScheme};

/// Row key of the grid. Orders by start time, then end time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_hhmm(self.start), format_hhmm(self.end))
    }
}

/// One class occurrence in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassCell {
    #[serde(rename = "ID")]
    pub id: ClassId,
    pub name: String,
    pub teacher: Option<String>,
    /// Same text as the slot key.
    pub time: String,
    pub place: Option<String>,
    pub color: String,
}

/// Cells of one slot, one bucket per requested day.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlotRow(BTreeMap<Weekday, Vec<ClassCell>>);

impl SlotRow {
    fn with_days(days: &WeekdaySet) -> Self {
        Self(days.iter().map(|day| (day, Vec::new())).collect())
    }

    /// Cells on `day`, `None` when the day was not requested.
    pub fn cells(&self, day: Weekday) -> Option<&[ClassCell]> {
        self.0.get(&day).map(Vec::as_slice)
    }

    pub fn days(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.0.keys().copied()
    }
}

impl Serialize for SlotRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (day, cells) in &self.0 {
            map.serialize_entry(day.display_name(), cells)?;
        }
        map.end()
    }
}

/// The aggregated weekly schedule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeeklySchedule {
    days: WeekdaySet,
    slots: BTreeMap<TimeSlot, SlotRow>,
}

impl WeeklySchedule {
    /// Empty grid with the given day columns.
    pub fn new(days: WeekdaySet) -> Self {
        Self {
            days,
            slots: BTreeMap::new(),
        }
    }

    /// Day columns of this grid.
    pub fn days(&self) -> &WeekdaySet {
        &self.days
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Slots in chronological order.
    pub fn slots(&self) -> impl Iterator<Item = (&TimeSlot, &SlotRow)> {
        self.slots.iter()
    }

    /// Slot keys as `HH:MM-HH:MM`, chronological.
    pub fn slot_labels(&self) -> Vec<String> {
        self.slots.keys().map(TimeSlot::to_string).collect()
    }

    /// Looks a row up by its `HH:MM-HH:MM` label.
    pub fn row(&self, label: &str) -> Option<&SlotRow> {
        self.slots
            .iter()
            .find(|(slot, _)| slot.to_string() == label)
            .map(|(_, row)| row)
    }

    /// Appends a cell, creating the slot row on first use.
    fn push(&mut self, slot: TimeSlot, day: Weekday, cell: ClassCell) {
        let days = &self.days;
        self.slots
            .entry(slot)
            .or_insert_with(|| SlotRow::with_days(days))
            .0
            .entry(day)
            .or_default()
            .push(cell);
    }
}

impl Serialize for WeeklySchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for (slot, row) in &self.slots {
            map.serialize_entry(&slot.to_string(), row)?;
        }
        map.end()
    }
}

/// Builds the weekly grid from class summaries.
///
/// Days a class meets on that are not in `days` are left out of the grid.
/// Within a bucket, cells keep the order of `classes`.
pub fn generate_time_slots<'a, I>(classes: I, days: &WeekdaySet, colors: &ColorScheme) -> WeeklySchedule
where
    I: IntoIterator<Item = &'a ClassSummary>,
{
    let mut schedule = WeeklySchedule::new(days.clone());

    for class in classes {
        let slot = TimeSlot::new(class.start_time, class.end_time);
        let time = slot.to_string();
        for day in class.days.iter().filter(|day| days.contains(*day)) {
            schedule.push(
                slot,
                day,
                ClassCell {
                    id: class.id,
                    name: class.name.clone(),
                    teacher: class.teacher.clone(),
                    time: time.clone(),
                    place: class.place.clone(),
                    color: colors.color_for(&class.id).to_string(),
                },
            );
        }
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn summary(name: &str, start: u32, end: u32, days: &[Weekday]) -> ClassSummary {
        ClassSummary {
            id: ClassId::new(),
            name: name.to_string(),
            teacher: None,
            place: Some("Dojo".to_string()),
            price: Decimal::ZERO,
            registration_fee: Decimal::ZERO,
            start_time: NaiveTime::from_hms_opt(start, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(end, 0, 0).unwrap(),
            days: days.iter().copied().collect(),
        }
    }

    #[test]
    fn mon_wed_class_fills_only_those_days() {
        let classes = [summary("Judo", 9, 10, &[Weekday::Mon, Weekday::Wed])];
        let grid = generate_time_slots(&classes, &WeekdaySet::full_week(), &ColorScheme::default());

        assert_eq!(grid.slot_labels(), vec!["09:00-10:00"]);
        let row = grid.row("09:00-10:00").unwrap();
        for day in Weekday::ALL {
            let cells = row.cells(day).unwrap();
            match day {
                Weekday::Mon | Weekday::Wed => assert_eq!(cells.len(), 1),
                _ => assert!(cells.is_empty(), "{} should be empty", day),
            }
        }
    }

    #[test]
    fn cell_carries_class_fields() {
        let classes = [summary("Judo", 9, 10, &[Weekday::Mon])];
        let grid = generate_time_slots(&classes, &WeekdaySet::full_week(), &ColorScheme::default());

        let cell = &grid.row("09:00-10:00").unwrap().cells(Weekday::Mon).unwrap()[0];
        assert_eq!(cell.id, classes[0].id);
        assert_eq!(cell.name, "Judo");
        assert_eq!(cell.time, "09:00-10:00");
        assert_eq!(cell.place.as_deref(), Some("Dojo"));
        assert_eq!(cell.color, "red");
    }

    #[test]
    fn slots_sort_chronologically_not_by_insertion() {
        let classes = [
            summary("Evening", 18, 19, &[Weekday::Tue]),
            summary("Morning", 8, 9, &[Weekday::Tue]),
            summary("Late morning", 8, 10, &[Weekday::Tue]),
        ];
        let grid = generate_time_slots(&classes, &WeekdaySet::full_week(), &ColorScheme::default());

        assert_eq!(grid.slot_labels(), vec!["08:00-09:00", "08:00-10:00", "18:00-19:00"]);
    }

    #[test]
    fn classes_sharing_a_slot_share_a_row() {
        let classes = [
            summary("Judo", 9, 10, &[Weekday::Sun]),
            summary("Karate", 9, 10, &[Weekday::Sun, Weekday::Mon]),
        ];
        let grid = generate_time_slots(&classes, &WeekdaySet::full_week(), &ColorScheme::default());

        assert_eq!(grid.slot_count(), 1);
        let row = grid.row("09:00-10:00").unwrap();
        let names: Vec<_> = row.cells(Weekday::Sun).unwrap().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Judo", "Karate"]);
        assert_eq!(row.cells(Weekday::Mon).unwrap().len(), 1);
    }

    #[test]
    fn unrequested_days_are_left_out() {
        let classes = [summary("Judo", 9, 10, &[Weekday::Sat, Weekday::Mon])];
        let days: WeekdaySet = [Weekday::Mon, Weekday::Tue].into_iter().collect();
        let grid = generate_time_slots(&classes, &days, &ColorScheme::default());

        let row = grid.row("09:00-10:00").unwrap();
        assert_eq!(row.days().collect::<Vec<_>>(), vec![Weekday::Mon, Weekday::Tue]);
        assert!(row.cells(Weekday::Sat).is_none());
    }

    #[test]
    fn no_classes_means_empty_grid() {
        let grid = generate_time_slots(std::iter::empty(), &WeekdaySet::full_week(), &ColorScheme::default());
        assert!(grid.is_empty());
        assert_eq!(serde_json::to_string(&grid).unwrap(), "{}");
    }

    #[test]
    fn serializes_day_names_sunday_first() {
        let classes = [summary("Judo", 9, 10, &[Weekday::Sat, Weekday::Sun])];
        let grid = generate_time_slots(&classes, &WeekdaySet::full_week(), &ColorScheme::default());

        let json = serde_json::to_string(&grid).unwrap();
        let sunday = json.find("\"Sunday\"").unwrap();
        let monday = json.find("\"Monday\"").unwrap();
        let saturday = json.find("\"Saturday\"").unwrap();
        assert!(sunday < monday && monday < saturday);
    }

    #[test]
    fn per_class_colors_are_stable_across_days() {
        let classes = [summary("Judo", 9, 10, &[Weekday::Mon, Weekday::Thu])];
        let grid = generate_time_slots(&classes, &WeekdaySet::full_week(), &ColorScheme::per_class());

        let row = grid.row("09:00-10:00").unwrap();
        assert_eq!(
            row.cells(Weekday::Mon).unwrap()[0].color,
            row.cells(Weekday::Thu).unwrap()[0].color
        );
    }
}
