//! Class catalog: normalized summaries of one season's classes.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use crate::domain::class::ClassOffering;
use crate::domain::club::Teacher;
use crate::domain::foundation::{ClassId, WeekdaySet};

/// Formats a time of day as `HH:MM`.
pub fn format_hhmm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

fn serialize_hhmm<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_hhmm(*time))
}

/// Display record for one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassSummary {
    #[serde(rename = "ID")]
    pub id: ClassId,
    pub name: String,
    /// Teacher display name, if one is assigned.
    pub teacher: Option<String>,
    pub place: Option<String>,
    pub price: Decimal,
    pub registration_fee: Decimal,
    #[serde(serialize_with = "serialize_hhmm")]
    pub start_time: NaiveTime,
    #[serde(serialize_with = "serialize_hhmm")]
    pub end_time: NaiveTime,
    pub days: WeekdaySet,
}

impl ClassSummary {
    /// Builds a summary, resolving the teacher's display name when given.
    pub fn from_offering(class: &ClassOffering, teacher: Option<&Teacher>) -> Self {
        Self {
            id: *class.id(),
            name: class.name().to_string(),
            teacher: teacher.map(Teacher::display_name),
            place: class.place().map(str::to_string),
            price: class.price(),
            registration_fee: class.registration_fee(),
            start_time: class.start_time(),
            end_time: class.end_time(),
            days: class.days().clone(),
        }
    }
}

/// Summaries of a season's classes, keyed by class id.
///
/// Two classes may share a name; the id keeps them apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClassCatalog(BTreeMap<ClassId, ClassSummary>);

impl ClassCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, summary: ClassSummary) {
        self.0.insert(summary.id, summary);
    }

    pub fn get(&self, id: &ClassId) -> Option<&ClassSummary> {
        self.0.get(id)
    }

    pub fn contains(&self, id: &ClassId) -> bool {
        self.0.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Summaries ordered by start time, then name, then id.
    pub fn sorted(&self) -> Vec<&ClassSummary> {
        let mut summaries: Vec<_> = self.0.values().collect();
        summaries.sort_by(|a, b| {
            a.start_time
                .cmp(&b.start_time)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.id.cmp(&b.id))
        });
        summaries
    }
}

impl FromIterator<ClassSummary> for ClassCatalog {
    fn from_iter<T: IntoIterator<Item = ClassSummary>>(iter: T) -> Self {
        let mut catalog = ClassCatalog::new();
        for summary in iter {
            catalog.insert(summary);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Weekday;

    fn summary(name: &str, start: (u32, u32), end: (u32, u32), days: &[Weekday]) -> ClassSummary {
        ClassSummary {
            id: ClassId::new(),
            name: name.to_string(),
            teacher: Some("Yael Cohen".to_string()),
            place: Some("Hall A".to_string()),
            price: Decimal::new(12000, 2),
            registration_fee: Decimal::new(5000, 2),
            start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            days: days.iter().copied().collect(),
        }
    }

    #[test]
    fn serializes_times_as_hhmm() {
        let s = summary("Judo", (9, 5), (10, 0), &[Weekday::Mon]);
        let json = serde_json::to_value(&s).unwrap();

        assert_eq!(json["start_time"], "09:05");
        assert_eq!(json["end_time"], "10:00");
        assert_eq!(json["days"], serde_json::json!(["mon"]));
        assert_eq!(json["ID"], serde_json::json!(s.id));
    }

    #[test]
    fn same_name_classes_do_not_collide() {
        let catalog: ClassCatalog = [
            summary("Judo", (9, 0), (10, 0), &[Weekday::Mon]),
            summary("Judo", (17, 0), (18, 0), &[Weekday::Tue]),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn sorted_orders_by_start_then_name() {
        let catalog: ClassCatalog = [
            summary("Wrestling", (17, 0), (18, 0), &[Weekday::Mon]),
            summary("Karate", (9, 0), (10, 0), &[Weekday::Mon]),
            summary("Aikido", (9, 0), (10, 0), &[Weekday::Mon]),
        ]
        .into_iter()
        .collect();

        let names: Vec<_> = catalog.sorted().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Aikido", "Karate", "Wrestling"]);
    }
}
