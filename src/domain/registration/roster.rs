//! Class roster entries derived from registrations.

use serde::Serialize;

use crate::domain::athlete::Athlete;

use super::{Registration, RegistrationStatus};

/// Shown when an athlete has no description.
pub const NO_DESCRIPTION: &str = "No description available";

/// One line of a class roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub name: String,
    /// `YYYY-MM-DD`.
    pub dob: String,
    /// Year the registration was created.
    pub year_joined: i32,
    pub description: String,
    pub status: RegistrationStatus,
}

impl RosterEntry {
    pub fn new(athlete: &Athlete, registration: &Registration) -> Self {
        Self {
            name: athlete.full_name(),
            dob: athlete.dob().format("%Y-%m-%d").to_string(),
            year_joined: registration.created_at().year(),
            description: athlete
                .description()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or(NO_DESCRIPTION)
                .to_string(),
            status: registration.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::athlete::AthleteProfile;
    use crate::domain::foundation::{AthleteId, ClassId, ClubId, RegistrationId};
    use chrono::NaiveDate;

    fn athlete(description: Option<&str>) -> Athlete {
        let profile = AthleteProfile {
            first_name: "Noa".into(),
            last_name: "Levi".into(),
            dob: NaiveDate::from_ymd_opt(2012, 3, 4),
            email: "noa@example.com".into(),
            ..Default::default()
        };
        Athlete::new(AthleteId::new(), ClubId::new(), profile, description.map(String::from)).unwrap()
    }

    #[test]
    fn roster_entry_formats_athlete() {
        let athlete = athlete(Some("Brown belt"));
        let reg = Registration::new(RegistrationId::new(), *athlete.id(), ClassId::new(), "x");

        let entry = RosterEntry::new(&athlete, &reg);
        assert_eq!(entry.name, "Noa Levi");
        assert_eq!(entry.dob, "2012-03-04");
        assert_eq!(entry.year_joined, reg.created_at().year());
        assert_eq!(entry.description, "Brown belt");
    }

    #[test]
    fn missing_description_falls_back() {
        let athlete = athlete(None);
        let reg = Registration::new(RegistrationId::new(), *athlete.id(), ClassId::new(), "x");

        assert_eq!(RosterEntry::new(&athlete, &reg).description, NO_DESCRIPTION);
    }
}
