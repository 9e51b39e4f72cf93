//! RegistrationStatus enum for tracking an athlete's place in a class.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{StateMachine, ValidationError};

/// Status of a registration.
///
/// Form-driven creation always produces `New`. The stored default for rows
/// written without an explicit status is `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    /// Submitted through a registration form, not yet reviewed.
    New,
    #[default]
    Active,
    Inactive,
    Completed,
    Dropped,
}

impl RegistrationStatus {
    pub const ALL: [RegistrationStatus; 5] = [
        RegistrationStatus::New,
        RegistrationStatus::Active,
        RegistrationStatus::Inactive,
        RegistrationStatus::Completed,
        RegistrationStatus::Dropped,
    ];

    /// Storage value.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::New => "new",
            RegistrationStatus::Active => "active",
            RegistrationStatus::Inactive => "inactive",
            RegistrationStatus::Completed => "completed",
            RegistrationStatus::Dropped => "dropped",
        }
    }
}

/// Staff may move a registration to any other status except back to `New`.
impl StateMachine for RegistrationStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        *target != RegistrationStatus::New && target != self
    }

    fn valid_transitions(&self) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|target| self.can_transition_to(target))
            .collect()
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RegistrationStatus::New => "New",
            RegistrationStatus::Active => "Active",
            RegistrationStatus::Inactive => "Inactive",
            RegistrationStatus::Completed => "Completed",
            RegistrationStatus::Dropped => "Dropped",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for RegistrationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                ValidationError::invalid_format("status", format!("unknown status '{}'", s))
            })
    }
}
