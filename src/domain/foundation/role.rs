//! Club roles and the capabilities they grant.
//!
//! A role is resolved once per authenticated request from the identity
//! token. Gated operations ask for a `Capability`, never for a role name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Role a user holds within one club.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Runs the club: seasons, classes, registrations.
    Manager,
    /// Coaches classes and can see who attends them.
    Teacher,
    /// Athlete or parent with no back-office access.
    #[default]
    Client,
}

/// Gated operation a role may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ManageSeasons,
    ManageClasses,
    ManageRegistrations,
    ViewAthletes,
    ViewRoster,
}

impl Role {
    /// Capabilities granted to this role.
    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            Role::Manager => &[
                Capability::ManageSeasons,
                Capability::ManageClasses,
                Capability::ManageRegistrations,
                Capability::ViewAthletes,
                Capability::ViewRoster,
            ],
            Role::Teacher => &[Capability::ViewAthletes, Capability::ViewRoster],
            Role::Client => &[],
        }
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Manager => "manager",
            Role::Teacher => "teacher",
            Role::Client => "client",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manager" => Ok(Role::Manager),
            "teacher" => Ok(Role::Teacher),
            "client" => Ok(Role::Client),
            other => Err(ValidationError::invalid_format(
                "role",
                format!("unknown role '{}'", other),
            )),
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Capability::ManageSeasons => "manage_seasons",
            Capability::ManageClasses => "manage_classes",
            Capability::ManageRegistrations => "manage_registrations",
            Capability::ViewAthletes => "view_athletes",
            Capability::ViewRoster => "view_roster",
        };
        write!(f, "{}", s)
    }
}
