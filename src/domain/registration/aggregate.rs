//! Registration aggregate linking one athlete to one class.

use crate::domain::foundation::{
    AthleteId, ClassId, DomainError, ErrorCode, RegistrationId, StateMachine, Timestamp,
};
use serde::{Deserialize, Serialize};

use super::RegistrationStatus;

/// Description stamped on registrations made for an existing athlete.
pub const EXISTING_ATHLETE_DESCRIPTION: &str = "Form auto created registration";

/// Description stamped on an athlete created through the new-athlete form.
pub fn new_athlete_description(club_name: &str, season_label: &str, class_name: &str) -> String {
    format!(
        "{} athlete, joined the club in the {} season, trains in {} class",
        club_name, season_label, class_name
    )
}

/// An athlete's registration in a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    id: RegistrationId,
    athlete_id: AthleteId,
    class_id: ClassId,
    status: RegistrationStatus,
    description: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Registration {
    /// Creates a form-submitted registration. Status is always `New`.
    pub fn new(
        id: RegistrationId,
        athlete_id: AthleteId,
        class_id: ClassId,
        description: impl Into<String>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            athlete_id,
            class_id,
            status: RegistrationStatus::New,
            description: Some(description.into()),
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute a registration from persistence.
    pub fn reconstitute(
        id: RegistrationId,
        athlete_id: AthleteId,
        class_id: ClassId,
        status: RegistrationStatus,
        description: Option<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            athlete_id,
            class_id,
            status,
            description,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &RegistrationId {
        &self.id
    }

    pub fn athlete_id(&self) -> &AthleteId {
        &self.athlete_id
    }

    pub fn class_id(&self) -> &ClassId {
        &self.class_id
    }

    pub fn status(&self) -> RegistrationStatus {
        self.status
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Moves the registration to `target`, returning the previous status.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` when `target` is `New` or the current status
    pub fn change_status(&mut self, target: RegistrationStatus) -> Result<RegistrationStatus, DomainError> {
        let next = self.status.transition_to(target).map_err(|e| {
            DomainError::new(ErrorCode::InvalidStateTransition, e.to_string())
                .with_detail("from", self.status.as_str())
                .with_detail("to", target.as_str())
        })?;
        let previous = std::mem::replace(&mut self.status, next);
        self.updated_at = Timestamp::now();
        Ok(previous)
    }
}
