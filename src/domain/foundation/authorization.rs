//! Authorization support types and guard functions.
//!
//! Gated operations follow one pattern:
//! 1. Resolve the user's role for the club being acted on
//! 2. Check the role grants the requested capability
//! 3. Return `Forbidden` with structured details when it does not

use super::{AuthenticatedUser, Capability, ClubId, DomainError, ErrorCode};

/// Result of an authorization check.
///
/// Contains both the decision and context for logging/auditing.
#[derive(Debug, Clone)]
pub struct AuthorizationResult {
    /// Whether access was granted.
    pub granted: bool,

    /// The capability that was requested.
    pub capability: Capability,

    /// The club the capability was requested in.
    pub club_id: String,

    /// The user who requested access.
    pub user_id: String,

    /// Reason for denial (if denied).
    pub denial_reason: Option<String>,
}

impl AuthorizationResult {
    /// Creates a successful authorization result.
    pub fn granted(
        capability: Capability,
        club_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            granted: true,
            capability,
            club_id: club_id.into(),
            user_id: user_id.into(),
            denial_reason: None,
        }
    }

    /// Creates a denied authorization result.
    pub fn denied(
        capability: Capability,
        club_id: impl Into<String>,
        user_id: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            granted: false,
            capability,
            club_id: club_id.into(),
            user_id: user_id.into(),
            denial_reason: Some(reason.into()),
        }
    }

    /// Converts this result to a `Result<(), DomainError>`.
    ///
    /// Returns `Ok(())` if granted, `Err(Forbidden)` if denied. Details
    /// name the capability but never the resource contents.
    pub fn into_result(self) -> Result<(), DomainError> {
        if self.granted {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::Forbidden,
                self.denial_reason
                    .unwrap_or_else(|| "Access denied".to_string()),
            )
            .with_detail("capability", self.capability.to_string())
            .with_detail("club_id", self.club_id))
        }
    }

    pub fn is_granted(&self) -> bool {
        self.granted
    }
}

/// Checks whether `user` holds `capability` in `club_id`.
pub fn authorize(
    user: &AuthenticatedUser,
    club_id: &ClubId,
    capability: Capability,
) -> AuthorizationResult {
    let role = user.role_in(club_id);
    if role.can(capability) {
        AuthorizationResult::granted(capability, club_id.to_string(), user.id.to_string())
    } else {
        AuthorizationResult::denied(
            capability,
            club_id.to_string(),
            user.id.to_string(),
            format!("Role '{}' cannot {} in this club", role, capability),
        )
    }
}

/// Guard used at the top of every gated handler.
pub fn require_capability(
    user: &AuthenticatedUser,
    club_id: &ClubId,
    capability: Capability,
) -> Result<(), DomainError> {
    authorize(user, club_id, capability).into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Role, UserId};

    fn user_with(club: ClubId, role: Role) -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new("user-1").unwrap(), "u@example.com", None)
            .with_club_role(club, role)
    }

    #[test]
    fn manager_is_granted_class_management() {
        let club = ClubId::new();
        let result = authorize(&user_with(club, Role::Manager), &club, Capability::ManageClasses);

        assert!(result.is_granted());
        assert!(result.denial_reason.is_none());
    }

    #[test]
    fn teacher_is_denied_class_management() {
        let club = ClubId::new();
        let err = require_capability(&user_with(club, Role::Teacher), &club, Capability::ManageClasses)
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::Forbidden);
        assert_eq!(err.details.get("capability"), Some(&"manage_classes".to_string()));
    }

    #[test]
    fn manager_of_another_club_is_denied() {
        let own = ClubId::new();
        let other = ClubId::new();
        let result = authorize(&user_with(own, Role::Manager), &other, Capability::ManageSeasons);

        assert!(!result.is_granted());
        assert!(result.denial_reason.unwrap().contains("client"));
    }

    #[test]
    fn teacher_may_view_roster() {
        let club = ClubId::new();
        assert!(require_capability(&user_with(club, Role::Teacher), &club, Capability::ViewRoster).is_ok());
    }
}
