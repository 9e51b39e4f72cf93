//! Authentication types for the domain layer.
//!
//! These types represent an authenticated user extracted from a bearer token.
//! Any identity provider can populate them through the `SessionValidator` port.

use super::{ClubId, Role, UserId};
use thiserror::Error;

/// Authenticated user extracted from a validated token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the auth provider.
    pub id: UserId,

    /// User's email address from the token claims.
    pub email: String,

    /// Display name if available.
    pub display_name: Option<String>,

    /// Club the role below applies to. `None` for users without a club.
    pub club_id: Option<ClubId>,

    /// Role held within `club_id`.
    pub role: Role,
}

impl AuthenticatedUser {
    /// Creates a user with no club role.
    pub fn new(id: UserId, email: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            id,
            email: email.into(),
            display_name,
            club_id: None,
            role: Role::Client,
        }
    }

    /// Grants `role` within `club_id`.
    pub fn with_club_role(mut self, club_id: ClubId, role: Role) -> Self {
        self.club_id = Some(club_id);
        self.role = role;
        self
    }

    /// Role this user holds in the given club. Users from other clubs are clients.
    pub fn role_in(&self, club_id: &ClubId) -> Role {
        match self.club_id {
            Some(own) if own == *club_id => self.role,
            _ => Role::Client,
        }
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    /// The authentication service is unavailable (network, config, etc.).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this error indicates the user should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}
