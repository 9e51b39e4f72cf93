//! Mock session validator for testing.
//!
//! Maps fixed bearer tokens to users so HTTP tests can act as a club
//! manager, teacher or plain visitor without minting real tokens.
//!
//! # Example
//!
//! ```ignore
//! use botlahug::adapters::auth::MockSessionValidator;
//! use botlahug::domain::foundation::{ClubId, Role, UserId};
//!
//! let club_id = ClubId::new();
//! let manager = UserId::new("manager-1")?;
//! let validator = MockSessionValidator::new()
//!     .with_club_user("manager-token", manager, club_id, Role::Manager);
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, ClubId, Role, UserId};
use crate::ports::SessionValidator;

/// Mock session validator for testing.
///
/// Stores a map of tokens to users. Tokens not in the map return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    /// Returned for every validation when set
    force_error: RwLock<Option<AuthError>>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        if let Ok(mut tokens) = self.tokens.write() {
            tokens.insert(token.into(), user);
        }
        self
    }

    /// Adds a token for a user holding `role` in `club_id`.
    pub fn with_club_user(
        self,
        token: impl Into<String>,
        user_id: UserId,
        club_id: ClubId,
        role: Role,
    ) -> Self {
        let user = test_user(user_id).with_club_role(club_id, role);
        self.with_user(token, user)
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        if let Ok(mut slot) = self.force_error.write() {
            *slot = Some(error);
        }
        self
    }
}

fn test_user(user_id: UserId) -> AuthenticatedUser {
    let email = format!("{}@test.example.com", user_id);
    let name = format!("Test User {}", user_id);
    AuthenticatedUser::new(user_id, email, Some(name))
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let forced = self
            .force_error
            .read()
            .map_err(|_| AuthError::service_unavailable("mock validator poisoned"))?
            .clone();
        if let Some(error) = forced {
            return Err(error);
        }

        self.tokens
            .read()
            .map_err(|_| AuthError::service_unavailable("mock validator poisoned"))?
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
