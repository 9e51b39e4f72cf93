//! HS256 JWT adapter for the `SessionValidator` port.
//!
//! Tokens are signed with a shared secret by the club's identity service.
//! Besides the standard claims they carry the caller's club and role:
//!
//! ```json
//! { "sub": "u-1", "email": "dana@example.com", "club_id": "…", "role": "manager",
//!   "iss": "botlahug-auth", "aud": "botlahug-api", "exp": 1735689600 }
//! ```
//!
//! Issuer, audience and expiry are always validated.

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::{AuthError, AuthenticatedUser, ClubId, Role, UserId};
use crate::ports::SessionValidator;

/// Settings for [`JwtSessionValidator`].
#[derive(Debug)]
pub struct JwtConfig {
    pub secret: Secret<String>,
    pub issuer: String,
    pub audience: String,
}

impl JwtConfig {
    pub fn new(
        secret: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self {
            secret: Secret::new(secret.into()),
            issuer: issuer.into(),
            audience: audience.into(),
        }
    }
}

/// Claims carried by club access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubClaims {
    pub sub: String,
    pub iss: String,
    pub aud: String,
    pub exp: i64,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub club_id: Option<Uuid>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Validates HS256 tokens issued for this API.
pub struct JwtSessionValidator {
    config: JwtConfig,
    key: DecodingKey,
    validation: Validation,
}

impl JwtSessionValidator {
    pub fn new(config: JwtConfig) -> Self {
        let key = DecodingKey::from_secret(config.secret.expose_secret().as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        Self {
            config,
            key,
            validation,
        }
    }

    fn claims_to_user(claims: ClubClaims) -> Result<AuthenticatedUser, AuthError> {
        let user_id = UserId::new(claims.sub.as_str()).map_err(|_| {
            tracing::warn!("Token has empty subject");
            AuthError::InvalidToken
        })?;
        let user = AuthenticatedUser::new(user_id, claims.email, claims.name);

        match (claims.club_id, claims.role) {
            (Some(club_id), Some(role)) => {
                // Unknown roles degrade to client rather than rejecting the token
                let role = role.parse::<Role>().unwrap_or_else(|_| {
                    tracing::warn!(role = %role, "Unknown role claim");
                    Role::Client
                });
                Ok(user.with_club_role(ClubId::from_uuid(club_id), role))
            }
            _ => Ok(user),
        }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<ClubClaims>(token, &self.key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience => {
                    tracing::warn!("Token issued for another service: {}", e);
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::debug!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            }
        })?;

        Self::claims_to_user(data.claims)
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("issuer", &self.config.issuer)
            .field("audience", &self.config.audience)
            .finish_non_exhaustive()
    }
}
