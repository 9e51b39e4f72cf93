//! Authentication configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;
use crate::adapters::auth::JwtConfig;

/// Shortest HS256 secret accepted outside development.
pub const MIN_SECRET_BYTES: usize = 32;

/// Bearer-token settings (HS256 JWT)
#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    /// Shared signing secret
    pub jwt_secret: Secret<String>,

    /// Expected `iss` claim
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// Expected `aud` claim
    #[serde(default = "default_audience")]
    pub audience: String,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// Any non-empty secret is accepted in development. Production
    /// requires at least [`MIN_SECRET_BYTES`].
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if *environment != Environment::Development && secret.len() < MIN_SECRET_BYTES {
            return Err(ValidationError::SecretTooShort(MIN_SECRET_BYTES));
        }
        if self.issuer.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__ISSUER"));
        }
        if self.audience.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__AUDIENCE"));
        }
        Ok(())
    }

    /// Settings for the JWT session validator.
    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig::new(
            self.jwt_secret.expose_secret().clone(),
            self.issuer.clone(),
            self.audience.clone(),
        )
    }
}

fn default_issuer() -> String {
    "botlahug-auth".to_string()
}

fn default_audience() -> String {
    "botlahug-api".to_string()
}
