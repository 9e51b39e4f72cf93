//! PostgreSQL settings

use serde::Deserialize;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound on the connection pool.
pub const MAX_POOL_SIZE: u32 = 100;

/// Connection settings for the club database.
///
/// Present only when the service should persist to PostgreSQL.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// `postgres://` or `postgresql://` URL.
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Seconds to wait for a free connection.
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Apply `migrations/` before serving.
    #[serde(default)]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub async fn connect(&self) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .connect(&self.url)
            .await
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE__URL"));
        }
        if !["postgres://", "postgresql://"].iter().any(|scheme| self.url.starts_with(scheme)) {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if !(1..=MAX_POOL_SIZE).contains(&self.max_connections) {
            return Err(ValidationError::PoolSize(self.max_connections, MAX_POOL_SIZE));
        }
        Ok(())
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> DatabaseConfig {
        serde_json::from_value(serde_json::json!({ "url": url })).unwrap()
    }

    #[test]
    fn only_url_is_required() {
        let config = config("postgresql://club@localhost/botlahug");

        assert_eq!(config.max_connections, 10);
        assert_eq!(config.acquire_timeout_secs, 5);
        assert!(!config.run_migrations);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn url_must_be_postgres() {
        assert!(matches!(config("").validate(), Err(ValidationError::MissingRequired(_))));
        assert!(matches!(
            config("mysql://localhost/botlahug").validate(),
            Err(ValidationError::InvalidDatabaseUrl)
        ));
    }

    #[test]
    fn pool_size_is_bounded() {
        for size in [0, MAX_POOL_SIZE + 1] {
            let config = DatabaseConfig {
                max_connections: size,
                ..config("postgres://localhost/botlahug")
            };
            assert!(matches!(config.validate(), Err(ValidationError::PoolSize(..))));
        }
    }
}
