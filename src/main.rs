//! BotLaHug server entry point.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use botlahug::adapters::auth::JwtSessionValidator;
use botlahug::adapters::http::{api_router, with_server_layers, ClubAppState};
use botlahug::adapters::memory::InMemoryClubStore;
use botlahug::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_filter));
    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }

    config.validate()?;

    let state = match &config.database {
        Some(database) => {
            let pool = database.connect().await?;
            if database.run_migrations {
                sqlx::migrate!("./migrations").run(&pool).await?;
                tracing::info!("migrations applied");
            }
            ClubAppState::postgres(pool)
        }
        None => {
            tracing::warn!("no database configured, using in-memory store");
            ClubAppState::in_memory(InMemoryClubStore::new())
        }
    }
    .with_colors(config.schedule.color_scheme())
    .with_title_policy(config.schedule.title_policy());

    let validator = Arc::new(JwtSessionValidator::new(config.auth.jwt_config()));
    let app = with_server_layers(api_router(state, validator), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "BotLaHug listening");

    axum::serve(listener, app).await?;
    Ok(())
}
