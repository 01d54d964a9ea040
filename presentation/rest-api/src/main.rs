use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Shop cart REST API entry point
///
/// Layout:
/// - config/: environment-driven configuration (server, CORS, database, token secret)
/// - setup/: dependency wiring and HTTP server
/// - api/: route handlers, DTOs and the token reader
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env()?;
    let pool = database_config::init_database().await?;
    let container = DependencyContainer::new(pool, &config.token);

    Server::run(config.server, config.cors, container).await?;

    Ok(())
}
