use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use parking_control_api::{
    config::{Config, StorageBackend},
    constants::API_NAME,
    handlers,
    repository::{InMemoryParkingSpotRepository, ParkingSpotRepository, PgParkingSpotRepository},
    service::ParkingSpotService,
};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("{} Starting Parking Control API on port {}", API_NAME, config.server_port);

    let repository: Arc<dyn ParkingSpotRepository> = match config.storage {
        StorageBackend::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(&config.database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("{} Connected to database", API_NAME);

            let repository = PgParkingSpotRepository::new(pool);
            repository
                .migrate()
                .await
                .context("Failed to run database migrations")?;
            Arc::new(repository)
        }
        StorageBackend::Memory => {
            tracing::warn!("{} Using in-memory storage, data will not survive a restart", API_NAME);
            Arc::new(InMemoryParkingSpotRepository::new())
        }
    };

    let app = handlers::app(ParkingSpotService::new(repository));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("{} Server listening on {}", API_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
