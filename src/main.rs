use anyhow::Context;

use propertyplus_bot::api::{self, AppState, api_routes};
use propertyplus_bot::config::ServerConfig;
use propertyplus_bot::error::Result;
use propertyplus_bot::listings::ListingStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    run().await.context("PropertyPlus bot exited with an error")
}

async fn run() -> Result<()> {
    let config = ServerConfig::from_env()?;
    let store = ListingStore::seeded();

    eprintln!("🏠 PropertyPlus bot v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Listings: {}", store.all().len());
    eprintln!("   Health:   http://0.0.0.0:{}/health", config.port);
    eprintln!("   Browse:   http://0.0.0.0:{}/properties", config.port);
    eprintln!("   Chat:     POST http://0.0.0.0:{}/message\n", config.port);

    let app = api_routes(AppState::new(store));
    api::serve(&config, app).await?;

    Ok(())
}
