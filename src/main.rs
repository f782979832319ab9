//! INVALSER API server.

use std::sync::Arc;

use invalser::adapters::{
    app_router, AppDependencies, FixedLocationDetector, NoLocationDetector, StaticProviderReader,
};
use invalser::bootstrap::configure_environment;
use invalser::config::AppConfig;
use invalser::ports::LocationDetector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    configure_environment(&config.server);

    let reader = StaticProviderReader::new();
    tracing::info!(providers = reader.len(), "Provider catalog loaded");

    let detector: Arc<dyn LocationDetector> = match config
        .booking
        .default_city
        .as_deref()
        .and_then(FixedLocationDetector::from_name)
    {
        Some(detector) => Arc::new(detector),
        None => Arc::new(NoLocationDetector),
    };

    let deps = AppDependencies {
        reader: Arc::new(reader),
        detector,
        settings: config.booking.settings(),
    };
    let app = app_router(deps, &config.server);

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, environment = ?config.server.environment, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
