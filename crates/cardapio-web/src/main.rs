//! Web server for the cardapio admin dashboard
#![forbid(unsafe_code)]

use cardapio_web::build_app;
use std::net::{IpAddr, SocketAddr};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Get configuration first so the logging section can shape the subscriber
    let (config, config_error) = match cardapio_core::Config::load() {
        Ok(config) => (config, None),
        Err(e) => (cardapio_core::Config::default(), Some(e)),
    };

    // Initialize tracing
    cardapio_core::init_logging(&config.logging)?;

    if let Some(e) = config_error {
        warn!("Failed to load config: {}, using defaults", e);
    }

    // Build the application with configuration
    let app = build_app(config.clone());

    // Use configuration for web server address
    let host: IpAddr = config
        .webserver
        .host
        .parse()
        .map_err(|e| format!("Invalid web server host '{}': {}", config.webserver.host, e))?;
    let addr = SocketAddr::new(host, config.webserver.port);

    info!("Starting cardapio web server on {}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
