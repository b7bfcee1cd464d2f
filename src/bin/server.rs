//! Celestial catalog HTTP server binary.
//!
//! This is the main entry point for the catalog REST API server. It seeds
//! the catalog, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin catalog-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use astro_catalog::catalog;
use astro_catalog::config::ServerConfig;
use astro_catalog::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting celestial catalog server");

    // Seed the global catalog once and reuse it across the app
    catalog::init_catalog()?;
    let catalog = std::sync::Arc::clone(catalog::get_catalog()?);
    info!(
        planets = catalog.planets().len(),
        stars = catalog.stars().len(),
        "Catalog seeded"
    );

    // Create application state
    let state = AppState::new(catalog);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let config = ServerConfig::from_env().map_err(anyhow::Error::msg)?;
    let addr = config.socket_addr().map_err(anyhow::Error::msg)?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
