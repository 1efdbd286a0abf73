//! Hemocast HTTP Server Binary
//!
//! This is the main entry point for the hemocast REST API server.
//! It loads the forecast model artifacts, sets up the HTTP router, and
//! starts serving requests. A model load failure is fatal: the server
//! refuses to start rather than run against a partial model set.
//!
//! # Usage
//!
//! ```bash
//! # Artifacts in ./models (default)
//! cargo run --bin hemocast-server
//!
//! # Artifacts elsewhere
//! HEMOCAST_MODEL_DIR=/srv/hemocast/artifacts cargo run --bin hemocast-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `HEMOCAST_CONFIG`: Optional TOML config file with artifact locations
//! - `HEMOCAST_MODEL_DIR` / `HEMOCAST_SUPPLY_MODELS` / `HEMOCAST_DEMAND_MODELS`
//!   / `HEMOCAST_AVAILABILITY_MODELS`: artifact location overrides
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::path::Path;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use hemocast::http::{create_router, AppState};
use hemocast::store::{self, StoreConfig};

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
        .init();

    info!("Starting hemocast HTTP server");

    // Artifact locations: config file when given, environment otherwise
    let config = match env::var("HEMOCAST_CONFIG") {
        Ok(path) => StoreConfig::from_file(Path::new(&path))?,
        Err(_) => StoreConfig::from_env(),
    };

    // Load the model set once; a failure here is fatal for the dashboard
    store::init_models(&config)?;
    let models = std::sync::Arc::clone(store::get_models()?);
    info!(
        "model set loaded: {} supply, {} demand, {} availability",
        models.supply.len(),
        models.demand.len(),
        models.availability.len()
    );

    // Create application state
    let state = AppState::new(models);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
