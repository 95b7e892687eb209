//! shinydex API server.
//!
//! Serves the five showcase data sources as JSON over parameterless GET
//! endpoints. Every request re-fetches its source from the published
//! spreadsheet; there is no cache and no write path.

mod routes;

use std::io;

use anyhow::Result;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use shinydex_core::{SheetClient, SourceUrls};

// ============================================================================
// Constants
// ============================================================================

/// Environment variable for the listen address.
const ADDR_ENV: &str = "SHINYDEX_ADDR";

/// Default listen address when `SHINYDEX_ADDR` is unset.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Set up logging with environment-based filter
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let client = SheetClient::new(SourceUrls::from_env())?;

    // The static frontend lives elsewhere, so CORS stays permissive.
    let app = routes::router(client).layer(CorsLayer::permissive());

    let addr = std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "shinydex server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
