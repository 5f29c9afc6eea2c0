//! open-hours HTTP server.
//!
//! Loads the restaurant catalog into an in-memory repository and serves the
//! search API.
//!
//! # Usage
//!
//! ```bash
//! CATALOG_CSV=data/restaurants.csv cargo run --bin open-hours-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `CATALOG_CSV`: `name,hours` CSV loaded at startup
//! - `RUST_LOG`: Log filter directives (default: info)
//!
//! Values from `open-hours.toml` are used when the variables are unset.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use open_hours::db::{self, LocalRepository, RestaurantRepository, ServiceConfig};
use open_hours::http::{create_router, AppState};

/// `RUST_LOG` directives such as `info` or `open_hours=debug,tower_http=info`.
/// Missing or unparseable directives fall back to `info`.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok().as_deref()))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting open-hours server");

    let config = ServiceConfig::from_default_location()
        .and_then(ServiceConfig::with_env_overrides)
        .context("Failed to load configuration")?;

    let repository = LocalRepository::new();
    match &config.catalog.csv_path {
        Some(path) => {
            let imported = db::import_catalog(&repository, path, config.catalog.has_header).await?;
            info!("Catalog ready with {} restaurants", imported);
        }
        None => warn!("No catalog configured; starting with an empty repository"),
    }

    let state = AppState::new(Arc::new(repository) as Arc<dyn RestaurantRepository>);
    let app = create_router(state);

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.bind_address()))?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
