//! Folio page server: renders the portfolio page from a profile document and
//! serves the page-behavior script bundle.

mod config;
mod handlers;
mod render;
mod routes;
mod state;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Default to info-level logs; override via RUST_LOG if needed.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = config::ServerConfig::from_env()?;
    tracing::info!("Starting Folio page server");
    tracing::info!("Profile: {}", config.profile_path.display());
    tracing::info!("Static directory: {}", config.static_dir.display());

    // The page re-reads the profile per request; this only surfaces problems early.
    match folio_shared::load_profile(&config.profile_path) {
        Ok(profile) => tracing::info!("Loaded profile with {} projects", profile.projects.len()),
        Err(e) => tracing::warn!("Profile is not servable yet: {}", e),
    }

    let app = routes::create_router(state::AppState::new(&config));

    let addr = config.listen_addr();
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
