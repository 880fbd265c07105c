//! HTTP server: router, page cache, and process startup helpers.

pub mod cache;
pub mod router;

pub use cache::PageCache;
pub use router::{AppState, DEFAULT_LISTING_PATH, router};

use anyhow::Result;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Install a `tracing` subscriber reading `RUST_LOG`, defaulting to `info`.
///
/// Call once at process startup, before serving.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Bind and serve the invoice routes until the process is stopped.
pub async fn serve(addr: &str, state: AppState) -> Result<()> {
    let app = router(state);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
