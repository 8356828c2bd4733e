//! Link Page Site Library
//!
//! A link-in-bio landing page for a business, rendered from a company
//! profile record, plus the read-only endpoint serving that record.

pub mod client;
pub mod config;
pub mod defaults;
pub mod error;
pub mod handlers;
pub mod origin;
pub mod profile;
pub mod provider;
pub mod router;
pub mod state;
pub mod templates;

use tokio::net::TcpListener;
use tracing::info;

use crate::{
    config::SiteConfig,
    error::{SiteError, SiteResult},
    router::create_router,
    state::AppState,
};

/// Run the site server until Ctrl-C.
pub async fn run(config: SiteConfig) -> SiteResult<()> {
    let addr = config.bind_addr;
    match config.base_url.as_deref() {
        Some(base) => info!(base, "using configured base address"),
        None => info!("inferring base address from request headers"),
    }

    let app = create_router(AppState::new(config));

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| SiteError::BindFailed { addr, source })?;

    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install CTRL+C signal handler");
        std::future::pending::<()>().await;
    }
    info!("Shutting down gracefully...");
}
