//! Application State
//!
//! Arc-wrapped state shared across handlers. Read-only after startup.

use std::{sync::Arc, time::Instant};

use crate::{client::ProfileClient, config::SiteConfig, provider::ProfileSource};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    config: SiteConfig,
    client: ProfileClient,
    source: ProfileSource,
    started_at: Instant,
}

impl AppState {
    /// Create a new `AppState` from the resolved configuration.
    pub fn new(config: SiteConfig) -> Self {
        let client = ProfileClient::new();
        let source = ProfileSource::from_upstream_url(config.company_api_url.as_deref(), client.clone());

        Self {
            inner: Arc::new(InnerState {
                config,
                client,
                source,
                started_at: Instant::now(),
            }),
        }
    }

    /// Get the site configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get the client the page handler uses to query the provider.
    pub fn client(&self) -> &ProfileClient {
        &self.inner.client
    }

    /// Get the provider's profile source.
    pub fn source(&self) -> &ProfileSource {
        &self.inner.source
    }

    /// Seconds since the state was created.
    pub fn uptime_seconds(&self) -> u64 {
        self.inner.started_at.elapsed().as_secs()
    }
}
