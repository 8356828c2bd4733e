//! Profile Client
//!
//! Uncached HTTP queries for profile records. Used by the page handler to
//! reach the provider and by the provider to reach an upstream source.

use axum::http::header;

use crate::{
    error::{SiteError, SiteResult},
    profile::CompanyProfile,
};

/// HTTP client for profile queries.
///
/// No retries and no timeout beyond the transport defaults.
#[derive(Clone, Debug, Default)]
pub struct ProfileClient {
    http: reqwest::Client,
}

impl ProfileClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches and decodes the profile at `url`.
    pub async fn fetch(&self, url: &str) -> SiteResult<CompanyProfile> {
        tracing::debug!(url, "fetching company profile");

        let response = self
            .http
            .get(url)
            .header(header::CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|source| SiteError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SiteError::Upstream {
                url: url.to_string(),
                status,
            });
        }

        response.json::<CompanyProfile>().await.map_err(|source| SiteError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
