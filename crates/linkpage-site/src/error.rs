//! Site error types.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Result type for site operations.
pub type SiteResult<T> = Result<T, SiteError>;

/// Errors that can occur while serving the site.
#[derive(Debug, Error)]
pub enum SiteError {
    /// The profile request could not be sent or completed.
    #[error("profile fetch from {url} failed: {source}")]
    Fetch {
        url: String,
        source: reqwest::Error,
    },

    /// The profile response was not a valid profile record.
    #[error("profile response from {url} is not a valid profile: {source}")]
    Decode {
        url: String,
        source: reqwest::Error,
    },

    /// The profile source answered with a non-success status.
    #[error("profile source {url} answered {status}")]
    Upstream { url: String, status: StatusCode },

    /// Bind failed.
    #[error("failed to bind to {addr}: {source}")]
    BindFailed {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    /// I/O error.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl SiteError {
    /// Returns true if the error came from talking to a profile source.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Fetch { .. } | Self::Decode { .. } | Self::Upstream { .. })
    }
}

/// Page-route failures surface as a generic server error page.
impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "page render failed");

        let mut response = (StatusCode::INTERNAL_SERVER_ERROR, Html(ERROR_PAGE)).into_response();
        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
        response
    }
}

const ERROR_PAGE: &str = "<!DOCTYPE html>\
<html lang=\"en\"><head><meta charset=\"utf-8\"><title>Server error</title></head>\
<body><h1>500</h1><p>Internal Server Error</p></body></html>";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_is_classified_as_upstream() {
        let err = SiteError::Upstream {
            url: "http://localhost:3000/api/open/data/company".into(),
            status: StatusCode::NOT_FOUND,
        };
        assert!(err.is_upstream());
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn errors_render_as_generic_500() {
        let err = SiteError::Io(std::io::Error::other("boom"));
        assert!(!err.is_upstream());

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
    }
}
