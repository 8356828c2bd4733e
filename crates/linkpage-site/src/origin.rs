//! Origin Resolution
//!
//! The page handler queries the provider over HTTP and needs an absolute
//! base address to do so. Resolution order: the configured base address,
//! then the forwarded/host request headers, then [`FALLBACK_ORIGIN`].

use axum::http::HeaderMap;

use crate::config::FALLBACK_ORIGIN;

/// Path of the provider endpoint, relative to the origin.
pub const COMPANY_PATH: &str = "/api/open/data/company";

const FORWARDED_PROTO: &str = "x-forwarded-proto";
const FORWARDED_HOST: &str = "x-forwarded-host";

/// Resolves the effective origin of the current request.
///
/// `configured` must already be normalized (see
/// [`normalize_base_url`](crate::config::normalize_base_url)).
pub fn resolve_origin(configured: Option<&str>, headers: &HeaderMap) -> String {
    if let Some(base) = configured {
        return base.to_string();
    }

    let host = header_str(headers, FORWARDED_HOST).or_else(|| header_str(headers, "host"));
    match host {
        Some(host) => {
            let proto = header_str(headers, FORWARDED_PROTO).unwrap_or("http");
            format!("{proto}://{host}")
        }
        None => FALLBACK_ORIGIN.to_string(),
    }
}

/// Builds the provider URL for an origin.
pub fn company_url(origin: &str) -> String {
    format!("{origin}{COMPANY_PATH}")
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
}
