//! Site configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Origin used when neither a configured base address nor request headers
/// yield one.
pub const FALLBACK_ORIGIN: &str = "http://localhost:3000";

/// Site configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Address to bind to.
    pub bind_addr: SocketAddr,
    /// Normalized absolute base address for the internal profile query.
    /// Always `http(s)://...` without a trailing slash when present.
    pub base_url: Option<String>,
    /// Directory of static assets served at the site root.
    pub public_dir: PathBuf,
    /// Upstream URL the provider fetches the profile from. When unset the
    /// provider serves the built-in profile.
    pub company_api_url: Option<String>,
}

impl SiteConfig {
    /// Sets the base address override.
    ///
    /// Values that are not absolute `http://` or `https://` addresses are
    /// ignored and origin inference stays in effect.
    #[must_use]
    pub fn with_base_url(mut self, raw: &str) -> Self {
        self.base_url = normalize_base_url(raw);
        if self.base_url.is_none() {
            tracing::warn!(base_url = raw, "ignoring malformed base address");
        }
        self
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            base_url: None,
            public_dir: PathBuf::from("public"),
            company_api_url: None,
        }
    }
}

/// Normalizes a configured base address.
///
/// Trims whitespace, requires an `http://` or `https://` scheme (any case)
/// and strips one trailing slash. Returns `None` for anything else.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();
    if !(lower.starts_with("http://") || lower.starts_with("https://")) {
        return None;
    }
    Some(trimmed.strip_suffix('/').unwrap_or(trimmed).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        assert_eq!(
            normalize_base_url("https://example.com/").as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn only_one_trailing_slash_is_stripped() {
        assert_eq!(
            normalize_base_url("https://example.com//").as_deref(),
            Some("https://example.com/")
        );
    }

    #[test]
    fn scheme_check_is_case_insensitive_and_trims() {
        assert_eq!(
            normalize_base_url("  HTTP://Example.com  ").as_deref(),
            Some("HTTP://Example.com")
        );
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert_eq!(normalize_base_url(""), None);
        assert_eq!(normalize_base_url("   "), None);
        assert_eq!(normalize_base_url("example.com"), None);
        assert_eq!(normalize_base_url("ftp://example.com"), None);
        assert_eq!(normalize_base_url("/relative/path"), None);
    }

    #[test]
    fn malformed_base_url_leaves_override_unset() {
        let config = SiteConfig::default().with_base_url("not a url");
        assert_eq!(config.base_url, None);

        let config = SiteConfig::default().with_base_url("http://10.0.0.5:8080/");
        assert_eq!(config.base_url.as_deref(), Some("http://10.0.0.5:8080"));
    }

    #[test]
    fn defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert!(config.company_api_url.is_none());
    }
}
