//! Profile Page Handler

use axum::{extract::State, http::HeaderMap};

use crate::{
    defaults::merge,
    error::SiteResult,
    origin::{company_url, resolve_origin},
    state::AppState,
    templates::ProfileTemplate,
};

/// Handler for the profile landing page.
///
/// Queries the provider over HTTP at the request's own origin, merges the
/// record with the defaults and renders it. Any failure fails the whole page.
pub async fn home(State(state): State<AppState>, headers: HeaderMap) -> SiteResult<ProfileTemplate> {
    let origin = resolve_origin(state.config().base_url.as_deref(), &headers);
    tracing::debug!(%origin, "resolved page origin");

    let profile = state.client().fetch(&company_url(&origin)).await?;

    Ok(ProfileTemplate::new(merge(profile)))
}
