//! Router Configuration
//!
//! Route configuration for the site.

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::{handlers, origin::COMPANY_PATH, state::AppState};

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    // Page and profile responses are never cached; static assets are.
    let dynamic = Router::new()
        .route("/", get(handlers::home::home))
        .route(COMPANY_PATH, get(handlers::company::company))
        .route("/api/company", get(handlers::company::company))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    let static_service = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=3600"),
        ))
        .service(ServeDir::new(&state.config().public_dir));

    Router::new()
        .merge(dynamic)
        .route("/health", get(handlers::health::health))
        .fallback_service(static_service)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
