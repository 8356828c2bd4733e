//! Shared helpers for the site integration tests.

#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::IntoResponse,
    Router,
};
use linkpage_site::{config::SiteConfig, router::create_router, state::AppState};
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Serves `app` on an ephemeral localhost port.
pub async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let addr = listener.local_addr().expect("failed to get local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });
    addr
}

/// Serves the full site with `config` on an ephemeral port.
pub async fn spawn_site(config: SiteConfig) -> SocketAddr {
    spawn(create_router(AppState::new(config))).await
}

/// Paths requested from a stub provider.
pub type Hits = Arc<Mutex<Vec<String>>>;

/// A stub profile provider answering every path with `status` and `body`.
pub async fn spawn_stub(status: StatusCode, body: &'static str) -> (SocketAddr, Hits) {
    let hits: Hits = Arc::default();
    let recorded = hits.clone();

    let app = Router::new().fallback(move |request: Request<Body>| {
        let recorded = recorded.clone();
        async move {
            recorded
                .lock()
                .expect("hits lock poisoned")
                .push(request.uri().path().to_string());
            (status, [("content-type", "application/json")], body).into_response()
        }
    });

    (spawn(app).await, hits)
}

/// GETs `url` and returns the status, cache-control header and body.
pub async fn get_text(url: &str) -> (StatusCode, Option<String>, String) {
    let response = reqwest::get(url).await.expect("request should succeed");
    let status = StatusCode::from_u16(response.status().as_u16()).expect("valid status");
    let cache_control = response
        .headers()
        .get("cache-control")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response.text().await.expect("response body should be readable");
    (status, cache_control, body)
}

/// Sends a GET through the router without a network listener.
pub async fn oneshot_get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .expect("request build should succeed"),
        )
        .await
        .expect("app should handle request");
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("response body should be readable");
    (status, headers, body.to_vec())
}

/// `data-id` values of the buttons inside a page section, in page order.
pub fn button_ids(html: &str, section: &str) -> Vec<String> {
    let start = html
        .find(&format!("class=\"buttons {section}\""))
        .expect("section present");
    let body = &html[start..];
    let end = body.find("</section>").expect("section closed");

    body[..end]
        .split("data-id=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_string)
        .collect()
}
