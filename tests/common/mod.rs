//! Shared utilities for integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use projects_api::config::ServiceConfig;
use projects_api::http::{AppState, HttpServer};
use projects_api::store::{InMemoryProjectStore, ProjectStore};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// A router over a fresh store, plus a handle on that store.
pub fn app() -> (Router, Arc<InMemoryProjectStore>) {
    app_with_config(ServiceConfig::default())
}

pub fn app_with_config(config: ServiceConfig) -> (Router, Arc<InMemoryProjectStore>) {
    let store = Arc::new(InMemoryProjectStore::new());
    let shared: Arc<dyn ProjectStore> = store.clone();
    let router = HttpServer::build_router(&config, AppState::new(shared));
    (router, store)
}

/// Decoded response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub raw: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.raw).expect("response body is not JSON")
    }
}

/// Send a request with an optional JSON body through the router.
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    send_request(router, request).await
}

/// Send a prebuilt request through the router.
pub async fn send_request(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let raw = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    TestResponse { status, headers, raw }
}

/// `true` if `s` is a lowercase hyphenated UUID.
pub fn is_canonical_uuid(s: &str) -> bool {
    s.len() == 36
        && s.char_indices().all(|(i, c)| match i {
            8 | 13 | 18 | 23 => c == '-',
            _ => c.is_ascii_digit() || ('a'..='f').contains(&c),
        })
}
