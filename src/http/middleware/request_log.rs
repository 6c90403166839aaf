//! Per-request logging with timing.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use crate::observability::metrics;

/// `[METHOD] /path?query` with the method uppercased.
pub fn request_label(request: &Request) -> String {
    let uri = request.uri();
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    format!("[{}] {}", request.method().as_str().to_uppercase(), path)
}

/// Log the label and the elapsed time of everything downstream.
pub async fn log_request(request: Request, next: Next) -> Response {
    let label = request_label(&request);
    let method = request.method().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    tracing::info!(
        request = %label,
        status,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Request handled"
    );
    metrics::record_request(&method, status, start);

    response
}
