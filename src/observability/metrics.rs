//! Metrics collection and exposition.
//!
//! # Metrics
//! - `projects_requests_total` (counter): requests by method, status
//! - `projects_request_duration_seconds` (histogram): latency by method
//! - `projects_invalid_ids_total` (counter): requests rejected by id validation

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter with its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);

    match builder.install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a completed request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    counter!(
        "projects_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("projects_request_duration_seconds", "method" => method.to_string())
        .record(start.elapsed().as_secs_f64());
}

/// Record a request short-circuited by id validation.
pub fn record_invalid_id() {
    counter!("projects_invalid_ids_total").increment(1);
}
