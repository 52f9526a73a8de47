//! Prometheus metrics for request and store activity.

use std::time::Instant;

use axum::http::{Method, StatusCode};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

use crate::resources::ResourceKind;

// === Metric Name Constants ===

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// Records created counter metric name.
pub const METRIC_RECORDS_CREATED: &str = "records_created_total";
/// Records updated counter metric name.
pub const METRIC_RECORDS_UPDATED: &str = "records_updated_total";
/// Records deleted counter metric name.
pub const METRIC_RECORDS_DELETED: &str = "records_deleted_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );

    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests handled");
    describe_counter!(METRIC_RECORDS_CREATED, "Total number of records created");
    describe_counter!(METRIC_RECORDS_UPDATED, "Total number of records updated");
    describe_counter!(METRIC_RECORDS_DELETED, "Total number of records deleted");

    debug!("Metrics initialized");
}

/// Record a handled HTTP request.
pub fn record_http_request(method: &Method, status: StatusCode, start: Instant) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "method" => method.to_string()).record(latency_ms);
    counter!(
        METRIC_HTTP_REQUESTS,
        "method" => method.to_string(),
        "status" => status.as_u16().to_string()
    )
    .increment(1);
}

/// Increment records created counter.
pub fn inc_records_created(kind: ResourceKind) {
    counter!(METRIC_RECORDS_CREATED, "resource" => <&'static str>::from(kind)).increment(1);
}

/// Increment records updated counter.
pub fn inc_records_updated(kind: ResourceKind) {
    counter!(METRIC_RECORDS_UPDATED, "resource" => <&'static str>::from(kind)).increment(1);
}

/// Increment records deleted counter.
pub fn inc_records_deleted(kind: ResourceKind) {
    counter!(METRIC_RECORDS_DELETED, "resource" => <&'static str>::from(kind)).increment(1);
}
