//! Per-request observation (access log).

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;

use crate::metrics;

/// Collaborator notified once for every handled request.
pub trait RequestObserver: Send + Sync + fmt::Debug {
    /// Called after the response status is known.
    fn observe(&self, method: &Method, path: &str, status: StatusCode);
}

/// Shared handle to an observer.
pub type SharedObserver = Arc<dyn RequestObserver>;

/// Writes one access-log line per request through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn observe(&self, method: &Method, path: &str, status: StatusCode) {
        info!(%method, path, status = status.as_u16(), "request handled");
    }
}

/// One request seen by a [`RecordingObserver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedRequest {
    /// HTTP method.
    pub method: Method,
    /// Request path, without query string.
    pub path: String,
    /// Response status.
    pub status: StatusCode,
}

/// Keeps every observation in memory. Useful in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    seen: Arc<Mutex<Vec<ObservedRequest>>>,
}

impl RecordingObserver {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything observed so far.
    pub fn requests(&self) -> Vec<ObservedRequest> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl RequestObserver for RecordingObserver {
    fn observe(&self, method: &Method, path: &str, status: StatusCode) {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ObservedRequest {
                method: method.clone(),
                path: path.to_string(),
                status,
            });
    }
}

/// Middleware that reports every request to the observer and to metrics.
pub async fn observe_requests(
    State(observer): State<SharedObserver>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    metrics::record_http_request(&method, status, start);
    observer.observe(&method, &path, status);
    response
}
