//! HTTP API: CRUD routes per collection, health and metrics endpoints.

pub mod handlers;
pub mod observer;
pub mod routes;

pub use handlers::AppState;
pub use observer::{RecordingObserver, RequestObserver, TracingObserver};
pub use routes::create_router;
