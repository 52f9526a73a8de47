//! HTTP API route definitions.

use std::any::Any;

use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_record, delete_record, get_record, health, list_records, render_metrics,
    update_record, AppState,
};
use super::observer::{observe_requests, SharedObserver};
use crate::error::ApiError;
use crate::resources::Resource;
use crate::store::SharedStore;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Health endpoint
        .route("/health", get(health))
        // Collections
        .merge(resource_router(state.blog_posts))
        .merge(resource_router(state.recipes))
        .merge(resource_router(state.shopping_list));

    if let Some(handle) = state.prometheus {
        router = router.merge(
            Router::new()
                .route("/metrics", get(render_metrics))
                .with_state(handle),
        );
    }

    with_middleware(router, state.observer)
}

/// CRUD routes for one collection, mounted at its kind's path.
pub fn resource_router<R: Resource>(store: SharedStore<R>) -> Router {
    Router::new()
        .route(
            &R::KIND.collection_path(),
            get(list_records::<R>).post(create_record::<R>),
        )
        .route(
            &R::KIND.member_path(),
            get(get_record::<R>)
                .put(update_record::<R>)
                .delete(delete_record::<R>),
        )
        .with_state(store)
}

/// Wrap `router` with panic recovery, request observation and tracing.
///
/// Panics are turned into 500s inside the observer, so observed statuses
/// match what the client receives.
pub fn with_middleware(router: Router, observer: SharedObserver) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn_with_state(observer, observe_requests))
        .layer(TraceLayer::new_for_http())
}

/// Render a caught handler panic as a JSON 500.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = panic.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "handler panicked".to_string()
    };
    ApiError::Internal(detail).into_response()
}
