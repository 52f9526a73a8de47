//! HTTP API handlers.
//!
//! The CRUD handlers are generic over [`Resource`]; each collection gets its
//! own copy of the routes with its own store as state.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use super::observer::{SharedObserver, TracingObserver};
use crate::error::ApiError;
use crate::metrics;
use crate::resources::{
    blog_post, recipe, shopping_list, BlogPost, Recipe, RecordId, Resource, ShoppingListItem,
};
use crate::store::{MemoryStore, SharedStore};

/// Application state: one store per collection plus collaborators.
#[derive(Clone)]
pub struct AppState {
    /// Blog posts.
    pub blog_posts: SharedStore<BlogPost>,
    /// Recipes.
    pub recipes: SharedStore<Recipe>,
    /// Shopping-list items.
    pub shopping_list: SharedStore<ShoppingListItem>,
    /// Notified after every request.
    pub observer: SharedObserver,
    /// Renders `/metrics` when a Prometheus recorder is installed.
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    /// Create state with empty stores.
    pub fn new() -> Self {
        Self {
            blog_posts: MemoryStore::new().into_shared(),
            recipes: MemoryStore::new().into_shared(),
            shopping_list: MemoryStore::new().into_shared(),
            observer: Arc::new(TracingObserver),
            prometheus: None,
        }
    }

    /// Create state with every store pre-populated with sample records.
    pub fn seeded() -> Self {
        Self {
            blog_posts: MemoryStore::seeded(blog_post::samples()).into_shared(),
            recipes: MemoryStore::seeded(recipe::samples()).into_shared(),
            shopping_list: MemoryStore::seeded(shopping_list::samples()).into_shared(),
            ..Self::new()
        }
    }

    /// Replace the request observer.
    pub fn with_observer(mut self, observer: SharedObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Serve metrics from this Prometheus handle.
    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Prometheus text exposition.
pub async fn render_metrics(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    handle.render()
}

/// `GET /<resource>`: every record in insertion order.
pub async fn list_records<R: Resource>(State(store): State<SharedStore<R>>) -> Json<Vec<R>> {
    let records = store.read().await.list().to_vec();
    debug!(kind = %R::KIND, count = records.len(), "listing records");
    Json(records)
}

/// `GET /<resource>/:id`: a single record.
pub async fn get_record<R: Resource>(
    State(store): State<SharedStore<R>>,
    Path(raw_id): Path<String>,
) -> Result<Json<R>, ApiError> {
    let id = parse_id::<R>(raw_id)?;
    let record = store.read().await.get(id)?.clone();
    Ok(Json(record))
}

/// `POST /<resource>`: create a record from the body and return it with its id.
pub async fn create_record<R: Resource>(
    State(store): State<SharedStore<R>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<R>), ApiError> {
    let fields = decode_fields::<R>(json_body(body)?)?;

    let record = store.write().await.create(fields);
    metrics::inc_records_created(R::KIND);
    info!(kind = %R::KIND, id = %record.id(), "created record");

    Ok((StatusCode::CREATED, Json(record)))
}

/// `PUT /<resource>/:id`: replace every non-id field.
///
/// The body must repeat the id from the path.
pub async fn update_record<R: Resource>(
    State(store): State<SharedStore<R>>,
    Path(raw_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id::<R>(raw_id)?;
    let body = json_body(body)?;

    require_fields(&body, &["id"])?;
    check_body_id(id, &body["id"])?;
    let fields = decode_fields::<R>(body)?;

    store.write().await.update(id, fields)?;
    metrics::inc_records_updated(R::KIND);
    info!(kind = %R::KIND, %id, "updated record");

    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /<resource>/:id`.
pub async fn delete_record<R: Resource>(
    State(store): State<SharedStore<R>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id::<R>(raw_id)?;

    store.write().await.delete(id)?;
    metrics::inc_records_deleted(R::KIND);
    info!(kind = %R::KIND, %id, "deleted record");

    Ok(StatusCode::NO_CONTENT)
}

/// A path segment that is not a valid id cannot name a record.
fn parse_id<R: Resource>(raw: String) -> Result<RecordId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::UnknownId { kind: R::KIND, raw })
}

/// Oversized bodies keep their 413; every other rejection is a 400.
fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    body.map(|Json(value)| value).map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::InvalidBody(rejection.body_text())
        }
    })
}

/// Every key in `required` must be present and non-null.
fn require_fields(body: &Value, required: &[&'static str]) -> Result<(), ApiError> {
    let object = body
        .as_object()
        .ok_or_else(|| ApiError::InvalidBody("expected a JSON object".to_string()))?;

    for &field in required {
        if object.get(field).map_or(true, Value::is_null) {
            return Err(ApiError::MissingField(field));
        }
    }
    Ok(())
}

/// The body id may be sent as a number or a numeric string.
fn check_body_id(path_id: RecordId, body_id: &Value) -> Result<(), ApiError> {
    let matches = match body_id {
        Value::Number(n) => n.as_u64() == Some(path_id.get()),
        Value::String(s) => s.parse::<RecordId>().is_ok_and(|id| id == path_id),
        _ => false,
    };

    if matches {
        Ok(())
    } else {
        Err(ApiError::IdMismatch {
            path: path_id,
            body: body_id.to_string(),
        })
    }
}

fn decode_fields<R: Resource>(body: Value) -> Result<R::Fields, ApiError> {
    require_fields(&body, R::REQUIRED_FIELDS)?;
    serde_json::from_value(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}
