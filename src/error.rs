//! Unified error types for the resource service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::resources::{RecordId, ResourceKind};

/// Process-level error: startup, configuration, serving.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error (binding, serving).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of a store operation that did not succeed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with this id exists.
    #[error("{kind} record {id} not found")]
    NotFound {
        /// Collection that was searched.
        kind: ResourceKind,
        /// Requested id.
        id: RecordId,
    },
}

/// Errors surfaced by HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Unknown id.
    #[error("{0}")]
    NotFound(#[from] StoreError),

    /// A path segment did not name any record.
    #[error("{kind} record {raw} not found")]
    UnknownId {
        /// Collection that was addressed.
        kind: ResourceKind,
        /// Path segment as received.
        raw: String,
    },

    /// A required field was absent from the request body.
    #[error("Missing `{0}` in request body")]
    MissingField(&'static str),

    /// Path id and body id disagree on update.
    #[error("Request path id ({path}) and request body id ({body}) must match")]
    IdMismatch {
        /// Id from the URL.
        path: RecordId,
        /// Id from the JSON body.
        body: String,
    },

    /// The body was not valid JSON or had the wrong shape.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// The body exceeded the request size limit.
    #[error("request body too large: {0}")]
    PayloadTooLarge(String),

    /// A handler panicked.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) | Self::UnknownId { .. } => StatusCode::NOT_FOUND,
            Self::MissingField(_) | Self::IdMismatch { .. } | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body returned with every error status.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("request failed: {}", self);
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
