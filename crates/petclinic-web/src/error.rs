//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use petclinic_core::{DbError, WorkflowError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Errors a handler can return.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

impl From<WorkflowError> for WebError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::NotFound { entity, id } => {
                WebError::NotFound(format!("{entity} {id} not found"))
            }
            WorkflowError::Database(e) => WebError::Database(e),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message, code) = match self {
            WebError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "not_found"),
            WebError::Database(DbError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, msg, "not_found")
            }
            WebError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "bad_request"),
            WebError::Database(err) => {
                tracing::error!(error = %err, "store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    err.to_string(),
                    "database_error",
                )
            }
            WebError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg, "internal_error")
            }
        };

        let body = Json(ErrorResponse {
            error: message,
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, WebError>;
