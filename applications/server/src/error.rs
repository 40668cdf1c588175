/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chatbot_storage::StorageError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    Storage {
        message: String,
        #[source]
        source: StorageError,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServerError {
    /// A propagated store fault, with the boundary-level message attached.
    pub fn storage(message: impl Into<String>, source: StorageError) -> Self {
        Self::Storage {
            message: message.into(),
            source,
        }
    }
}

/// Every error becomes the uniform `{ message, error? }` body; only store
/// faults expose the underlying description, on the 500 path.
impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::BadRequest(message) => {
                tracing::warn!(%message, "request rejected");
                (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
            }
            ServerError::NotFound(message) => {
                tracing::warn!(%message, "resource not found");
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            ServerError::Storage { message, source } => {
                tracing::error!(error = %source, %message, "store fault");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": message, "error": source.to_string() })),
                )
                    .into_response()
            }
            ServerError::Config(message) => {
                tracing::error!(%message, "configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": message })),
                )
                    .into_response()
            }
        }
    }
}
