use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use ranker::RankError;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Ranking error: {0}")]
    Rank(#[from] RankError),

    #[error("Embedder error: {0}")]
    Embedder(#[from] embedder::EmbedderError),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found")]
    NotFound,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            // Invalid input is the caller's fault, whichever layer caught it.
            ServerError::BadRequest(_) | ServerError::Rank(RankError::InvalidInput(_)) => {
                StatusCode::BAD_REQUEST
            }
            // An encoder failure aborts the whole request with no partial
            // results; from the caller's side it is a plain server fault.
            ServerError::Rank(RankError::Embedding(_)) | ServerError::Embedder(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Internal(_) | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    fn error_code(&self) -> &'static str {
        match self {
            ServerError::BadRequest(_) | ServerError::Rank(RankError::InvalidInput(_)) => {
                "BAD_REQUEST"
            }
            ServerError::Rank(RankError::Embedding(_)) | ServerError::Embedder(_) => {
                "EMBEDDING_ERROR"
            }
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
            ServerError::NotFound => "NOT_FOUND",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code().to_string();
        let message = self.to_string();

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}
