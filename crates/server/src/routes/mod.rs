//! API route handlers
//!
//! This module contains all HTTP endpoint implementations for the proximity
//! server. Routes are organized by functionality:
//!
//! - `health`: Health and readiness probes
//! - `embed`: Batch text encoding
//! - `rank`: Similarity ranking of a candidate list against a query
//! - `proximity`: Proximity-word generation for a keyword
//! - `vocabulary`: Read-only view of the cached default candidates

pub mod embed;
pub mod health;
pub mod proximity;
pub mod rank;
pub mod vocabulary;

use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::error::{ServerError, ServerResult};

/// API version and base info
///
/// Returns server information including version and available endpoints.
/// This is the root endpoint (GET /) and requires no parameters.
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Proximity Server",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": "v1",
        "endpoints": [
            "/api/v1/embed",
            "/api/v1/rank",
            "/api/v1/proximity",
            "/api/v1/vocabulary",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
