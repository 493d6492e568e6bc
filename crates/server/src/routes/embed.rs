use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ServerResult;
use crate::state::ServerState;

/// Batch embedding request
#[derive(Debug, Deserialize)]
pub struct EmbedRequest {
    /// Raw texts to encode; must be non-empty
    pub texts: Vec<String>,
}

/// Batch embedding response
#[derive(Debug, Serialize)]
pub struct EmbedResponse {
    /// One unit-norm vector per input text, in input order
    pub embeddings: Vec<Vec<f32>>,
    pub count: usize,
}

/// Encode a batch of texts into unit-norm vectors.
///
/// The engine applies the passage-side prefix before encoding; callers send
/// raw text. An empty `texts` list is a 400: there is nothing to encode.
pub async fn embed_batch(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<EmbedRequest>,
) -> ServerResult<impl IntoResponse> {
    let embeddings = state.engine.embed_batch(&request.texts).await?;
    let count = embeddings.len();

    Ok(Json(EmbedResponse { embeddings, count }))
}
