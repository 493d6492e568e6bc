use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::error::ServerResult;
use crate::state::ServerState;

/// Vocabulary listing response
#[derive(Debug, Serialize)]
pub struct VocabularyResponse {
    pub count: usize,
    pub entries: Vec<String>,
}

/// List the cached default candidate vocabulary.
///
/// The first call after startup triggers the one-time dictionary load; a
/// missing or malformed dictionary shows up here as an empty list, the same
/// way proximity generation sees it.
pub async fn list_vocabulary(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<impl IntoResponse> {
    let entries: Vec<String> = state.engine.vocabulary().get_or_load().to_vec();

    Ok(Json(VocabularyResponse {
        count: entries.len(),
        entries,
    }))
}
