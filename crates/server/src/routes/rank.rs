use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use ranker::RankedResult;
use serde::{Deserialize, Serialize};

use crate::error::ServerResult;
use crate::state::ServerState;

/// Rank request
#[derive(Debug, Deserialize)]
pub struct RankRequest {
    /// Query text
    #[serde(default)]
    pub query: String,

    /// Candidate strings to score against the query
    #[serde(default)]
    pub candidates: Vec<String>,

    /// Maximum results to return; missing or non-positive means the engine
    /// default of 5
    #[serde(default)]
    pub top_k: Option<usize>,
}

/// Rank response
#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub query: String,
    pub results: Vec<RankedResult>,
}

/// Rank candidates against a query by semantic similarity.
///
/// An empty query or empty candidate list is a successful empty result, not
/// an error; "no results" is a legitimate outcome of a search.
pub async fn rank(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<RankRequest>,
) -> ServerResult<impl IntoResponse> {
    let results = state
        .engine
        .rank(&request.query, &request.candidates, request.top_k)
        .await?;

    Ok(Json(RankResponse {
        query: request.query,
        results,
    }))
}
