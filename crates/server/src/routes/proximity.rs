use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use ranker::RankedResult;
use serde::{Deserialize, Serialize};

use crate::error::ServerResult;
use crate::state::ServerState;

/// Proximity generation request
#[derive(Debug, Deserialize)]
pub struct ProximityRequest {
    /// Keyword to find near-terms for
    #[serde(default)]
    pub keyword: String,

    /// Candidate pool. Absent means "use the cached product vocabulary";
    /// an explicitly empty list means an empty result.
    #[serde(default)]
    pub candidates: Option<Vec<String>>,

    /// Maximum proximity words to return; missing or non-positive means the
    /// engine default of 10, and values above 50 are clamped
    #[serde(default)]
    pub top_k: Option<usize>,

    /// Minimum similarity a candidate must reach; missing means 0.5,
    /// out-of-range values are clamped into [0.0, 1.0]
    #[serde(default)]
    pub min_score: Option<f32>,
}

/// Proximity generation response
#[derive(Debug, Serialize)]
pub struct ProximityResponse {
    pub keyword: String,
    /// Surviving candidate texts in rank order, ready to use as a synonym list
    pub proximity_words: Vec<String>,
    /// The same candidates with their scores
    pub results: Vec<RankedResult>,
}

/// Generate proximity words (synonyms/near-terms) for a keyword.
///
/// Candidates equal to the keyword after normalization (whitespace stripped,
/// lowercased) are excluded before scoring, so the keyword never appears in
/// its own synonym list. An empty keyword, or a pool with nothing left after
/// exclusion, yields a successful empty result.
pub async fn generate_proximity(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<ProximityRequest>,
) -> ServerResult<impl IntoResponse> {
    let outcome = state
        .engine
        .generate_proximity(
            &request.keyword,
            request.candidates,
            request.top_k,
            request.min_score,
        )
        .await?;

    Ok(Json(ProximityResponse {
        keyword: request.keyword,
        proximity_words: outcome.proximity_words,
        results: outcome.results,
    }))
}
