use embedder::EmbedderError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single ranked match: candidate text plus its similarity to the query,
/// rounded to four decimal places.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedResult {
    pub text: String,
    pub score: f32,
}

/// Output of [`generate_proximity`](crate::RankingEngine::generate_proximity):
/// the surviving candidate texts in rank order (ready to use as a synonym
/// list) plus the parallel scored pairs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProximityResult {
    pub proximity_words: Vec<String>,
    pub results: Vec<RankedResult>,
}

/// Errors produced by the ranking layer.
#[derive(Debug, Error)]
pub enum RankError {
    /// The caller supplied input the operation cannot accept (client fault).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The encoder call failed. Every embedder failure collapses into this
    /// one condition; the request is aborted with no partial results.
    #[error("embedding failed: {0}")]
    Embedding(String),
}

impl From<EmbedderError> for RankError {
    fn from(err: EmbedderError) -> Self {
        RankError::Embedding(err.to_string())
    }
}
