use std::sync::Arc;

use embedder::Embedder;

use crate::types::{ProximityResult, RankError, RankedResult};
use crate::vocabulary::VocabularyCache;


/// Query-side marker for the dual-encoder convention.
///
/// The encoder was trained with asymmetric prefixes: query-side and
/// passage-side text land in different regions of its space even when the
/// text is identical. The prefixes must never be swapped or omitted, or the
/// cosine scores stop meaning anything.
pub const QUERY_PREFIX: &str = "query: ";
/// Passage-side marker, applied to every candidate string.
pub const PASSAGE_PREFIX: &str = "passage: ";

const DEFAULT_RANK_TOP_K: usize = 5;
const DEFAULT_PROXIMITY_TOP_K: usize = 10;
// Upper bound on the proximity window; keeps a single request from forcing
// an unbounded batch-encode call.
const MAX_PROXIMITY_TOP_K: usize = 50;
const DEFAULT_MIN_SCORE: f32 = 0.5;

/// Semantic proximity ranking engine.
///
/// Stateless across calls: every operation is a pure read of its inputs (and,
/// for [`generate_proximity`](Self::generate_proximity) without explicit
/// candidates, one read of the shared vocabulary snapshot).
pub struct RankingEngine {
    embedder: Arc<dyn Embedder>,
    vocabulary: Arc<VocabularyCache>,
}

/// Candidate text plus its raw (unrounded) similarity score.
struct Scored {
    text: String,
    score: f32,
}

impl RankingEngine {
    pub fn new(embedder: Arc<dyn Embedder>, vocabulary: Arc<VocabularyCache>) -> Self {
        Self {
            embedder,
            vocabulary,
        }
    }

    /// Shared handle to the default-candidate vocabulary.
    pub fn vocabulary(&self) -> &VocabularyCache {
        &self.vocabulary
    }

    /// Encode a batch of raw texts as passages.
    ///
    /// An empty batch is a client fault, not a degenerate success: the
    /// operation exists to produce vectors, and there is nothing to produce.
    pub async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, RankError> {
        if texts.is_empty() {
            return Err(RankError::InvalidInput("texts must not be empty".into()));
        }
        let prefixed: Vec<String> = texts
            .iter()
            .map(|t| format!("{PASSAGE_PREFIX}{t}"))
            .collect();
        Ok(self.embedder.encode(&prefixed).await?)
    }

    /// General similarity search: score every candidate against the query and
    /// return the best `top_k` as `(text, score)` pairs.
    ///
    /// An empty query (after trimming) or an empty candidate list is a valid
    /// "no results" case. `top_k` falls back to 5 when missing or
    /// non-positive, then clamps to the candidate count.
    pub async fn rank(
        &self,
        query: &str,
        candidates: &[String],
        top_k: Option<usize>,
    ) -> Result<Vec<RankedResult>, RankError> {
        let query = query.trim();
        if query.is_empty() || candidates.is_empty() {
            return Ok(Vec::new());
        }

        let top_k = effective_top_k(top_k, DEFAULT_RANK_TOP_K).min(candidates.len());

        let mut scored = self.score_candidates(query, candidates.to_vec()).await?;
        sort_by_score_desc(&mut scored);
        scored.truncate(top_k);

        Ok(scored.into_iter().map(into_ranked).collect())
    }

    /// Synonym/near-term discovery around `keyword`.
    ///
    /// When `candidates` is `None` the cached default vocabulary supplies the
    /// pool; an explicitly supplied list is used as-is, so an explicit empty
    /// list short-circuits to an empty result. Before any encoding, every
    /// candidate whose normalized form (whitespace stripped, lowercased)
    /// equals the normalized keyword is removed, as is anything that
    /// normalizes to the empty string.
    ///
    /// Result shaping is over-fetch-then-filter: sort all scores descending,
    /// keep the first `2 * top_k`, drop entries below `min_score`, then keep
    /// the first `top_k` of the remainder. The window can under-fill (fewer
    /// than `top_k` results) when not enough candidates clear the threshold.
    pub async fn generate_proximity(
        &self,
        keyword: &str,
        candidates: Option<Vec<String>>,
        top_k: Option<usize>,
        min_score: Option<f32>,
    ) -> Result<ProximityResult, RankError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(ProximityResult::default());
        }

        let pool: Vec<String> = match candidates {
            Some(list) => list,
            None => self.vocabulary.get_or_load().to_vec(),
        };

        let normalized_keyword = normalize_term(keyword);
        let pool: Vec<String> = pool
            .into_iter()
            .filter(|candidate| {
                let normalized = normalize_term(candidate);
                !normalized.is_empty() && normalized != normalized_keyword
            })
            .collect();
        if pool.is_empty() {
            return Ok(ProximityResult::default());
        }

        let top_k = effective_top_k(top_k, DEFAULT_PROXIMITY_TOP_K).clamp(1, MAX_PROXIMITY_TOP_K);
        let min_score = min_score.unwrap_or(DEFAULT_MIN_SCORE).clamp(0.0, 1.0);

        let mut scored = self.score_candidates(keyword, pool).await?;
        sort_by_score_desc(&mut scored);
        scored.truncate(2 * top_k);
        // Threshold on the raw score; rounding is output formatting only.
        scored.retain(|c| c.score >= min_score);
        scored.truncate(top_k);

        let results: Vec<RankedResult> = scored.into_iter().map(into_ranked).collect();
        let proximity_words = results.iter().map(|r| r.text.clone()).collect();

        Ok(ProximityResult {
            proximity_words,
            results,
        })
    }

    /// Shared ranking primitive: one encode call for the query, one for the
    /// whole candidate batch, then dot products.
    ///
    /// Batching is required, not an optimization: per-item encode calls
    /// would multiply encoder round-trips and break consistent relative
    /// scoring across the batch.
    async fn score_candidates(
        &self,
        query: &str,
        candidates: Vec<String>,
    ) -> Result<Vec<Scored>, RankError> {
        let query_batch = vec![format!("{QUERY_PREFIX}{query}")];
        let query_vector = self
            .embedder
            .encode(&query_batch)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| RankError::Embedding("encoder returned no query vector".into()))?;

        let passages: Vec<String> = candidates
            .iter()
            .map(|c| format!("{PASSAGE_PREFIX}{c}"))
            .collect();
        let candidate_vectors = self.embedder.encode(&passages).await?;
        if candidate_vectors.len() != candidates.len() {
            return Err(RankError::Embedding(format!(
                "encoder returned {} vectors for {} candidates",
                candidate_vectors.len(),
                candidates.len()
            )));
        }

        Ok(candidates
            .into_iter()
            .zip(candidate_vectors)
            .map(|(text, vector)| Scored {
                score: dot(&query_vector, &vector),
                text,
            })
            .collect())
    }
}

/// Dot product of two unit-norm vectors, i.e. their cosine similarity.
fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Missing or non-positive requests fall back to the operation's default.
fn effective_top_k(requested: Option<usize>, default: usize) -> usize {
    match requested {
        Some(k) if k > 0 => k,
        _ => default,
    }
}

/// Stable descending sort: equal scores keep original candidate order.
fn sort_by_score_desc(scored: &mut [Scored]) {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
}

fn into_ranked(scored: Scored) -> RankedResult {
    RankedResult {
        text: scored.text,
        score: round_score(scored.score),
    }
}

/// Round to four decimal places for output.
fn round_score(score: f32) -> f32 {
    (score * 10_000.0).round() / 10_000.0
}

/// Normalized form used for self-match exclusion: all whitespace stripped,
/// then lowercased. Distinct from the vocabulary's construction-time dedup,
/// which compares trimmed strings exactly.
fn normalize_term(term: &str) -> String {
    term.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}
