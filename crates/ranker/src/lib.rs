//! # Proximity Ranker (`ranker`)
//!
//! ## Purpose
//!
//! `ranker` sits on top of the encoder layer (`embedder`) and is responsible
//! for turning a query string plus a set of candidate strings into a ranked,
//! thresholded, deduplicated list of semantically close matches. It also owns
//! the default candidate vocabulary: a flat list of product names and aliases
//! loaded once per process from an on-disk dictionary.
//!
//! In a typical deployment you will:
//! - Build one [`RankingEngine`] at startup around a shared `Embedder` and a
//!   [`VocabularyCache`].
//! - Call [`RankingEngine::rank`] for general similarity search over
//!   caller-supplied candidates, and [`RankingEngine::generate_proximity`]
//!   for synonym/near-term discovery (falling back to the cached vocabulary
//!   when the caller supplies no candidates).
//!
//! ## Scoring model
//!
//! The underlying encoder is a dual-encoder: query-side and passage-side text
//! occupy different regions of its learned space, so the engine prepends
//! `"query: "` to the query and `"passage: "` to every candidate before
//! encoding. Both sides come back unit-norm, which makes the dot product of a
//! query/candidate pair their cosine similarity. Scores are rounded to four
//! decimal places only when results are shaped for output.
//!
//! ## Core Types
//!
//! - [`RankingEngine`]: the engine; stateless across calls.
//! - [`VocabularyCache`]: process-wide, load-at-most-once candidate list.
//! - [`RankedResult`]: a `(text, score)` output pair.
//! - [`ProximityResult`]: surviving texts plus the parallel scored list.
//! - [`RankError`]: `InvalidInput` for client mistakes, `Embedding` for any
//!   encoder failure (a single opaque condition; no partial results).

pub mod engine;
pub mod types;
pub mod vocabulary;

pub use crate::engine::{RankingEngine, PASSAGE_PREFIX, QUERY_PREFIX};
pub use crate::types::{ProximityResult, RankError, RankedResult};
pub use crate::vocabulary::VocabularyCache;
