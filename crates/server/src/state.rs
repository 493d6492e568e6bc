use std::sync::Arc;

use embedder::build_embedder;
use ranker::{RankingEngine, VocabularyCache};

use crate::config::ServerConfig;
use crate::error::ServerResult;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Ranking engine (shared across requests; stateless apart from the
    /// one-time vocabulary load inside its cache)
    pub engine: Arc<RankingEngine>,
}

impl ServerState {
    /// Create new server state.
    ///
    /// Builds the encoder backend from config (a misconfigured embedder
    /// fails startup here rather than the first request) and wires it into
    /// the engine together with the vocabulary cache. The dictionary itself
    /// is not read until the first request that needs default candidates.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let embedder = build_embedder(&config.embedder)?;
        let vocabulary = Arc::new(VocabularyCache::new(&config.dictionary_path));
        let engine = Arc::new(RankingEngine::new(embedder, vocabulary));

        Ok(Self {
            config: Arc::new(config),
            engine,
        })
    }
}
