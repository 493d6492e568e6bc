//! Batch text encoding for the proximity service.
//!
//! This crate turns short text strings into dense, L2-unit-norm vectors that
//! the ranking layer scores with plain dot products. The encoder itself is
//! treated as an injected capability behind the [`Embedder`] trait: callers
//! hand over a batch of strings and get back one vector per string, in the
//! same order.
//!
//! Two backends ship out of the box:
//!
//! - **API mode** - Call a remote encoder service over HTTP. The service
//!   receives `{"texts": [...]}` and answers `{"embeddings": [[...], ...]}`.
//! - **Stub mode** - For testing and model-less dev boxes. Generates fake but
//!   consistent unit-norm vectors with no I/O at all.
//!
//! There is deliberately no fallback between the two: a failed API call is an
//! error the caller sees, never a silently different vector space.
//!
//! ## Quick example
//!
//! ```no_run
//! use embedder::{build_embedder, EmbedderConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = EmbedderConfig {
//!         mode: "api".into(),
//!         api_url: Some("http://localhost:5000/embed".into()),
//!         ..Default::default()
//!     };
//!
//!     let embedder = build_embedder(&cfg)?;
//!     let vectors = embedder.encode(&["apple juice".to_string()]).await?;
//!     assert_eq!(vectors.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;

mod api;
mod normalize;
mod stub;

pub use crate::api::HttpEmbedder;
pub use crate::config::EmbedderConfig;
pub use crate::error::EmbedderError;
pub use crate::stub::StubEmbedder;

use std::sync::Arc;

use async_trait::async_trait;

/// Batch text encoder.
///
/// Implementations must return exactly one vector per input string, in input
/// order, and every vector must be L2-unit-norm so that a dot product between
/// two outputs is their cosine similarity.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbedderError>;
}

/// Construct the embedder selected by `cfg.mode`.
///
/// `"stub"` builds the deterministic [`StubEmbedder`]; everything else is
/// treated as `"api"` and requires `cfg.api_url`. Misconfiguration surfaces
/// here, at startup, rather than on the first request.
pub fn build_embedder(cfg: &EmbedderConfig) -> Result<Arc<dyn Embedder>, EmbedderError> {
    match cfg.mode.as_str() {
        "stub" => Ok(Arc::new(StubEmbedder::new(cfg))),
        _ => Ok(Arc::new(HttpEmbedder::new(cfg)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn build_embedder_stub_mode() {
        let cfg = EmbedderConfig {
            mode: "stub".into(),
            ..Default::default()
        };

        let embedder = build_embedder(&cfg).unwrap();
        let vectors = embedder
            .encode(&["hello".to_string(), "world".to_string()])
            .await
            .unwrap();

        assert_eq!(vectors.len(), 2);
        assert_ne!(vectors[0], vectors[1]);
    }

    #[test]
    fn build_embedder_api_mode_requires_url() {
        let cfg = EmbedderConfig {
            mode: "api".into(),
            api_url: None,
            ..Default::default()
        };

        let err = build_embedder(&cfg).err().expect("missing api_url should fail");
        assert!(err.to_string().contains("api_url"));
    }

    #[test]
    fn build_embedder_unknown_mode_defaults_to_api() {
        let cfg = EmbedderConfig {
            mode: "onnx".into(),
            api_url: Some("http://localhost:5000/embed".into()),
            ..Default::default()
        };

        assert!(build_embedder(&cfg).is_ok());
    }
}
