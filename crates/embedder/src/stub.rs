use async_trait::async_trait;
use fxhash::hash64;

use crate::normalize::l2_normalize_in_place;
use crate::{Embedder, EmbedderConfig, EmbedderError};

/// Deterministic encoder used in tests and on boxes without a model service.
/// Generates sinusoid values derived from a hash of the input text so the
/// same text always maps to the same vector, with minimal CPU cost.
#[derive(Debug, Clone)]
pub struct StubEmbedder {
    dimension: usize,
    normalize: bool,
}

impl StubEmbedder {
    pub fn new(cfg: &EmbedderConfig) -> Self {
        Self {
            dimension: cfg.stub_dimension.max(1),
            normalize: cfg.normalize,
        }
    }

    fn encode_one(&self, text: &str) -> Vec<f32> {
        let mut v = vec![0f32; self.dimension];
        let h = hash64(text.as_bytes());
        for (idx, value) in v.iter_mut().enumerate() {
            *value = ((h >> (idx % 32)) as f32 * 0.0001).sin();
        }
        if self.normalize {
            l2_normalize_in_place(&mut v);
        }
        v
    }
}

#[async_trait]
impl Embedder for StubEmbedder {
    async fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbedderError> {
        Ok(texts.iter().map(|t| self.encode_one(t)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stub(dimension: usize, normalize: bool) -> StubEmbedder {
        StubEmbedder::new(&EmbedderConfig {
            mode: "stub".into(),
            stub_dimension: dimension,
            normalize,
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn stub_is_deterministic() {
        let embedder = stub(64, false);
        let a = embedder.encode(&["big cat".to_string()]).await.unwrap();
        let b = embedder.encode(&["big cat".to_string()]).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn stub_different_text_different_vector() {
        let embedder = stub(64, false);
        let out = embedder
            .encode(&["hello".to_string(), "goodbye".to_string()])
            .await
            .unwrap();
        assert_ne!(out[0], out[1]);
    }

    #[tokio::test]
    async fn stub_respects_dimension() {
        let embedder = stub(17, false);
        let out = embedder.encode(&["anything".to_string()]).await.unwrap();
        assert_eq!(out[0].len(), 17);
    }

    #[tokio::test]
    async fn stub_normalizes_when_asked() {
        let embedder = stub(384, true);
        let out = embedder.encode(&["test".to_string()]).await.unwrap();
        let norm: f32 = out[0].iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-4, "expected unit norm, got {norm}");
    }

    #[tokio::test]
    async fn stub_empty_batch() {
        let embedder = stub(64, true);
        let out = embedder.encode(&[]).await.unwrap();
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn stub_preserves_input_order() {
        let embedder = stub(32, true);
        let texts: Vec<String> = ["one", "two", "three"].iter().map(|s| s.to_string()).collect();
        let batched = embedder.encode(&texts).await.unwrap();
        for (i, text) in texts.iter().enumerate() {
            let single = embedder.encode(&[text.clone()]).await.unwrap();
            assert_eq!(batched[i], single[0]);
        }
    }
}
