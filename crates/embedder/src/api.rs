use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::normalize::l2_normalize_in_place;
use crate::{Embedder, EmbedderConfig, EmbedderError};

/// HTTP client for a remote batch encoder service.
///
/// The wire contract is a single POST: `{"texts": [...]}` in,
/// `{"embeddings": [[f32, ...], ...]}` out, one vector per text in input
/// order. There are no retries here: a failed call is the caller's problem,
/// and callers are required to treat it as fatal for the request.
#[derive(Debug)]
pub struct HttpEmbedder {
    client: reqwest::Client,
    url: String,
    auth_header: Option<String>,
    normalize: bool,
}

#[derive(Serialize)]
struct EncodeRequest<'a> {
    texts: &'a [String],
}

#[derive(Deserialize)]
struct EncodeResponse {
    embeddings: Vec<Vec<f32>>,
}

impl HttpEmbedder {
    pub fn new(cfg: &EmbedderConfig) -> Result<Self, EmbedderError> {
        let url = cfg
            .api_url
            .clone()
            .ok_or_else(|| EmbedderError::InvalidConfig("api_url is required for api mode".into()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.api_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| EmbedderError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url,
            auth_header: cfg.api_auth_header.clone(),
            normalize: cfg.normalize,
        })
    }
}

#[async_trait]
impl Embedder for HttpEmbedder {
    async fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbedderError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let mut request = self
            .client
            .post(&self.url)
            .json(&EncodeRequest { texts });
        if let Some(header) = self.auth_header.as_deref() {
            request = request.header("Authorization", header);
        }

        let response = request
            .send()
            .await
            .map_err(|e| EmbedderError::Request(format!("HTTP request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(EmbedderError::Backend(format!("HTTP error {status}: {body}")));
        }

        let parsed: EncodeResponse = response
            .json()
            .await
            .map_err(|e| EmbedderError::Backend(format!("invalid JSON response: {e}")))?;

        if parsed.embeddings.len() != texts.len() {
            return Err(EmbedderError::Backend(format!(
                "encoder returned {} embeddings for {} inputs",
                parsed.embeddings.len(),
                texts.len()
            )));
        }

        let mut vectors = parsed.embeddings;
        if self.normalize {
            for v in vectors.iter_mut() {
                l2_normalize_in_place(v);
            }
        }

        Ok(vectors)
    }
}
