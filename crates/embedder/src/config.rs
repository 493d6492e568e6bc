use serde::{Deserialize, Serialize};

/// Runtime configuration describing which encoder backend to use and how to
/// post-process vectors.
///
/// The struct is serde-friendly so it can nest inside a larger service config
/// and be overridden from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedderConfig {
    /// Backend selector: `"api"` (remote HTTP encoder) or `"stub"`
    /// (deterministic local vectors for tests).
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Friendly model label, surfaced in service metadata only. The remote
    /// service decides which model actually runs.
    #[serde(default = "default_model_name")]
    pub model_name: String,

    /// Encoder endpoint when [`mode`](Self::mode) is `"api"`. The endpoint
    /// must embed texts verbatim (no prefixing of its own) and return
    /// unit-norm vectors.
    #[serde(default = "default_api_url")]
    pub api_url: Option<String>,

    /// Optional value for the `Authorization` header (e.g. `"Bearer ..."`).
    #[serde(default)]
    pub api_auth_header: Option<String>,

    /// Overall request timeout in seconds for API calls.
    #[serde(default = "default_api_timeout_secs")]
    pub api_timeout_secs: u64,

    /// Vector dimension used by the stub backend.
    #[serde(default = "default_stub_dimension")]
    pub stub_dimension: usize,

    /// Re-normalize returned vectors to unit length. The remote contract
    /// already promises unit-norm output; this guards against encoders that
    /// round-trip through lossy serialization.
    #[serde(default = "default_true")]
    pub normalize: bool,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            model_name: default_model_name(),
            api_url: default_api_url(),
            api_auth_header: None,
            api_timeout_secs: default_api_timeout_secs(),
            stub_dimension: default_stub_dimension(),
            normalize: default_true(),
        }
    }
}

fn default_mode() -> String {
    "api".to_string()
}

fn default_model_name() -> String {
    "multilingual-e5-small".to_string()
}

fn default_api_url() -> Option<String> {
    Some("http://localhost:5000/embed".to_string())
}

fn default_api_timeout_secs() -> u64 {
    30
}

fn default_stub_dimension() -> usize {
    384
}

fn default_true() -> bool {
    true
}
