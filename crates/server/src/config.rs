use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use embedder::EmbedderConfig;
use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum request body size in MB
    #[serde(default = "default_max_body_size_mb")]
    pub max_body_size_mb: usize,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Path to the product dictionary backing the default candidate
    /// vocabulary. A missing file is not an error; the vocabulary is empty.
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: PathBuf,

    /// Encoder backend configuration
    #[serde(default)]
    pub embedder: EmbedderConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_body_size_mb: default_max_body_size_mb(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            dictionary_path: default_dictionary_path(),
            embedder: EmbedderConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config files
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("proximity").required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix("PROXIMITY").separator("__"));

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max body size in bytes
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_mb * 1024 * 1024
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_body_size_mb() -> usize {
    2
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_dictionary_path() -> PathBuf {
    PathBuf::from("./data/product_dictionary.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.max_body_size_mb, 2);
        assert!(cfg.enable_cors);
        assert_eq!(
            cfg.dictionary_path,
            PathBuf::from("./data/product_dictionary.json")
        );
        assert_eq!(cfg.embedder.mode, "api");
    }

    #[test]
    fn test_socket_addr() {
        let cfg = ServerConfig::default();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_config_deserializes_nested_embedder() {
        let cfg: ServerConfig = serde_json::from_str(
            r#"{ "port": 9000, "embedder": { "mode": "stub", "stub_dimension": 8 } }"#,
        )
        .unwrap();
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.embedder.mode, "stub");
        assert_eq!(cfg.embedder.stub_dimension, 8);
    }
}
