use thiserror::Error;

/// Errors surfaced by the encoder backends.
#[derive(Debug, Error)]
pub enum EmbedderError {
    /// Configuration is inconsistent (e.g., api mode without an api_url).
    #[error("invalid embedder config: {0}")]
    InvalidConfig(String),
    /// The HTTP request to the encoder service failed at the transport level.
    #[error("embedding request failed: {0}")]
    Request(String),
    /// The encoder service answered, but with an error status or a response
    /// the client could not use (bad shape, wrong vector count).
    #[error("embedding backend error: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_config() {
        let err = EmbedderError::InvalidConfig("api_url is required".into());
        assert!(err.to_string().contains("invalid embedder config"));
        assert!(err.to_string().contains("api_url is required"));
    }

    #[test]
    fn error_request() {
        let err = EmbedderError::Request("connection refused".into());
        assert!(err.to_string().contains("embedding request failed"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn error_backend() {
        let err = EmbedderError::Backend("HTTP 500".into());
        assert!(err.to_string().contains("embedding backend error"));
        assert!(err.to_string().contains("HTTP 500"));
    }
}
