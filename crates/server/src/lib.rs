//! Proximity Server - HTTP REST API for semantic proximity ranking
//!
//! This crate provides the HTTP transport in front of the ranking engine. It
//! supports:
//!
//! - **Batch Embedding**: Encode raw text batches into unit-norm vectors
//! - **Similarity Ranking**: Rank a candidate list against a query string
//! - **Proximity Generation**: Discover synonyms/near-terms for a keyword,
//!   with the cached product vocabulary as the default candidate pool
//! - **Health Probes**: Liveness and readiness endpoints
//!
//! The transport deliberately stays thin: it coerces inputs, hands them to
//! the engine, and maps engine outcomes onto HTTP statuses. Degenerate
//! inputs (empty query, empty candidate list) are successful empty results,
//! never errors.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `POST /api/v1/embed` - Encode a batch of texts
//! - `POST /api/v1/rank` - Rank candidates against a query
//! - `POST /api/v1/proximity` - Generate proximity words for a keyword
//! - `GET /api/v1/vocabulary` - Inspect the cached default candidates

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
