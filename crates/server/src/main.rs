//! Proximity Server - HTTP REST API for semantic proximity ranking
//!
//! This binary exposes batch embedding, similarity ranking, and proximity
//! word generation over REST endpoints.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up .env overrides before reading configuration
    dotenvy::dotenv().ok();

    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}
