//! Showcase: featured-projects API server
//!
//! Loads configuration from the environment and serves:
//! - Featured projects at /api/projects/featured
//! - Health check at /healthz

use showcase::{config::Config, server::start_server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to 0.0.0.0:3004 and data/showcase.db
    let config = Config::default();

    start_server(config).await?;

    Ok(())
}
