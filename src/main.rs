//! EMI intake server
//!
//! Serves the form, validates posts and stores accepted submissions in
//! MongoDB. Exits non-zero when configuration is invalid or the database
//! cannot be reached at startup.

use anyhow::{Context, Result};
use intake::config::IntakeConfig;
use intake::server::ServerBuilder;
use intake::storage::MongoSubmissionStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = IntakeConfig::load().context("Invalid configuration")?;

    let store = MongoSubmissionStore::connect(&config)
        .await
        .context("MongoDB connection error")?;

    ServerBuilder::new()
        .with_store(store)
        .with_static_dir(&config.static_dir)
        .serve(&config.bind_addr())
        .await
}
