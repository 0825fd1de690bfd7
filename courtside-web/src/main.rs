//! courtside-web - Post board, score lookup, and vote tally service
//!
//! Single start command: ensures the schema exists, then serves.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use courtside_common::config::{Config, ConfigOverrides};
use courtside_common::db::init_database;
use courtside_web::services::schedule::ScheduleClient;
use courtside_web::{build_router, AppState};

/// Command-line arguments (highest-priority config overrides)
#[derive(Debug, Parser)]
#[command(name = "courtside-web", version)]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long)]
    bind_addr: Option<String>,

    /// Path to the SQLite database file
    #[arg(long)]
    database_path: Option<PathBuf>,

    /// Base URL of the external schedule provider
    #[arg(long)]
    provider_base_url: Option<String>,

    /// API key for the schedule provider
    #[arg(long)]
    provider_api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Courtside (courtside-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();
    let config = Config::resolve(ConfigOverrides {
        bind_addr: args.bind_addr,
        database_path: args.database_path,
        provider_base_url: args.provider_base_url,
        provider_api_key: args.provider_api_key,
    })?;

    if config.provider_api_key.is_empty() {
        warn!("No provider API key configured; score lookups will fail on cache misses");
    }

    info!("Database path: {}", config.database_path.display());
    let pool = init_database(&config.database_path).await?;

    let provider = ScheduleClient::new(
        config.provider_base_url.clone(),
        config.provider_api_key.clone(),
    )?;

    let state = AppState::new(pool, provider);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("courtside-web listening on http://{}", config.bind_addr);
    info!("Health check: http://{}/health", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
