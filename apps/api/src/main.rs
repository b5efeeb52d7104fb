mod catalog;
mod config;
mod errors;
mod gaps;
mod matching;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::{CatalogProvider, InMemoryCatalog};
use crate::config::Config;
use crate::gaps::analyzer::GapConfig;
use crate::gaps::taxonomy::SkillTaxonomy;
use crate::matching::external::{NullScoringService, RemoteScoringService, ScoringService};
use crate::matching::ranking::RankingConfig;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Disha API v{}", env!("CARGO_PKG_VERSION"));

    // Skill taxonomy: config file if given, built-in defaults otherwise.
    // Read-only for the lifetime of the process.
    let taxonomy = match &config.taxonomy_path {
        Some(path) => Arc::new(SkillTaxonomy::from_json_file(path)?),
        None => Arc::new(SkillTaxonomy::builtin()),
    };
    info!(
        "Skill taxonomy loaded: {} categories, {} skills with resources",
        taxonomy.categories.len(),
        taxonomy.resources.len()
    );

    // Catalog provider
    let catalog: Arc<dyn CatalogProvider> = match &config.catalog_path {
        Some(path) => Arc::new(InMemoryCatalog::from_json_file(path)?),
        None => Arc::new(InMemoryCatalog::seeded()),
    };

    // Scoring service: external-first when configured, fallback-only otherwise
    let scoring_timeout = Duration::from_millis(config.scoring_timeout_ms);
    let scorer: Arc<dyn ScoringService> = match &config.scoring_service_url {
        Some(url) => {
            info!("Remote scoring service configured: {url}");
            Arc::new(RemoteScoringService::new(
                url.clone(),
                config.scoring_service_api_key.clone(),
                scoring_timeout,
            ))
        }
        None => {
            info!("No scoring service configured, using deterministic fallback only");
            Arc::new(NullScoringService)
        }
    };

    let ranking_config = RankingConfig {
        high_stipend_threshold: config.high_stipend_threshold,
        external_timeout: scoring_timeout,
        ..Default::default()
    };
    let gap_config = GapConfig::default();

    let state = AppState {
        config: config.clone(),
        scorer,
        catalog,
        taxonomy,
        ranking_config,
        gap_config,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
