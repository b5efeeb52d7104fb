use std::sync::Arc;

use crate::catalog::CatalogProvider;
use crate::config::Config;
use crate::gaps::analyzer::GapConfig;
use crate::gaps::taxonomy::SkillTaxonomy;
use crate::matching::external::ScoringService;
use crate::matching::ranking::RankingConfig;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup — no locks anywhere.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable scorer. RemoteScoringService when SCORING_SERVICE_URL is set,
    /// NullScoringService otherwise.
    pub scorer: Arc<dyn ScoringService>,
    pub catalog: Arc<dyn CatalogProvider>,
    pub taxonomy: Arc<SkillTaxonomy>,
    pub ranking_config: RankingConfig,
    pub gap_config: GapConfig,
}
