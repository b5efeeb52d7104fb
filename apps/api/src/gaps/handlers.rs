//! Axum route handlers for the skill-gap API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::gaps::analyzer::{analyze, GapAnalysis};
use crate::models::profile::Profile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeGapsRequest {
    pub profile: Profile,
    /// Target categories; omitted or empty, categories are derived from the
    /// profile's interests (falling back to the configured defaults).
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

/// POST /api/v1/analyze-gaps
pub async fn handle_analyze_gaps(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeGapsRequest>,
) -> Result<Json<GapAnalysis>, AppError> {
    let categories = request.categories.unwrap_or_default();
    let analysis = analyze(
        &request.profile,
        &categories,
        &state.taxonomy,
        &state.gap_config,
    )?;
    Ok(Json(analysis))
}
