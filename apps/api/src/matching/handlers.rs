//! Axum route handlers for the ranking API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::ranking::{rank, MatchResult};
use crate::models::opportunity::Opportunity;
use crate::models::profile::Profile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub profile: Profile,
    pub top_n: i64,
    /// Inline catalog snapshot; omitted, the configured provider supplies one.
    #[serde(default)]
    pub catalog: Option<Vec<Opportunity>>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub results: Vec<MatchResult>,
    pub summary: RankSummary,
}

#[derive(Debug, Serialize)]
pub struct RankSummary {
    pub total_ranked: usize,
    pub average_score: u32,
    /// Results scoring above 85 — the "high matches" stat.
    pub high_match_count: usize,
}

/// POST /api/v1/rank
///
/// Ranks the catalog for one profile and returns the ordered shortlist.
/// Repeated calls with different profiles against the same catalog are
/// independent — nothing is cached or persisted between requests.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    if request.top_n < 1 {
        return Err(AppError::Validation(format!(
            "top_n must be at least 1, got {}",
            request.top_n
        )));
    }

    let catalog = match request.catalog {
        Some(catalog) => catalog,
        None => state.catalog.snapshot().await?,
    };

    let results = rank(
        &request.profile,
        &catalog,
        request.top_n as usize,
        state.scorer.as_ref(),
        &state.ranking_config,
    )
    .await?;

    let summary = summarize(&results);
    Ok(Json(RankResponse { results, summary }))
}

fn summarize(results: &[MatchResult]) -> RankSummary {
    let total_ranked = results.len();
    let average_score = if total_ranked == 0 {
        0
    } else {
        let sum: u32 = results.iter().map(|r| r.score).sum();
        (f64::from(sum) / total_ranked as f64).round() as u32
    };
    let high_match_count = results.iter().filter(|r| r.score > 85).count();
    RankSummary {
        total_ranked,
        average_score,
        high_match_count,
    }
}
