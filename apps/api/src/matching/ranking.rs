//! Ranking Engine — scores every active opportunity for one profile and
//! returns a stable top-N ordering with badges and a rationale per item.
//!
//! External scorer first, deterministic fallback second; the two paths are
//! mutually exclusive per item and a per-item failure never aborts the batch.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::external::ScoringService;
use crate::matching::fallback;
use crate::matching::skill_match::{interest_matches, profile_has_skill};
use crate::models::opportunity::Opportunity;
use crate::models::profile::Profile;

pub const BACKEND_EXTERNAL: &str = "external";
pub const BACKEND_FALLBACK: &str = "fallback";

/// Badge thresholds and the bounded wait imposed on each external call.
/// The stipend cutoff and remote/tech labels are configuration, not code.
#[derive(Debug, Clone)]
pub struct RankingConfig {
    pub top_match_threshold: u32,
    pub high_stipend_threshold: u32,
    pub remote_work_type: String,
    pub beginner_difficulty: String,
    pub tech_category: String,
    pub external_timeout: Duration,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_match_threshold: 90,
            high_stipend_threshold: 20_000,
            remote_work_type: "remote".to_string(),
            beginner_difficulty: "beginner".to_string(),
            tech_category: "tech".to_string(),
            external_timeout: Duration::from_millis(4_000),
        }
    }
}

/// One ranked recommendation. Computed fresh per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub opportunity_id: Uuid,
    pub title: String,
    pub organization: String,
    pub score: u32,
    /// Opportunity skills the candidate covers, in the opportunity's order.
    pub matched_skills: Vec<String>,
    /// Insertion order follows the badge rule list.
    pub badges: Vec<String>,
    pub rationale: String,
    /// "external" | "fallback" — for transparency.
    pub scorer_backend: String,
}

/// Ranks `catalog` for `profile` and returns at most `top_n` results.
///
/// Inactive opportunities are excluded before scoring. Each active item is
/// scored by the external service under a bounded wait; on unavailability or
/// timeout that single item downgrades to the fallback score. Sorting is
/// stable: ties keep catalog order, so identical inputs always produce an
/// identical ranking.
pub async fn rank(
    profile: &Profile,
    catalog: &[Opportunity],
    top_n: usize,
    scorer: &dyn ScoringService,
    cfg: &RankingConfig,
) -> Result<Vec<MatchResult>, AppError> {
    if top_n == 0 {
        return Err(AppError::Validation("top_n must be at least 1".to_string()));
    }
    if catalog.is_empty() {
        return Err(AppError::Validation("catalog is empty".to_string()));
    }
    profile.validate()?;

    let active: Vec<&Opportunity> = catalog.iter().filter(|o| o.is_active).collect();
    let mut results = Vec::with_capacity(active.len());

    for opportunity in active {
        let (score, external_rationale, backend) =
            match tokio::time::timeout(cfg.external_timeout, scorer.try_score(profile, opportunity))
                .await
            {
                Ok(Ok(external)) => (external.score, external.rationale, BACKEND_EXTERNAL),
                Ok(Err(unavailable)) => {
                    debug!("falling back for '{}': {unavailable}", opportunity.title);
                    (fallback::score(profile, opportunity), None, BACKEND_FALLBACK)
                }
                Err(_) => {
                    warn!(
                        "scoring service timed out for '{}', falling back",
                        opportunity.title
                    );
                    (fallback::score(profile, opportunity), None, BACKEND_FALLBACK)
                }
            };

        let matched_skills = matched_skills(profile, opportunity);
        let badges = assign_badges(score, opportunity, cfg);
        let rationale = external_rationale
            .unwrap_or_else(|| build_rationale(&matched_skills, profile, opportunity));

        results.push(MatchResult {
            opportunity_id: opportunity.id,
            title: opportunity.title.clone(),
            organization: opportunity.organization.clone(),
            score,
            matched_skills,
            badges,
            rationale,
            scorer_backend: backend.to_string(),
        });
    }

    // Stable sort: equal scores keep catalog order.
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(top_n);
    Ok(results)
}

/// Opportunity skills (required then preferred, deduplicated) that the
/// candidate covers under the permissive matcher, in opportunity order.
fn matched_skills(profile: &Profile, opportunity: &Opportunity) -> Vec<String> {
    opportunity
        .all_skills()
        .into_iter()
        .filter(|skill| profile_has_skill(&profile.skills, skill))
        .map(String::from)
        .collect()
}

fn assign_badges(score: u32, opportunity: &Opportunity, cfg: &RankingConfig) -> Vec<String> {
    let mut badges = Vec::new();
    if score >= cfg.top_match_threshold {
        badges.push("Top Match".to_string());
    }
    if opportunity.stipend >= cfg.high_stipend_threshold {
        badges.push("High Stipend".to_string());
    }
    if opportunity.work_type.eq_ignore_ascii_case(&cfg.remote_work_type) {
        badges.push("Remote".to_string());
    }
    if opportunity
        .difficulty_level
        .eq_ignore_ascii_case(&cfg.beginner_difficulty)
    {
        badges.push("Beginner Friendly".to_string());
    }
    if opportunity.category.eq_ignore_ascii_case(&cfg.tech_category) {
        badges.push("Tech Heavy".to_string());
    }
    badges
}

fn build_rationale(
    matched_skills: &[String],
    profile: &Profile,
    opportunity: &Opportunity,
) -> String {
    let mut parts = Vec::new();
    if !matched_skills.is_empty() {
        parts.push(format!("Matches {} of your skills.", matched_skills.len()));
    }
    if profile
        .interests
        .iter()
        .any(|interest| interest_matches(&opportunity.title, interest))
    {
        parts.push("Aligns with your interests.".to_string());
    }
    parts.push(format!(
        "Good growth opportunity in {}.",
        opportunity.organization
    ));
    parts.join(" ")
}
