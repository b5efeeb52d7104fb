//! External Scorer Adapter — the single point of entry for remote match
//! analysis calls.
//!
//! ARCHITECTURAL RULE: no other module may talk to the analysis service
//! directly. Every failure mode here (transport, status, parse, out-of-range
//! score) collapses into `ScoreUnavailable` so the ranking loop can fall back
//! per item; nothing in this module is fatal to a rank request.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::opportunity::Opportunity;
use crate::models::profile::Profile;

/// Soft failure: the external scorer could not produce a result for this item.
#[derive(Debug, Error)]
#[error("scoring service unavailable: {0}")]
pub struct ScoreUnavailable(pub String);

/// Normalized result of one remote analysis call.
#[derive(Debug, Clone)]
pub struct ExternalScore {
    /// Always in 0–100; anything else from the wire is rejected as unavailable.
    pub score: u32,
    pub rationale: Option<String>,
}

/// Pluggable scoring capability. Carried in `AppState` as `Arc<dyn ScoringService>`
/// and swapped at startup via config. Stateless between calls; one attempt per
/// item — retry policy, if any, belongs to the caller.
#[async_trait]
pub trait ScoringService: Send + Sync {
    async fn try_score(
        &self,
        profile: &Profile,
        opportunity: &Opportunity,
    ) -> Result<ExternalScore, ScoreUnavailable>;
}

/// Installed when no scoring service is configured: every item falls back.
pub struct NullScoringService;

#[async_trait]
impl ScoringService for NullScoringService {
    async fn try_score(
        &self,
        _profile: &Profile,
        _opportunity: &Opportunity,
    ) -> Result<ExternalScore, ScoreUnavailable> {
        Err(ScoreUnavailable("no scoring service configured".to_string()))
    }
}

#[derive(Debug, Serialize)]
struct AnalysisRequest<'a> {
    resume_text: String,
    skills: &'a [String],
    interests: &'a [String],
    required_skills: &'a [String],
    preferred_skills: &'a [String],
    opportunity_description: String,
}

#[derive(Debug, Deserialize)]
struct AnalysisResponse {
    analysis: AnalysisBody,
}

#[derive(Debug, Deserialize)]
struct AnalysisBody {
    overall_match_score: i64,
    #[serde(default)]
    detailed_analysis: Option<String>,
}

/// HTTP-backed scorer talking to a remote match-analysis service.
pub struct RemoteScoringService {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl RemoteScoringService {
    pub fn new(url: String, api_key: Option<String>, timeout: std::time::Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            url,
            api_key,
        }
    }
}

#[async_trait]
impl ScoringService for RemoteScoringService {
    async fn try_score(
        &self,
        profile: &Profile,
        opportunity: &Opportunity,
    ) -> Result<ExternalScore, ScoreUnavailable> {
        let request_body = AnalysisRequest {
            resume_text: profile.experience.clone().unwrap_or_default(),
            skills: &profile.skills,
            interests: &profile.interests,
            required_skills: &opportunity.required_skills,
            preferred_skills: &opportunity.preferred_skills,
            opportunity_description: format!(
                "{} at {}: {}",
                opportunity.title, opportunity.organization, opportunity.description
            ),
        };

        let mut request = self.client.post(&self.url).json(&request_body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ScoreUnavailable(format!("transport error: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScoreUnavailable(format!("status {status}")));
        }

        let body: AnalysisResponse = response
            .json()
            .await
            .map_err(|e| ScoreUnavailable(format!("malformed response: {e}")))?;

        let score = normalize_score(body.analysis.overall_match_score)?;
        debug!(
            "external score {} for '{}'",
            score, opportunity.title
        );

        Ok(ExternalScore {
            score,
            rationale: body.analysis.detailed_analysis,
        })
    }
}

/// Rejects scores outside 0–100 rather than clamping; the item falls back.
fn normalize_score(raw: i64) -> Result<u32, ScoreUnavailable> {
    if (0..=100).contains(&raw) {
        Ok(raw as u32)
    } else {
        Err(ScoreUnavailable(format!("score {raw} out of range")))
    }
}
