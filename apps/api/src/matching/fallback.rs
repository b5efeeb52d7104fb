//! Deterministic fallback scorer, used whenever the external scoring service
//! is unavailable for an item. Pure function over profile and opportunity —
//! same inputs, same score, every time.

use crate::matching::skill_match::{contains_ci, interest_matches, skills_match};
use crate::models::opportunity::Opportunity;
use crate::models::profile::Profile;

pub const MIN_SCORE: u32 = 60;
pub const MAX_SCORE: u32 = 95;
const SKILL_WEIGHT: u32 = 30;
const INTEREST_BONUS: u32 = 15;
const LOCATION_BONUS: u32 = 10;

/// Structural-overlap match score in `[MIN_SCORE, MAX_SCORE]`.
///
/// Base 60, plus `30 * matched / |skills|` (integer floor) for skill overlap,
/// a flat 15 for an interest hit in the title or description, and a flat 10
/// for a preferred-location hit. Clamped so fallback and external scores stay
/// in comparable ranges within one batch.
pub fn score(profile: &Profile, opportunity: &Opportunity) -> u32 {
    let all_skills = opportunity.all_skills();
    let matched = profile
        .skills
        .iter()
        .filter(|s| all_skills.iter().any(|r| skills_match(s.as_str(), r)))
        .count() as u32;

    let mut score = MIN_SCORE;
    score += (SKILL_WEIGHT * matched) / (all_skills.len().max(1) as u32);

    if profile.interests.iter().any(|interest| {
        interest_matches(&opportunity.title, interest)
            || interest_matches(&opportunity.description, interest)
    }) {
        score += INTEREST_BONUS;
    }

    if let Some(location) = profile.preferred_location.as_deref() {
        if contains_ci(&opportunity.location, location) {
            score += LOCATION_BONUS;
        }
    }

    score.clamp(MIN_SCORE, MAX_SCORE)
}
