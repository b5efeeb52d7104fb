//! Gap Analyzer — compares a profile's skills against category requirements
//! and builds a prioritized, resource-bound learning path.
//!
//! Category-level failures are soft: an unknown category is skipped with a
//! warning, never aborting the remaining categories. The only fatal condition
//! is a malformed profile.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::gaps::taxonomy::{LearningResource, SkillTaxonomy};
use crate::matching::skill_match::{interest_matches, profile_has_skill};
use crate::models::profile::Profile;

#[derive(Debug, Clone)]
pub struct GapConfig {
    /// Cap on the merged priority list.
    pub max_priority_skills: usize,
    /// Resources bound per priority skill, in taxonomy-declared order.
    pub resources_per_skill: usize,
    /// Used when neither the caller nor the profile's interests select any
    /// category.
    pub default_categories: Vec<String>,
}

impl Default for GapConfig {
    fn default() -> Self {
        Self {
            max_priority_skills: 6,
            resources_per_skill: 2,
            default_categories: vec![
                "data-analytics".to_string(),
                "software-development".to_string(),
            ],
        }
    }
}

/// Per-category breakdown of possessed vs missing skills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGapReport {
    pub category: String,
    pub display_name: String,
    pub possessed_required: Vec<String>,
    pub missing_required: Vec<String>,
    /// Possessed preferred skills are not separately reported.
    pub missing_preferred: Vec<String>,
    /// 0–100, rounded; 100 when the category declares no required skills.
    pub completion_pct: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrioritySkill {
    pub skill: String,
    pub resources: Vec<LearningResource>,
}

/// Aggregate result of one analysis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub per_category: Vec<SkillGapReport>,
    pub priority: Vec<PrioritySkill>,
    /// Count of distinct missing skills across all categories, before the
    /// resource filter and the priority cap.
    pub total_missing_skills: usize,
    pub average_completion_pct: u32,
}

/// Analyzes `profile` against `categories`. With no categories given, derives
/// them from the profile's interests (category display name contains an
/// interest term), falling back to `cfg.default_categories`.
pub fn analyze(
    profile: &Profile,
    categories: &[String],
    taxonomy: &SkillTaxonomy,
    cfg: &GapConfig,
) -> Result<GapAnalysis, AppError> {
    profile.validate()?;

    let categories = if categories.is_empty() {
        derive_categories(profile, taxonomy, cfg)
    } else {
        categories.to_vec()
    };

    let mut per_category = Vec::new();
    // First-seen order across categories, required before preferred.
    let mut missing_union: Vec<String> = Vec::new();

    for category in &categories {
        let entry = match taxonomy.requirements_for(category) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping category in gap analysis: {e}");
                continue;
            }
        };

        let (possessed_required, missing_required): (Vec<String>, Vec<String>) = entry
            .required
            .iter()
            .cloned()
            .partition(|skill| profile_has_skill(&profile.skills, skill));

        let missing_preferred: Vec<String> = entry
            .preferred
            .iter()
            .filter(|skill| !profile_has_skill(&profile.skills, skill.as_str()))
            .cloned()
            .collect();

        let completion_pct = completion_pct(possessed_required.len(), entry.required.len());

        for skill in missing_required.iter().chain(missing_preferred.iter()) {
            push_unique(&mut missing_union, skill);
        }

        per_category.push(SkillGapReport {
            category: entry.key.clone(),
            display_name: entry.display_name.clone(),
            possessed_required,
            missing_required,
            missing_preferred,
            completion_pct,
        });
    }

    let priority: Vec<PrioritySkill> = missing_union
        .iter()
        .filter(|skill| !taxonomy.resources_for(skill.as_str()).is_empty())
        .take(cfg.max_priority_skills)
        .map(|skill| PrioritySkill {
            skill: skill.clone(),
            resources: taxonomy
                .resources_for(skill)
                .iter()
                .take(cfg.resources_per_skill)
                .cloned()
                .collect(),
        })
        .collect();

    let average_completion_pct = if per_category.is_empty() {
        0
    } else {
        let sum: u32 = per_category.iter().map(|r| r.completion_pct).sum();
        (f64::from(sum) / per_category.len() as f64).round() as u32
    };

    Ok(GapAnalysis {
        total_missing_skills: missing_union.len(),
        per_category,
        priority,
        average_completion_pct,
    })
}

fn completion_pct(possessed: usize, required: usize) -> u32 {
    if required == 0 {
        // A category with no required skills is complete by definition.
        return 100;
    }
    (100.0 * possessed as f64 / required as f64).round() as u32
}

fn derive_categories(profile: &Profile, taxonomy: &SkillTaxonomy, cfg: &GapConfig) -> Vec<String> {
    let derived: Vec<String> = taxonomy
        .categories
        .iter()
        .filter(|c| {
            profile
                .interests
                .iter()
                .any(|interest| interest_matches(&c.display_name, interest))
        })
        .map(|c| c.key.clone())
        .collect();

    if derived.is_empty() {
        cfg.default_categories.clone()
    } else {
        derived
    }
}

fn push_unique(seen: &mut Vec<String>, skill: &str) {
    if !seen.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
        seen.push(skill.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gaps::taxonomy::{CategoryEntry, ResourceKind};

    fn make_profile(skills: Vec<&str>, interests: Vec<&str>) -> Profile {
        Profile {
            skills: skills.into_iter().map(String::from).collect(),
            interests: interests.into_iter().map(String::from).collect(),
            ..Default::default()
        }
    }

    fn cats(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_partition_and_completion_fifty_percent() {
        let taxonomy = SkillTaxonomy {
            categories: vec![CategoryEntry {
                key: "sample".to_string(),
                display_name: "Sample".to_string(),
                required: vec!["A".to_string(), "B".to_string()],
                preferred: vec!["C".to_string()],
            }],
            resources: vec![],
        };
        let profile = make_profile(vec!["A"], vec![]);
        let analysis =
            analyze(&profile, &cats(&["sample"]), &taxonomy, &Default::default()).unwrap();

        let report = &analysis.per_category[0];
        assert_eq!(report.possessed_required, vec!["A"]);
        assert_eq!(report.missing_required, vec!["B"]);
        assert_eq!(report.missing_preferred, vec!["C"]);
        assert_eq!(report.completion_pct, 50);
        assert_eq!(analysis.total_missing_skills, 2);
    }

    #[test]
    fn test_fully_possessed_category_is_complete() {
        let taxonomy = SkillTaxonomy::builtin();
        let profile = make_profile(
            vec!["Finance", "Excel", "Financial Modeling", "Accounting"],
            vec![],
        );
        let analysis =
            analyze(&profile, &cats(&["finance"]), &taxonomy, &Default::default()).unwrap();
        let report = &analysis.per_category[0];
        assert_eq!(report.completion_pct, 100);
        assert!(report.missing_required.is_empty());
    }

    #[test]
    fn test_empty_required_list_is_complete_not_division_error() {
        let taxonomy = SkillTaxonomy {
            categories: vec![CategoryEntry {
                key: "open".to_string(),
                display_name: "Open Category".to_string(),
                required: vec![],
                preferred: vec!["Anything".to_string()],
            }],
            resources: vec![],
        };
        let profile = make_profile(vec![], vec![]);
        let analysis = analyze(&profile, &cats(&["open"]), &taxonomy, &Default::default()).unwrap();
        assert_eq!(analysis.per_category[0].completion_pct, 100);
    }

    #[test]
    fn test_unknown_category_is_skipped_not_fatal() {
        let taxonomy = SkillTaxonomy::builtin();
        let profile = make_profile(vec!["Python"], vec![]);
        let analysis = analyze(
            &profile,
            &cats(&["astrology", "data-analytics"]),
            &taxonomy,
            &Default::default(),
        )
        .unwrap();
        assert_eq!(analysis.per_category.len(), 1);
        assert_eq!(analysis.per_category[0].category, "data-analytics");
    }

    #[test]
    fn test_priority_respects_cap_and_resource_filter() {
        let taxonomy = SkillTaxonomy::builtin();
        let profile = make_profile(vec![], vec![]);
        // Both default categories: far more than six missing skills, only
        // some of which carry curated resources.
        let analysis = analyze(
            &profile,
            &cats(&["data-analytics", "software-development"]),
            &taxonomy,
            &Default::default(),
        )
        .unwrap();
        assert!(analysis.priority.len() <= 6);
        for entry in &analysis.priority {
            assert!(
                !taxonomy.resources_for(&entry.skill).is_empty(),
                "{} has no resources",
                entry.skill
            );
            assert!(entry.resources.len() <= 2);
        }
    }

    #[test]
    fn test_priority_keeps_first_seen_order() {
        let taxonomy = SkillTaxonomy::builtin();
        let profile = make_profile(vec![], vec![]);
        let analysis = analyze(
            &profile,
            &cats(&["data-analytics"]),
            &taxonomy,
            &Default::default(),
        )
        .unwrap();
        // Required missing skills with resources come before preferred ones.
        let skills: Vec<&str> = analysis.priority.iter().map(|p| p.skill.as_str()).collect();
        assert_eq!(skills, vec!["Python", "SQL", "Excel", "Machine Learning"]);
    }

    #[test]
    fn test_priority_resources_are_bound_in_taxonomy_order() {
        let taxonomy = SkillTaxonomy::builtin();
        let profile = make_profile(vec![], vec![]);
        let analysis = analyze(
            &profile,
            &cats(&["data-analytics"]),
            &taxonomy,
            &Default::default(),
        )
        .unwrap();
        let python = &analysis.priority[0];
        assert_eq!(python.skill, "Python");
        assert_eq!(python.resources.len(), 2);
        assert_eq!(python.resources[0].kind, ResourceKind::Course);
    }

    #[test]
    fn test_empty_categories_derive_from_interests() {
        let taxonomy = SkillTaxonomy::builtin();
        let profile = make_profile(vec![], vec!["Finance"]);
        let analysis = analyze(&profile, &[], &taxonomy, &Default::default()).unwrap();
        assert_eq!(analysis.per_category.len(), 1);
        assert_eq!(analysis.per_category[0].category, "finance");
    }

    #[test]
    fn test_no_interests_fall_back_to_default_categories() {
        let taxonomy = SkillTaxonomy::builtin();
        let profile = make_profile(vec![], vec![]);
        let analysis = analyze(&profile, &[], &taxonomy, &Default::default()).unwrap();
        let keys: Vec<&str> = analysis
            .per_category
            .iter()
            .map(|r| r.category.as_str())
            .collect();
        assert_eq!(keys, vec!["data-analytics", "software-development"]);
    }

    #[test]
    fn test_average_completion_is_rounded_mean() {
        let taxonomy = SkillTaxonomy {
            categories: vec![
                CategoryEntry {
                    key: "a".to_string(),
                    display_name: "A".to_string(),
                    required: vec!["X".to_string(), "Y".to_string()],
                    preferred: vec![],
                },
                CategoryEntry {
                    key: "b".to_string(),
                    display_name: "B".to_string(),
                    required: vec!["X".to_string()],
                    preferred: vec![],
                },
            ],
            resources: vec![],
        };
        let profile = make_profile(vec!["X"], vec![]);
        let analysis = analyze(&profile, &cats(&["a", "b"]), &taxonomy, &Default::default()).unwrap();
        // (50 + 100) / 2 = 75
        assert_eq!(analysis.average_completion_pct, 75);
    }

    #[test]
    fn test_duplicate_skills_rejected() {
        let taxonomy = SkillTaxonomy::builtin();
        let profile = make_profile(vec!["Python", "PYTHON"], vec![]);
        assert!(analyze(&profile, &[], &taxonomy, &Default::default()).is_err());
    }
}
