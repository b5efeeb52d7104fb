//! Skill Taxonomy — static mapping from opportunity categories to skill
//! requirements, and from skills to curated learning resources.
//!
//! Loaded once at process start (built-in defaults or a JSON file) and held
//! read-only in `AppState` for the lifetime of the process. Resource coverage
//! is intentionally partial: a skill without curated resources yields an
//! empty slice, not an error. An unknown category, by contrast, is a typed
//! error — callers must treat it as "no gap data available", never a crash.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Course,
    Video,
    Documentation,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningResource {
    pub name: String,
    pub kind: ResourceKind,
    pub duration: String,
    pub free: bool,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEntry {
    /// Taxonomy key, matched case-insensitively ("data-analytics").
    pub key: String,
    pub display_name: String,
    pub required: Vec<String>,
    #[serde(default)]
    pub preferred: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillResources {
    pub skill: String,
    pub entries: Vec<LearningResource>,
}

/// The full taxonomy. Declaration order of categories and resources is
/// preserved — it drives deterministic iteration everywhere downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillTaxonomy {
    pub categories: Vec<CategoryEntry>,
    pub resources: Vec<SkillResources>,
}

impl SkillTaxonomy {
    pub fn requirements_for(&self, category: &str) -> Result<&CategoryEntry, TaxonomyError> {
        self.categories
            .iter()
            .find(|c| c.key.eq_ignore_ascii_case(category.trim()))
            .ok_or_else(|| TaxonomyError::UnknownCategory(category.to_string()))
    }

    /// Curated resources for a skill, in declaration order. Empty for skills
    /// with no curated entry. Exact case-insensitive key lookup: short names
    /// like "R" must never resolve by substring.
    pub fn resources_for(&self, skill: &str) -> &[LearningResource] {
        self.resources
            .iter()
            .find(|r| r.skill.eq_ignore_ascii_case(skill.trim()))
            .map(|r| r.entries.as_slice())
            .unwrap_or(&[])
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read taxonomy file {}", path.display()))?;
        let taxonomy: SkillTaxonomy = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse taxonomy file {}", path.display()))?;
        Ok(taxonomy)
    }

    /// Built-in defaults covering the five launch career paths.
    pub fn builtin() -> Self {
        let categories = vec![
            category(
                "data-analytics",
                "Data Analytics",
                &["Python", "SQL", "Excel", "Statistics", "Power BI"],
                &["Machine Learning", "R", "Tableau", "Data Visualization"],
            ),
            category(
                "software-development",
                "Software Development",
                &["JavaScript", "HTML", "CSS", "Git", "Problem Solving"],
                &["React", "Node.js", "TypeScript", "Database Design"],
            ),
            category(
                "digital-marketing",
                "Digital Marketing",
                &["Digital Marketing", "Content Writing", "Social Media", "Analytics"],
                &["SEO", "Google Ads", "Graphic Design", "Video Editing"],
            ),
            category(
                "finance",
                "Financial Analysis",
                &["Finance", "Excel", "Financial Modeling", "Accounting"],
                &["Python", "VBA", "Bloomberg Terminal", "Investment Analysis"],
            ),
            category(
                "design",
                "UI/UX Design",
                &["Figma", "User Research", "Wireframing", "Prototyping"],
                &["Adobe Creative Suite", "HTML/CSS", "User Testing", "Design Systems"],
            ),
        ];

        let resources = vec![
            skill_resources(
                "Python",
                vec![
                    course("Python for Everybody (Coursera)", "8 weeks"),
                    video("Python Programming Tutorial", "12 hours"),
                ],
            ),
            skill_resources(
                "SQL",
                vec![
                    course("SQL Basics (SWAYAM)", "6 weeks"),
                    video("SQL Tutorial for Beginners", "4 hours"),
                ],
            ),
            skill_resources(
                "Excel",
                vec![
                    course("Excel Skills for Business", "6 weeks"),
                    video("Advanced Excel Tutorial", "8 hours"),
                ],
            ),
            skill_resources(
                "JavaScript",
                vec![
                    course("JavaScript Fundamentals (freeCodeCamp)", "10 weeks"),
                    video("JS Complete Course", "22 hours"),
                ],
            ),
            skill_resources(
                "React",
                vec![
                    LearningResource {
                        name: "React Official Tutorial".to_string(),
                        kind: ResourceKind::Documentation,
                        duration: "2 weeks".to_string(),
                        free: true,
                        url: "https://react.dev/learn".to_string(),
                    },
                    video("React Full Course", "12 hours"),
                ],
            ),
            skill_resources(
                "Digital Marketing",
                vec![
                    course("Google Digital Marketing Course", "8 weeks"),
                    video("Digital Marketing Masterclass", "15 hours"),
                ],
            ),
            skill_resources(
                "Machine Learning",
                vec![
                    course("ML for Everyone (SWAYAM)", "12 weeks"),
                    video("Machine Learning Basics", "20 hours"),
                ],
            ),
            skill_resources(
                "Figma",
                vec![
                    course("Figma Academy", "4 weeks"),
                    video("Figma Complete Tutorial", "6 hours"),
                ],
            ),
        ];

        SkillTaxonomy {
            categories,
            resources,
        }
    }
}

fn category(key: &str, display_name: &str, required: &[&str], preferred: &[&str]) -> CategoryEntry {
    CategoryEntry {
        key: key.to_string(),
        display_name: display_name.to_string(),
        required: required.iter().map(|s| s.to_string()).collect(),
        preferred: preferred.iter().map(|s| s.to_string()).collect(),
    }
}

fn skill_resources(skill: &str, entries: Vec<LearningResource>) -> SkillResources {
    SkillResources {
        skill: skill.to_string(),
        entries,
    }
}

fn course(name: &str, duration: &str) -> LearningResource {
    LearningResource {
        name: name.to_string(),
        kind: ResourceKind::Course,
        duration: duration.to_string(),
        free: true,
        url: String::new(),
    }
}

fn video(name: &str, duration: &str) -> LearningResource {
    LearningResource {
        name: name.to_string(),
        kind: ResourceKind::Video,
        duration: duration.to_string(),
        free: true,
        url: String::new(),
    }
}
