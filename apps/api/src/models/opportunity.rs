use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One internship/position record from the catalog.
///
/// Owned by the caller (or the catalog provider); the engine never mutates
/// these and only reads them during a single rank or gap-analysis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: Uuid,
    pub title: String,
    pub organization: String,
    /// Taxonomy key, e.g. "data-analytics" or "tech".
    pub category: String,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    pub location: String,
    /// Monthly stipend in currency minor-unit-agnostic integers.
    #[serde(default)]
    pub stipend: u32,
    #[serde(default)]
    pub current_applications: u32,
    #[serde(default)]
    pub max_applications: Option<u32>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub application_deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    pub description: String,
    #[serde(default)]
    pub duration: Option<String>,
    /// "full-time", "hybrid", "remote" — drives the Remote badge.
    #[serde(default = "default_work_type")]
    pub work_type: String,
    /// "beginner", "intermediate", "advanced" — drives the Beginner Friendly badge.
    #[serde(default = "default_difficulty")]
    pub difficulty_level: String,
}

fn default_active() -> bool {
    true
}

fn default_work_type() -> String {
    "full-time".to_string()
}

fn default_difficulty() -> String {
    "intermediate".to_string()
}

impl Opportunity {
    /// Union of required and preferred skills, case-insensitively deduplicated,
    /// in declaration order (required first).
    pub fn all_skills(&self) -> Vec<&str> {
        let mut seen: Vec<String> = Vec::new();
        let mut union: Vec<&str> = Vec::new();
        for skill in self.required_skills.iter().chain(self.preferred_skills.iter()) {
            let key = skill.trim().to_lowercase();
            if !key.is_empty() && !seen.contains(&key) {
                seen.push(key);
                union.push(skill.as_str());
            }
        }
        union
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_opportunity(required: Vec<&str>, preferred: Vec<&str>) -> Opportunity {
        Opportunity {
            id: Uuid::new_v4(),
            title: "Data Analytics Intern".to_string(),
            organization: "TechCorp India".to_string(),
            category: "data-analytics".to_string(),
            required_skills: required.into_iter().map(String::from).collect(),
            preferred_skills: preferred.into_iter().map(String::from).collect(),
            location: "Mumbai, Maharashtra".to_string(),
            stipend: 20_000,
            current_applications: 0,
            max_applications: None,
            is_active: true,
            application_deadline: None,
            start_date: None,
            description: "Work with real datasets".to_string(),
            duration: Some("3 months".to_string()),
            work_type: "full-time".to_string(),
            difficulty_level: "beginner".to_string(),
        }
    }

    #[test]
    fn test_all_skills_unions_required_and_preferred() {
        let opp = make_opportunity(vec!["Python", "SQL"], vec!["Machine Learning"]);
        assert_eq!(opp.all_skills(), vec!["Python", "SQL", "Machine Learning"]);
    }

    #[test]
    fn test_all_skills_dedupes_case_insensitively() {
        let opp = make_opportunity(vec!["Python", "SQL"], vec!["python", "Excel"]);
        assert_eq!(opp.all_skills(), vec!["Python", "SQL", "Excel"]);
    }

    #[test]
    fn test_all_skills_empty_when_no_skills_declared() {
        let opp = make_opportunity(vec![], vec![]);
        assert!(opp.all_skills().is_empty());
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let json = r#"{
            "id": "7f9c2ba4-e88f-4e59-9b4c-2f3a01a74b6d",
            "title": "Software Development Intern",
            "organization": "StartupXYZ",
            "category": "tech",
            "required_skills": ["JavaScript", "React"],
            "location": "Bangalore, Karnataka",
            "description": "Build scalable web applications"
        }"#;
        let opp: Opportunity = serde_json::from_str(json).unwrap();
        assert!(opp.is_active);
        assert_eq!(opp.stipend, 0);
        assert_eq!(opp.work_type, "full-time");
        assert_eq!(opp.difficulty_level, "intermediate");
        assert!(opp.preferred_skills.is_empty());
    }
}
