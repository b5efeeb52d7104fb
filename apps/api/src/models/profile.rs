use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A candidate profile as supplied by the caller. Identity-free: the engine
/// only ever sees skills, interests, and contextual attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    /// Free-text experience / resume text, if the candidate provided one.
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub preferred_location: Option<String>,
    #[serde(default)]
    pub education_level: Option<String>,
    #[serde(default)]
    pub institute: Option<String>,
}

impl Profile {
    /// Skills and interests must be set-like: a case-insensitive duplicate is
    /// invalid input, never silently collapsed.
    pub fn validate(&self) -> Result<(), AppError> {
        check_set_like("skills", &self.skills)?;
        check_set_like("interests", &self.interests)?;
        Ok(())
    }
}

fn check_set_like(field: &str, values: &[String]) -> Result<(), AppError> {
    let mut seen: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let key = value.trim().to_lowercase();
        if seen.contains(&key) {
            return Err(AppError::Validation(format!(
                "duplicate entry '{value}' in profile {field}"
            )));
        }
        seen.push(key);
    }
    Ok(())
}
