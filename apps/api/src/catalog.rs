//! Catalog Provider — supplies the opportunity snapshot that ranking runs
//! over. Freshness/staleness policy belongs to the provider, not the engine.

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::opportunity::Opportunity;

#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Current catalog snapshot. Ranking filters out inactive entries itself,
    /// so providers may return everything they hold.
    async fn snapshot(&self) -> Result<Vec<Opportunity>, AppError>;
}

/// Read-only catalog loaded once at startup. No locking: the snapshot never
/// changes for the lifetime of the process.
pub struct InMemoryCatalog {
    opportunities: Vec<Opportunity>,
}

impl InMemoryCatalog {
    pub fn new(opportunities: Vec<Opportunity>) -> Self {
        Self { opportunities }
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?;
        let opportunities: Vec<Opportunity> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse catalog file {}", path.display()))?;
        Ok(Self::new(opportunities))
    }

    /// Built-in demo catalog for running without a configured catalog file.
    pub fn seeded() -> Self {
        let seed = |title: &str,
                    organization: &str,
                    category: &str,
                    required: &[&str],
                    preferred: &[&str],
                    location: &str,
                    stipend: u32,
                    duration: &str,
                    work_type: &str,
                    difficulty: &str,
                    description: &str| Opportunity {
            id: Uuid::new_v4(),
            title: title.to_string(),
            organization: organization.to_string(),
            category: category.to_string(),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            preferred_skills: preferred.iter().map(|s| s.to_string()).collect(),
            location: location.to_string(),
            stipend,
            current_applications: 0,
            max_applications: None,
            is_active: true,
            application_deadline: None,
            start_date: None,
            description: description.to_string(),
            duration: Some(duration.to_string()),
            work_type: work_type.to_string(),
            difficulty_level: difficulty.to_string(),
        };

        Self::new(vec![
            seed(
                "Data Analytics Intern",
                "TechCorp India",
                "data-analytics",
                &["Python", "Data Analysis", "Excel"],
                &["SQL", "Power BI"],
                "Mumbai, Maharashtra",
                20_000,
                "3 months",
                "full-time",
                "beginner",
                "Work with real datasets to derive business insights",
            ),
            seed(
                "Software Development Intern",
                "StartupXYZ",
                "tech",
                &["JavaScript", "React", "Node.js"],
                &["TypeScript", "Git"],
                "Bangalore, Karnataka",
                25_000,
                "6 months",
                "full-time",
                "intermediate",
                "Build scalable web applications using modern tech stack",
            ),
            seed(
                "Digital Marketing Intern",
                "MediaCorp",
                "digital-marketing",
                &["Digital Marketing", "Content Writing", "Communication"],
                &["SEO"],
                "Delhi, NCR",
                15_000,
                "4 months",
                "hybrid",
                "beginner",
                "Create and execute digital marketing campaigns",
            ),
            seed(
                "Financial Analyst Intern",
                "FinanceHub",
                "finance",
                &["Finance", "Excel", "Data Analysis"],
                &["Python"],
                "Pune, Maharashtra",
                18_000,
                "4 months",
                "full-time",
                "intermediate",
                "Support financial planning and analysis activities",
            ),
            seed(
                "UI/UX Design Intern",
                "DesignStudio",
                "design",
                &["Figma", "Graphic Design", "Communication"],
                &["User Research"],
                "Chennai, Tamil Nadu",
                22_000,
                "3 months",
                "remote",
                "beginner",
                "Design user interfaces for mobile and web applications",
            ),
        ])
    }
}

#[async_trait]
impl CatalogProvider for InMemoryCatalog {
    async fn snapshot(&self) -> Result<Vec<Opportunity>, AppError> {
        Ok(self.opportunities.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_catalog_is_nonempty_and_active() {
        let catalog = InMemoryCatalog::seeded();
        let snapshot = catalog.snapshot().await.unwrap();
        assert_eq!(snapshot.len(), 5);
        assert!(snapshot.iter().all(|o| o.is_active));
    }

    #[tokio::test]
    async fn test_snapshot_returns_fresh_copies() {
        let catalog = InMemoryCatalog::seeded();
        let a = catalog.snapshot().await.unwrap();
        let b = catalog.snapshot().await.unwrap();
        assert_eq!(a.len(), b.len());
        assert_eq!(a[0].id, b[0].id);
    }
}
