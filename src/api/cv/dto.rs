use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::jobs::ExperienceLevel;

/// Title used when the brief does not name one
pub const DEFAULT_JOB_TITLE: &str = "Professionnel";

/// Body of `POST /cvs/generate`
#[derive(Debug, Deserialize, Serialize, Validate, Clone)]
pub struct GenerateCvRequest {
    #[validate(length(max = 120, message = "Job title must be at most 120 characters"))]
    pub job_title: Option<String>,
    pub experience_level: ExperienceLevel,
    /// Comma-separated list, e.g. `"Rust, Kubernetes"`
    #[validate(length(max = 500, message = "Key skills must be at most 500 characters"))]
    pub key_skills: Option<String>,
    #[validate(length(max = 80, message = "Industry must be at most 80 characters"))]
    pub industry: Option<String>,
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,
}

impl GenerateCvRequest {
    pub fn job_title(&self) -> &str {
        self.job_title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .unwrap_or(DEFAULT_JOB_TITLE)
    }

    pub fn industry(&self) -> Option<&str> {
        self.industry.as_deref().filter(|industry| !industry.is_empty())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|description| !description.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(job_title: Option<&str>) -> GenerateCvRequest {
        GenerateCvRequest {
            job_title: job_title.map(str::to_string),
            experience_level: ExperienceLevel::Mid,
            key_skills: None,
            industry: Some(String::new()),
            description: None,
        }
    }

    #[test]
    fn blank_title_falls_back_to_default() {
        assert_eq!(request(None).job_title(), DEFAULT_JOB_TITLE);
        assert_eq!(request(Some("   ")).job_title(), DEFAULT_JOB_TITLE);
        assert_eq!(request(Some(" Designer ")).job_title(), "Designer");
    }

    #[test]
    fn empty_industry_counts_as_absent() {
        assert_eq!(request(None).industry(), None);
    }

    #[test]
    fn overlong_title_fails_validation() {
        let long = "x".repeat(121);
        assert!(request(Some(&long)).validate().is_err());
        assert!(request(Some("Développeur")).validate().is_ok());
    }
}
