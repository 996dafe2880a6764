use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Proficiency attached to a skill
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub level: SkillLevel,
}

/// Dates are `YYYY-MM`; `end_date` is absent while the position is current
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub current: bool,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Education {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub current: bool,
    pub location: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Language {
    pub id: String,
    pub name: String,
    pub level: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub summary: String,
}

/// A draft CV built from a short brief, meant to be edited by hand afterwards
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GeneratedCv {
    pub id: String,
    pub title: String,
    pub last_modified: DateTime<Utc>,
    pub personal_info: PersonalInfo,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub languages: Vec<Language>,
    pub interests: Vec<String>,
}
