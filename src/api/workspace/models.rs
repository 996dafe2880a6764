use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of position a CV targets
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CvType {
    Student,
    Cdi,
    Freelance,
    Internship,
}

/// A CV stored inside a project
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CvEntry {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub cv_type: CvType,
    pub last_analysis: NaiveDate,
    pub score: u8,
    pub applications_in_progress: u32,
}

/// A job-search project grouping several CVs
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct UserProject {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: NaiveDate,
    pub cvs: Vec<CvEntry>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    InProgress,
    Interview,
    Offer,
    Rejected,
}

/// An application sent for a posting, optionally tied to a CV
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Application {
    pub id: String,
    pub company: String,
    pub role: String,
    pub date: NaiveDate,
    pub status: ApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv_id: Option<String>,
}
