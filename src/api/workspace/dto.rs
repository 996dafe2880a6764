use serde::{Deserialize, Serialize};
use validator::Validate;

use super::models::{CvEntry, CvType, UserProject};

/// Body of `POST /projects`
#[derive(Debug, Deserialize, Serialize, Validate, Clone)]
pub struct NewProject {
    #[validate(length(min = 1, max = 80, message = "Name must be between 1 and 80 characters"))]
    pub name: String,
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    #[serde(default)]
    pub description: String,
}

/// Body of `POST /projects/{id}/cvs`
#[derive(Debug, Deserialize, Serialize, Validate, Clone)]
pub struct NewCv {
    #[validate(length(min = 1, max = 80, message = "Name must be between 1 and 80 characters"))]
    pub name: String,
    #[serde(rename = "type")]
    pub cv_type: CvType,
    #[validate(range(min = 0, max = 100, message = "Score must be between 0 and 100"))]
    #[serde(default)]
    pub score: u8,
    #[serde(default)]
    pub applications_in_progress: u32,
}

/// Body of `PUT /projects/active`; a null id clears the selection
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct ActiveProjectRequest {
    pub project_id: Option<String>,
}

#[derive(Serialize)]
pub struct ProjectResponse {
    pub message: String,
    pub project: UserProject,
}

#[derive(Serialize)]
pub struct CvResponse {
    pub message: String,
    pub cv: CvEntry,
}

#[derive(Serialize)]
pub struct ActiveProjectResponse {
    pub active_project_id: Option<String>,
    pub project: Option<UserProject>,
}
