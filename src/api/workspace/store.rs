use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use super::dto::{NewCv, NewProject};
use super::models::{Application, ApplicationStatus, CvEntry, CvType, UserProject};

/// Snapshot of the user's projects, CVs and applications.
///
/// Updates borrow `self` and return a new `Workspace`, leaving the previous
/// value intact for whoever still holds it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workspace {
    projects: Vec<UserProject>,
    applications: Vec<Application>,
    active_project_id: Option<String>,
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl Workspace {
    pub fn new(projects: Vec<UserProject>) -> Self {
        Self {
            projects,
            ..Default::default()
        }
    }

    pub fn projects(&self) -> &[UserProject] {
        &self.projects
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn active_project_id(&self) -> Option<&str> {
        self.active_project_id.as_deref()
    }

    pub fn project(&self, id: &str) -> Option<&UserProject> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Resolved active project; `None` when nothing is selected or the id is stale
    pub fn active_project(&self) -> Option<&UserProject> {
        self.active_project_id
            .as_deref()
            .and_then(|id| self.project(id))
    }

    /// Append a project with a fresh id and make it the active one
    pub fn add_project(&self, new: NewProject) -> (Self, UserProject) {
        let project = UserProject {
            id: new_id(),
            name: new.name,
            description: new.description,
            created_at: today(),
            cvs: Vec::new(),
        };

        let mut projects = self.projects.clone();
        projects.push(project.clone());

        let next = Self {
            projects,
            applications: self.applications.clone(),
            active_project_id: Some(project.id.clone()),
        };
        (next, project)
    }

    /// `None` when no project has this id
    pub fn remove_project(&self, id: &str) -> Option<Self> {
        self.project(id)?;

        let projects = self
            .projects
            .iter()
            .filter(|project| project.id != id)
            .cloned()
            .collect();
        let active_project_id = self
            .active_project_id
            .clone()
            .filter(|active| active != id);

        Some(Self {
            projects,
            applications: self.applications.clone(),
            active_project_id,
        })
    }

    /// `None` when the project does not exist
    pub fn add_cv_to_project(&self, project_id: &str, new: NewCv) -> Option<(Self, CvEntry)> {
        self.project(project_id)?;

        let cv = CvEntry {
            id: new_id(),
            name: new.name,
            cv_type: new.cv_type,
            last_analysis: today(),
            score: new.score,
            applications_in_progress: new.applications_in_progress,
        };

        let projects = self
            .projects
            .iter()
            .map(|project| {
                if project.id != project_id {
                    return project.clone();
                }
                let mut cvs = project.cvs.clone();
                cvs.push(cv.clone());
                UserProject {
                    cvs,
                    ..project.clone()
                }
            })
            .collect();

        Some((self.with_projects(projects), cv))
    }

    /// `None` when either the project or the CV does not exist
    pub fn remove_cv_from_project(&self, project_id: &str, cv_id: &str) -> Option<Self> {
        let project = self.project(project_id)?;
        if !project.cvs.iter().any(|cv| cv.id == cv_id) {
            return None;
        }

        let projects = self
            .projects
            .iter()
            .map(|project| {
                if project.id != project_id {
                    return project.clone();
                }
                UserProject {
                    cvs: project.cvs.iter().filter(|cv| cv.id != cv_id).cloned().collect(),
                    ..project.clone()
                }
            })
            .collect();

        Some(self.with_projects(projects))
    }

    /// `None` when `id` names an unknown project; clearing always succeeds
    pub fn set_active_project(&self, id: Option<&str>) -> Option<Self> {
        if let Some(id) = id {
            self.project(id)?;
        }

        Some(Self {
            projects: self.projects.clone(),
            applications: self.applications.clone(),
            active_project_id: id.map(str::to_string),
        })
    }

    /// Record a new in-progress application dated today
    pub fn record_application(
        &self,
        company: &str,
        role: &str,
        cv_id: Option<String>,
    ) -> (Self, Application) {
        let application = Application {
            id: new_id(),
            company: company.to_string(),
            role: role.to_string(),
            date: today(),
            status: ApplicationStatus::InProgress,
            cv_id,
        };

        let mut applications = self.applications.clone();
        applications.push(application.clone());

        let next = Self {
            projects: self.projects.clone(),
            applications,
            active_project_id: self.active_project_id.clone(),
        };
        (next, application)
    }

    pub fn cv_exists(&self, cv_id: &str) -> bool {
        self.projects
            .iter()
            .flat_map(|project| project.cvs.iter())
            .any(|cv| cv.id == cv_id)
    }

    fn with_projects(&self, projects: Vec<UserProject>) -> Self {
        Self {
            projects,
            applications: self.applications.clone(),
            active_project_id: self.active_project_id.clone(),
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn sample_cv(id: &str, name: &str, cv_type: CvType, analysed: NaiveDate, score: u8, in_progress: u32) -> CvEntry {
    CvEntry {
        id: id.to_string(),
        name: name.to_string(),
        cv_type,
        last_analysis: analysed,
        score,
        applications_in_progress: in_progress,
    }
}

/// Workspace seeded with the sample projects
pub fn sample_workspace() -> Workspace {
    Workspace::new(vec![
        UserProject {
            id: "project-1".to_string(),
            name: "Recherche Tech 2026".to_string(),
            description: "Candidatures pour des postes de développeur Senior et Lead.".to_string(),
            created_at: date(2026, 2, 10),
            cvs: vec![
                sample_cv("cv-1", "CV Fullstack React/Node", CvType::Cdi, date(2026, 2, 15), 88, 2),
                sample_cv("cv-2", "CV Frontend Architect", CvType::Cdi, date(2026, 2, 18), 92, 1),
            ],
        },
        UserProject {
            id: "project-2".to_string(),
            name: "Missions Freelance".to_string(),
            description: "Projets de courte durée et missions de conseil.".to_string(),
            created_at: date(2026, 2, 20),
            cvs: vec![sample_cv(
                "cv-3",
                "CV Expert TypeScript",
                CvType::Freelance,
                date(2026, 2, 22),
                85,
                0,
            )],
        },
    ])
}
