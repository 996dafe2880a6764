use tokio::sync::RwLock;
use tracing::info;

use super::dto::{NewCv, NewProject};
use super::models::{Application, CvEntry, UserProject};
use super::store::Workspace;
use crate::api::error::ServiceError;

/// Owns the current workspace value and swaps it on every update
pub struct WorkspaceService {
    state: RwLock<Workspace>,
}

/// Counts reported at shutdown and by the health endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct WorkspaceStats {
    pub projects: usize,
    pub cvs: usize,
    pub applications: usize,
}

impl WorkspaceService {
    pub fn new(workspace: Workspace) -> Self {
        Self {
            state: RwLock::new(workspace),
        }
    }

    /// Current value; later updates do not affect the returned copy
    pub async fn snapshot(&self) -> Workspace {
        self.state.read().await.clone()
    }

    pub async fn stats(&self) -> WorkspaceStats {
        let state = self.state.read().await;
        WorkspaceStats {
            projects: state.projects().len(),
            cvs: state.projects().iter().map(|p| p.cvs.len()).sum(),
            applications: state.applications().len(),
        }
    }

    pub async fn list_projects(&self) -> Vec<UserProject> {
        self.state.read().await.projects().to_vec()
    }

    pub async fn get_project(&self, id: &str) -> Result<UserProject, ServiceError> {
        self.state
            .read()
            .await
            .project(id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("Project", id))
    }

    pub async fn add_project(&self, new: NewProject) -> UserProject {
        let mut state = self.state.write().await;
        let (next, project) = state.add_project(new);
        *state = next;

        info!("Service: Project created with id={}, name={}", project.id, project.name);
        project
    }

    pub async fn remove_project(&self, id: &str) -> Result<(), ServiceError> {
        let mut state = self.state.write().await;
        *state = state
            .remove_project(id)
            .ok_or_else(|| ServiceError::not_found("Project", id))?;

        info!("Service: Project removed id={}", id);
        Ok(())
    }

    pub async fn add_cv(&self, project_id: &str, new: NewCv) -> Result<CvEntry, ServiceError> {
        let mut state = self.state.write().await;
        let (next, cv) = state
            .add_cv_to_project(project_id, new)
            .ok_or_else(|| ServiceError::not_found("Project", project_id))?;
        *state = next;

        info!("Service: CV {} added to project {}", cv.id, project_id);
        Ok(cv)
    }

    pub async fn remove_cv(&self, project_id: &str, cv_id: &str) -> Result<(), ServiceError> {
        let mut state = self.state.write().await;
        if state.project(project_id).is_none() {
            return Err(ServiceError::not_found("Project", project_id));
        }
        *state = state
            .remove_cv_from_project(project_id, cv_id)
            .ok_or_else(|| ServiceError::not_found("CV", cv_id))?;

        info!("Service: CV {} removed from project {}", cv_id, project_id);
        Ok(())
    }

    pub async fn active_project(&self) -> (Option<String>, Option<UserProject>) {
        let state = self.state.read().await;
        (
            state.active_project_id().map(str::to_string),
            state.active_project().cloned(),
        )
    }

    pub async fn set_active_project(&self, id: Option<&str>) -> Result<Option<UserProject>, ServiceError> {
        let mut state = self.state.write().await;
        *state = state
            .set_active_project(id)
            .ok_or_else(|| ServiceError::not_found("Project", id.unwrap_or_default()))?;

        info!("Service: Active project set to {:?}", id);
        Ok(state.active_project().cloned())
    }

    pub async fn applications(&self) -> Vec<Application> {
        self.state.read().await.applications().to_vec()
    }

    /// Record an application; an explicit `cv_id` must name an existing CV
    pub async fn record_application(
        &self,
        company: &str,
        role: &str,
        cv_id: Option<String>,
    ) -> Result<Application, ServiceError> {
        let mut state = self.state.write().await;
        if let Some(cv_id) = cv_id.as_deref() {
            if !state.cv_exists(cv_id) {
                return Err(ServiceError::Validation(format!("Unknown CV: {}", cv_id)));
            }
        }

        let (next, application) = state.record_application(company, role, cv_id);
        *state = next;

        info!(
            "Service: Application recorded id={}, company={}, role={}",
            application.id, application.company, application.role
        );
        Ok(application)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::workspace::models::CvType;
    use crate::api::workspace::store::sample_workspace;

    #[actix_web::test]
    async fn add_then_remove_project() {
        let service = WorkspaceService::new(sample_workspace());
        let project = service
            .add_project(NewProject {
                name: "Alternance".into(),
                description: "Contrats pro".into(),
            })
            .await;

        assert_eq!(service.list_projects().await.len(), 3);
        assert_eq!(service.active_project().await.0, Some(project.id.clone()));

        service.remove_project(&project.id).await.unwrap();
        assert_eq!(service.list_projects().await.len(), 2);
        assert!(matches!(
            service.remove_project(&project.id).await,
            Err(ServiceError::NotFound { .. })
        ));
    }

    #[actix_web::test]
    async fn snapshot_is_unaffected_by_later_updates() {
        let service = WorkspaceService::new(sample_workspace());
        let before = service.snapshot().await;

        service
            .add_cv(
                "project-1",
                NewCv {
                    name: "CV Lead".into(),
                    cv_type: CvType::Cdi,
                    score: 90,
                    applications_in_progress: 0,
                },
            )
            .await
            .unwrap();

        assert_eq!(before.project("project-1").unwrap().cvs.len(), 2);
        assert_eq!(service.stats().await.cvs, 4);
    }

    #[actix_web::test]
    async fn remove_cv_distinguishes_missing_project_and_cv() {
        let service = WorkspaceService::new(sample_workspace());

        match service.remove_cv("nope", "cv-1").await {
            Err(ServiceError::NotFound { kind, .. }) => assert_eq!(kind, "Project"),
            other => panic!("unexpected: {:?}", other),
        }
        match service.remove_cv("project-1", "cv-3").await {
            Err(ServiceError::NotFound { kind, .. }) => assert_eq!(kind, "CV"),
            other => panic!("unexpected: {:?}", other),
        }
        service.remove_cv("project-2", "cv-3").await.unwrap();
        assert_eq!(service.stats().await.cvs, 2);
    }

    #[actix_web::test]
    async fn application_with_unknown_cv_is_rejected() {
        let service = WorkspaceService::new(sample_workspace());

        let err = service
            .record_application("NovaTech", "PMM", Some("cv-99".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        service
            .record_application("NovaTech", "PMM", Some("cv-1".into()))
            .await
            .unwrap();
        assert_eq!(service.applications().await.len(), 1);
    }
}
