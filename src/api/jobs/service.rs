use tracing::{debug, info};

use super::catalog::JobCatalog;
use super::dto::{ApplyRequest, ApplyResponse, JobDetailResponse, JobSearchParams, JobSearchResponse};
use super::filter::{distinct_locations, filter_jobs};
use super::models::{JobPosting, LOW_MATCH_THRESHOLD};
use crate::api::error::ServiceError;
use crate::api::workspace::WorkspaceService;

/// Job service containing the search and apply logic
pub struct JobService {
    catalog: JobCatalog,
}

impl JobService {
    pub fn new(catalog: JobCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &JobCatalog {
        &self.catalog
    }

    /// Filter the catalog with the given query-string parameters
    pub fn search(&self, params: &JobSearchParams) -> JobSearchResponse {
        let criteria = params.criteria();
        let postings = self.catalog.postings();
        let jobs = filter_jobs(postings, &criteria);

        debug!(
            "Service: Search {:?} matched {}/{} postings",
            criteria,
            jobs.len(),
            postings.len()
        );

        JobSearchResponse {
            jobs,
            locations: distinct_locations(postings),
            filters: params.applied(),
        }
    }

    pub fn locations(&self) -> Vec<String> {
        distinct_locations(self.catalog.postings())
    }

    pub fn get(&self, id: &str) -> Result<JobPosting, ServiceError> {
        self.catalog
            .get(id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("Job", id))
    }

    pub fn detail(&self, id: &str) -> Result<JobDetailResponse, ServiceError> {
        self.get(id).map(JobDetailResponse::from)
    }

    /// Apply to a posting
    ///
    /// # Business Logic
    /// - Unknown postings are rejected
    /// - Postings below the low-match threshold need `confirm_low_match`
    /// - The application is recorded in the workspace as in progress
    pub async fn apply(
        &self,
        id: &str,
        request: ApplyRequest,
        workspace: &WorkspaceService,
    ) -> Result<ApplyResponse, ServiceError> {
        let job = self.get(id)?;

        if job.is_low_match() && !request.confirm_low_match {
            return Err(ServiceError::LowMatch {
                job_id: job.id,
                score: job.match_score,
                threshold: LOW_MATCH_THRESHOLD,
            });
        }

        let application = workspace
            .record_application(&job.company, &job.title, request.cv_id)
            .await?;

        info!("Service: Applied to job {} ({} at {})", job.id, job.title, job.company);

        Ok(ApplyResponse {
            message: format!("Application recorded for {} at {}", job.title, job.company),
            application,
            external_url: job.external_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::jobs::catalog::sample_postings;
    use crate::api::workspace::models::ApplicationStatus;
    use crate::api::workspace::store::sample_workspace;

    fn service() -> JobService {
        JobService::new(JobCatalog::new(sample_postings()).unwrap())
    }

    #[test]
    fn search_reports_locations_of_whole_catalog() {
        let service = service();
        let response = service.search(&JobSearchParams {
            location: Some("Lille".into()),
            ..Default::default()
        });

        assert_eq!(response.jobs.len(), 1);
        assert_eq!(response.locations, vec!["Paris", "Lyon", "Lille", "Bordeaux"]);
        assert_eq!(response.filters.location, "Lille");
    }

    #[test]
    fn empty_search_returns_catalog() {
        let service = service();
        let response = service.search(&JobSearchParams::default());
        assert_eq!(response.jobs, service.catalog().postings());
    }

    #[test]
    fn detail_of_missing_job_is_not_found() {
        assert!(matches!(service().detail("job-404"), Err(ServiceError::NotFound { .. })));
    }

    #[actix_web::test]
    async fn low_match_requires_confirmation() {
        let service = service();
        let workspace = WorkspaceService::new(sample_workspace());

        // job-5 scores 64
        let err = service
            .apply("job-5", ApplyRequest::default(), &workspace)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::LowMatch { score: 64, threshold: 80, .. }));
        assert!(workspace.applications().await.is_empty());

        let response = service
            .apply(
                "job-5",
                ApplyRequest {
                    cv_id: None,
                    confirm_low_match: true,
                },
                &workspace,
            )
            .await
            .unwrap();
        assert_eq!(response.application.company, "Bloom & Co");
        assert_eq!(response.application.status, ApplicationStatus::InProgress);
    }

    #[actix_web::test]
    async fn strong_match_applies_directly() {
        let service = service();
        let workspace = WorkspaceService::new(sample_workspace());

        let response = service
            .apply(
                "job-1",
                ApplyRequest {
                    cv_id: Some("cv-1".into()),
                    confirm_low_match: false,
                },
                &workspace,
            )
            .await
            .unwrap();

        assert_eq!(response.application.role, "Product Marketing Manager");
        assert_eq!(response.application.cv_id.as_deref(), Some("cv-1"));
        assert_eq!(workspace.applications().await.len(), 1);
    }
}
