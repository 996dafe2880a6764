use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;
use tracing::warn;

use crate::api::jobs::JobService;
use crate::api::workspace::{WorkspaceService, WorkspaceStats};

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    catalog: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    postings: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    workspace: Option<WorkspaceStats>,
}

/// General health check with catalog and workspace counts
#[get("/health")]
async fn health_check(
    jobs: web::Data<JobService>,
    workspace: web::Data<WorkspaceService>,
) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        catalog: "loaded".to_string(),
        postings: Some(jobs.catalog().len()),
        workspace: Some(workspace.stats().await),
    })
}

/// Readiness check endpoint
///
/// Not ready while the catalog holds no postings, since every search
/// would come back empty.
#[get("/ready")]
async fn readiness_check(jobs: web::Data<JobService>) -> impl Responder {
    let postings = jobs.catalog().len();
    if postings == 0 {
        warn!("Readiness check failed: job catalog is empty");
        return HttpResponse::ServiceUnavailable().json(HealthResponse {
            status: "not_ready".to_string(),
            catalog: "empty".to_string(),
            postings: Some(0),
            workspace: None,
        });
    }

    HttpResponse::Ok().json(HealthResponse {
        status: "ready".to_string(),
        catalog: "loaded".to_string(),
        postings: Some(postings),
        workspace: None,
    })
}

/// Liveness check endpoint. Does not check dependencies.
#[get("/live")]
async fn liveness_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "alive".to_string(),
        catalog: "not_checked".to_string(),
        postings: None,
        workspace: None,
    })
}

pub fn health_config(config: &mut web::ServiceConfig) {
    config
        .service(health_check)
        .service(readiness_check)
        .service(liveness_check);
}
