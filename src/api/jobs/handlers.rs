use actix_web::{
    HttpRequest, HttpResponse, Responder, get, post,
    web::{Data, Path, ServiceConfig, scope},
};
use actix_web_validator::Json;

use super::dto::{ApplyRequest, JobSearchParams};
use super::service::JobService;
use crate::api::error::ServiceError;
use crate::api::workspace::WorkspaceService;

#[get("")]
async fn search_jobs(service: Data<JobService>, req: HttpRequest) -> impl Responder {
    let params = JobSearchParams::from_query(req.query_string());
    HttpResponse::Ok().json(service.search(&params))
}

#[get("/locations")]
async fn list_locations(service: Data<JobService>) -> impl Responder {
    HttpResponse::Ok().json(service.locations())
}

#[get("/{id}")]
async fn get_job(service: Data<JobService>, id: Path<String>) -> Result<HttpResponse, ServiceError> {
    let detail = service.detail(&id)?;
    Ok(HttpResponse::Ok().json(detail))
}

#[post("/{id}/apply")]
async fn apply_to_job(
    service: Data<JobService>,
    workspace: Data<WorkspaceService>,
    id: Path<String>,
    request: Json<ApplyRequest>,
) -> Result<HttpResponse, ServiceError> {
    let response = service.apply(&id, request.into_inner(), &workspace).await?;
    Ok(HttpResponse::Created().json(response))
}

pub fn job_config(config: &mut ServiceConfig) {
    config.service(
        scope("jobs")
            .service(search_jobs)
            .service(list_locations)
            .service(get_job)
            .service(apply_to_job),
    );
}
