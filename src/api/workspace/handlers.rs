use actix_web::{
    HttpResponse, Responder, delete, get, post, put,
    web::{Data, Path, ServiceConfig, scope},
};
use actix_web_validator::Json;

use super::dto::{ActiveProjectRequest, ActiveProjectResponse, CvResponse, NewCv, NewProject, ProjectResponse};
use super::service::WorkspaceService;
use crate::api::error::ServiceError;

#[get("")]
async fn list_projects(service: Data<WorkspaceService>) -> impl Responder {
    HttpResponse::Ok().json(service.list_projects().await)
}

#[post("")]
async fn create_project(service: Data<WorkspaceService>, project: Json<NewProject>) -> impl Responder {
    let project = service.add_project(project.into_inner()).await;
    HttpResponse::Created().json(ProjectResponse {
        message: "Project created successfully".to_string(),
        project,
    })
}

#[get("/active")]
async fn get_active_project(service: Data<WorkspaceService>) -> impl Responder {
    let (active_project_id, project) = service.active_project().await;
    HttpResponse::Ok().json(ActiveProjectResponse {
        active_project_id,
        project,
    })
}

#[put("/active")]
async fn set_active_project(
    service: Data<WorkspaceService>,
    request: Json<ActiveProjectRequest>,
) -> Result<HttpResponse, ServiceError> {
    let project_id = request.into_inner().project_id;
    let project = service.set_active_project(project_id.as_deref()).await?;
    Ok(HttpResponse::Ok().json(ActiveProjectResponse {
        active_project_id: project_id,
        project,
    }))
}

#[get("/{id}")]
async fn get_project(service: Data<WorkspaceService>, id: Path<String>) -> Result<HttpResponse, ServiceError> {
    let project = service.get_project(&id).await?;
    Ok(HttpResponse::Ok().json(project))
}

#[delete("/{id}")]
async fn delete_project(service: Data<WorkspaceService>, id: Path<String>) -> Result<HttpResponse, ServiceError> {
    service.remove_project(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/{id}/cvs")]
async fn add_cv(
    service: Data<WorkspaceService>,
    id: Path<String>,
    cv: Json<NewCv>,
) -> Result<HttpResponse, ServiceError> {
    let cv = service.add_cv(&id, cv.into_inner()).await?;
    Ok(HttpResponse::Created().json(CvResponse {
        message: "CV added successfully".to_string(),
        cv,
    }))
}

#[delete("/{id}/cvs/{cv_id}")]
async fn delete_cv(
    service: Data<WorkspaceService>,
    path: Path<(String, String)>,
) -> Result<HttpResponse, ServiceError> {
    let (project_id, cv_id) = path.into_inner();
    service.remove_cv(&project_id, &cv_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("")]
async fn list_applications(service: Data<WorkspaceService>) -> impl Responder {
    HttpResponse::Ok().json(service.applications().await)
}

pub fn workspace_config(config: &mut ServiceConfig) {
    config
        .service(
            scope("projects")
                .service(list_projects)
                .service(create_project)
                .service(get_active_project)
                .service(set_active_project)
                .service(get_project)
                .service(delete_project)
                .service(add_cv)
                .service(delete_cv),
        )
        .service(scope("applications").service(list_applications));
}
