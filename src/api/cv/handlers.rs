use actix_web::{
    HttpResponse, Responder, post,
    web::{ServiceConfig, scope},
};
use actix_web_validator::Json;
use tracing::info;

use super::dto::GenerateCvRequest;
use super::generator::generate_cv;

#[post("/generate")]
async fn generate(request: Json<GenerateCvRequest>) -> impl Responder {
    let cv = generate_cv(&request);
    info!("Generated CV {} ({} skills, {} positions)", cv.id, cv.skills.len(), cv.experience.len());
    HttpResponse::Created().json(cv)
}

pub fn cv_config(config: &mut ServiceConfig) {
    config.service(scope("cvs").service(generate));
}
