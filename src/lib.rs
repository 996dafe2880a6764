pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod shutdown;

use actix_web::web;

use crate::api::{
    cv::handlers::cv_config, health::health_config, jobs::handlers::job_config,
    workspace::handlers::workspace_config,
};

/// Register every route of the service
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health_config)
        .configure(job_config)
        .configure(workspace_config)
        .configure(cv_config);
}
