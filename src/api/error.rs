use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use tracing::warn;

use crate::api::validation::ErrorResponse;

/// Service-level errors
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Requested resource does not exist
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Request was well-formed but inconsistent with current state
    #[error("Validation error: {0}")]
    Validation(String),

    /// Applying to a weakly matching posting without confirmation
    #[error("Match score {score}% is below {threshold}% for job {job_id}")]
    LowMatch {
        job_id: String,
        score: u8,
        threshold: u8,
    },
}

impl ServiceError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        ServiceError::NotFound { kind, id: id.into() }
    }
}

impl ResponseError for ServiceError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::NotFound { kind, id } => {
                warn!("{} not found: {}", kind, id);
                HttpResponse::NotFound().json(ErrorResponse {
                    error: "Not found".to_string(),
                    fields: serde_json::json!({"message": format!("{} with id {} not found", kind, id)}),
                })
            }
            ServiceError::Validation(msg) => {
                warn!("Validation error: {}", msg);
                HttpResponse::BadRequest().json(ErrorResponse {
                    error: "Validation failed".to_string(),
                    fields: serde_json::json!({"message": msg}),
                })
            }
            ServiceError::LowMatch { job_id, score, threshold } => {
                warn!("Low match application refused: job={}, score={}", job_id, score);
                HttpResponse::Conflict().json(ErrorResponse {
                    error: "Low match score".to_string(),
                    fields: serde_json::json!({
                        "message": "Set confirm_low_match to apply anyway",
                        "match": score,
                        "threshold": threshold,
                    }),
                })
            }
        }
    }
}
