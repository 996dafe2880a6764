pub mod cv;
pub mod error;
pub mod health;
pub mod jobs;
pub mod validation;
pub mod workspace;
