pub mod dto;
pub mod generator;
pub mod handlers;
pub mod models;

pub use generator::generate_cv;
pub use models::GeneratedCv;
