pub mod catalog;
pub mod dto;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use catalog::JobCatalog;
pub use filter::{distinct_locations, filter_jobs};
pub use models::{ContractType, ExperienceLevel, FilterCriteria, JobPosting};
pub use service::JobService;
