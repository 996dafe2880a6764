pub mod dto;
pub mod handlers;
pub mod models;
pub mod service;
pub mod store;

pub use service::{WorkspaceService, WorkspaceStats};
pub use store::Workspace;
