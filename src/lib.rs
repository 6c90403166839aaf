//! Projects API Library
//!
//! A small CRUD service over an in-memory collection of project records.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod store;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::{InMemoryProjectStore, Project, ProjectDraft, ProjectId, ProjectStore};
