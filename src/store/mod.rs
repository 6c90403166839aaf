//! Project storage subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP handler
//!     → ProjectStore trait (list / create / replace / delete)
//!     → memory.rs (ordered in-process backing)
//!     → Project records returned by value
//! ```
//!
//! # Design Decisions
//! - Handlers only see the `ProjectStore` trait, so the backing can be
//!   swapped without touching the HTTP layer
//! - Every operation runs to completion under a single lock acquisition
//! - Records are returned as clones; callers never hold store internals

pub mod memory;
pub mod project;

pub use memory::InMemoryProjectStore;
pub use project::{Project, ProjectDraft, ProjectId, ProjectIdError};

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No project with the given id exists.
    #[error("project {0} not found")]
    NotFound(ProjectId),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage backend for project records.
///
/// Implementations must preserve insertion order for `list`, keep a
/// replaced record at its original position, and never reuse an id.
pub trait ProjectStore: Send + Sync {
    /// Return every project, optionally restricted to those whose title
    /// contains `title_filter` (case-sensitive substring match).
    fn list(&self, title_filter: Option<&str>) -> Vec<Project>;

    /// Assign a fresh id to `draft` and append it.
    fn create(&self, draft: ProjectDraft) -> Project;

    /// Overwrite title and owner of an existing project in place. Ids match
    /// by exact text.
    fn replace(&self, id: &ProjectId, draft: ProjectDraft) -> StoreResult<Project>;

    /// Remove a project.
    fn delete(&self, id: &ProjectId) -> StoreResult<()>;

    /// Look up a single project.
    fn get(&self, id: &ProjectId) -> Option<Project>;

    /// Number of stored projects.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
