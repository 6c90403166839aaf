//! In-process project store.
//!
//! # Responsibilities
//! - Keep projects in insertion order
//! - Generate ids on create
//! - Replace and delete by id without disturbing the order of others
//!
//! # Design Decisions
//! - A `Vec` behind an `RwLock` keeps ordering trivially correct; lookups are
//!   linear, which is fine for a process-local collection
//! - The lock is never held across an `.await`

use std::sync::RwLock;

use crate::store::{Project, ProjectDraft, ProjectId, ProjectStore, StoreError, StoreResult};

/// Ordered, process-local project storage.
#[derive(Debug, Default)]
pub struct InMemoryProjectStore {
    projects: RwLock<Vec<Project>>,
}

impl InMemoryProjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(projects: &[Project], id: &ProjectId) -> Option<usize> {
        projects.iter().position(|p| &p.id == id)
    }
}

impl ProjectStore for InMemoryProjectStore {
    fn list(&self, title_filter: Option<&str>) -> Vec<Project> {
        let projects = self.projects.read().expect("project store lock poisoned");
        match title_filter {
            Some(needle) => projects
                .iter()
                .filter(|p| p.title_contains(needle))
                .cloned()
                .collect(),
            None => projects.clone(),
        }
    }

    fn create(&self, draft: ProjectDraft) -> Project {
        let mut projects = self.projects.write().expect("project store lock poisoned");

        // v4 collisions are not a practical concern, but ids must stay unique.
        let mut id = ProjectId::new_v4();
        while Self::position(&projects, &id).is_some() {
            id = ProjectId::new_v4();
        }

        let project = Project::from_draft(id, draft);
        projects.push(project.clone());
        project
    }

    fn replace(&self, id: &ProjectId, draft: ProjectDraft) -> StoreResult<Project> {
        let mut projects = self.projects.write().expect("project store lock poisoned");
        let index = Self::position(&projects, id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        let project = Project::from_draft(id.clone(), draft);
        projects[index] = project.clone();
        Ok(project)
    }

    fn delete(&self, id: &ProjectId) -> StoreResult<()> {
        let mut projects = self.projects.write().expect("project store lock poisoned");
        let index = Self::position(&projects, id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        projects.remove(index);
        Ok(())
    }

    fn get(&self, id: &ProjectId) -> Option<Project> {
        let projects = self.projects.read().expect("project store lock poisoned");
        projects.iter().find(|p| &p.id == id).cloned()
    }

    fn len(&self) -> usize {
        self.projects.read().expect("project store lock poisoned").len()
    }
}
