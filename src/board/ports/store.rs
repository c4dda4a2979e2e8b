//! Store port owning the project collection and the current project pointer.

use crate::board::domain::{BoardSnapshot, Project, ProjectId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for project store operations.
pub type ProjectStoreResult<T> = Result<T, ProjectStoreError>;

/// Project collection contract.
///
/// Implementations keep a single copy of each project. The current project
/// is a reference into the collection, so every change made through
/// [`ProjectStore::modify_current`] is visible through both views at once.
pub trait ProjectStore: Send + Sync {
    /// Appends a new project to the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::DuplicateProject`] when a project with
    /// the same identifier already exists.
    fn append(&self, project: Project) -> ProjectStoreResult<()>;

    /// Appends a new project and makes it current in one step.
    ///
    /// No reader observes the project listed but not yet open.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::DuplicateProject`] when a project with
    /// the same identifier already exists; neither the collection nor the
    /// current pointer changes.
    fn append_and_open(&self, project: Project) -> ProjectStoreResult<()>;

    /// Returns all projects in creation order.
    fn list(&self) -> ProjectStoreResult<Vec<Project>>;

    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    fn find_by_id(&self, id: ProjectId) -> ProjectStoreResult<Option<Project>>;

    /// Returns the project currently open, if any.
    fn current(&self) -> ProjectStoreResult<Option<Project>>;

    /// Makes `id` the current project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::NotFound`] when no project has the given
    /// identifier; the current pointer is left as it was.
    fn open(&self, id: ProjectId) -> ProjectStoreResult<()>;

    /// Clears the current project pointer.
    fn close(&self) -> ProjectStoreResult<()>;

    /// Runs `update` against the current project under exclusive access and
    /// commits the result in place.
    ///
    /// Returns `None` without calling `update` when no project is open.
    fn modify_current<T, F>(&self, update: F) -> ProjectStoreResult<Option<T>>
    where
        F: FnOnce(&mut Project) -> T;

    /// Returns the collection and current project from a single read.
    fn snapshot(&self) -> ProjectStoreResult<BoardSnapshot>;
}

/// Errors returned by project store implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectStoreError {
    /// A project with the same identifier already exists.
    #[error("duplicate project identifier: {0}")]
    DuplicateProject(ProjectId),

    /// The project was not found.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectStoreError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
