//! Read-only view of the whole board handed to the presentation layer.

use super::{Project, ProjectId};
use serde::{Deserialize, Serialize};

/// Ordered projects plus the project currently being viewed.
///
/// `current`, when present, is a copy of the collection entry with the same
/// identifier taken under the same read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Projects in creation order.
    pub projects: Vec<Project>,
    /// Project currently open, if any.
    pub current: Option<Project>,
}

impl BoardSnapshot {
    /// Returns the identifier of the open project, if any.
    #[must_use]
    pub fn current_id(&self) -> Option<ProjectId> {
        self.current.as_ref().map(Project::id)
    }

    /// Returns the collection entry for `id`.
    #[must_use]
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id() == id)
    }
}
