//! In-memory project store.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::board::{
    domain::{BoardSnapshot, Project, ProjectId},
    ports::{ProjectStore, ProjectStoreError, ProjectStoreResult},
};

/// Thread-safe in-memory project store.
///
/// Each call takes the lock once, so a read-modify-write through
/// [`ProjectStore::modify_current`] is never observed half done.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectStore {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    projects: Vec<Project>,
    current: Option<ProjectId>,
}

impl InMemoryBoardState {
    fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id() == id)
    }

    fn get_mut(&mut self, id: ProjectId) -> Option<&mut Project> {
        self.projects.iter_mut().find(|project| project.id() == id)
    }

    fn current(&self) -> Option<&Project> {
        self.current.and_then(|id| self.get(id))
    }

    fn insert(&mut self, project: Project) -> ProjectStoreResult<ProjectId> {
        let id = project.id();
        if self.get(id).is_some() {
            return Err(ProjectStoreError::DuplicateProject(id));
        }
        self.projects.push(project);
        Ok(id)
    }
}

impl InMemoryProjectStore {
    /// Creates an empty store with no project open.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> ProjectStoreResult<RwLockReadGuard<'_, InMemoryBoardState>> {
        self.state
            .read()
            .map_err(|err| ProjectStoreError::storage(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> ProjectStoreResult<RwLockWriteGuard<'_, InMemoryBoardState>> {
        self.state
            .write()
            .map_err(|err| ProjectStoreError::storage(std::io::Error::other(err.to_string())))
    }
}

impl ProjectStore for InMemoryProjectStore {
    fn append(&self, project: Project) -> ProjectStoreResult<()> {
        let mut state = self.write()?;
        state.insert(project)?;
        Ok(())
    }

    fn append_and_open(&self, project: Project) -> ProjectStoreResult<()> {
        let mut state = self.write()?;
        let id = state.insert(project)?;
        state.current = Some(id);
        Ok(())
    }

    fn list(&self) -> ProjectStoreResult<Vec<Project>> {
        let state = self.read()?;
        Ok(state.projects.clone())
    }

    fn find_by_id(&self, id: ProjectId) -> ProjectStoreResult<Option<Project>> {
        let state = self.read()?;
        Ok(state.get(id).cloned())
    }

    fn current(&self) -> ProjectStoreResult<Option<Project>> {
        let state = self.read()?;
        Ok(state.current().cloned())
    }

    fn open(&self, id: ProjectId) -> ProjectStoreResult<()> {
        let mut state = self.write()?;
        if state.get(id).is_none() {
            return Err(ProjectStoreError::NotFound(id));
        }
        state.current = Some(id);
        Ok(())
    }

    fn close(&self) -> ProjectStoreResult<()> {
        let mut state = self.write()?;
        state.current = None;
        Ok(())
    }

    fn modify_current<T, F>(&self, update: F) -> ProjectStoreResult<Option<T>>
    where
        F: FnOnce(&mut Project) -> T,
    {
        let mut state = self.write()?;
        let Some(id) = state.current else {
            return Ok(None);
        };
        let project = state.get_mut(id).ok_or(ProjectStoreError::NotFound(id))?;
        Ok(Some(update(project)))
    }

    fn snapshot(&self) -> ProjectStoreResult<BoardSnapshot> {
        let state = self.read()?;
        Ok(BoardSnapshot {
            projects: state.projects.clone(),
            current: state.current().cloned(),
        })
    }
}
