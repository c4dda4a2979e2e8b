//! Service layer applying user intents to the project store.

use crate::board::{
    domain::{
        BoardDomainError, BoardSnapshot, Priority, Project, ProjectId, Role, Stage, StageAction,
        Task, TaskDraft, TaskId, TransitionOutcome,
    },
    ports::{IdGenerator, ProjectStore, ProjectStoreError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    name: String,
    description: Option<String>,
}

impl CreateProjectRequest {
    /// Creates a request with the required project name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Sets the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for creating a task in the current project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    stage: Stage,
    title: String,
    description: Option<String>,
    assignee: Option<Role>,
    due_date: Option<NaiveDate>,
    priority: Option<Priority>,
}

impl CreateTaskRequest {
    /// Creates a request for a task titled `title` in the `stage` column.
    #[must_use]
    pub fn new(stage: Stage, title: impl Into<String>) -> Self {
        Self {
            stage,
            title: title.into(),
            description: None,
            assignee: None,
            due_date: None,
            priority: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the assignee role.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: Role) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the priority; `medium` applies when unset.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    fn into_draft(self) -> Result<(Stage, TaskDraft), BoardDomainError> {
        let Self {
            stage,
            title,
            description,
            assignee,
            due_date,
            priority,
        } = self;

        let mut draft = TaskDraft::new(title)?;
        if let Some(text) = description {
            draft = draft.with_description(text);
        }
        if let Some(role) = assignee {
            draft = draft.with_assignee(role);
        }
        if let Some(date) = due_date {
            draft = draft.with_due_date(date);
        }
        if let Some(level) = priority {
            draft = draft.with_priority(level);
        }
        Ok((stage, draft))
    }
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] ProjectStoreError),
    /// The operation needs an open project.
    #[error("no project is open")]
    NoCurrentProject,
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Board orchestration service.
///
/// Holds the store, clock and identifier source explicitly; there is no
/// ambient state. Every operation runs to completion synchronously.
pub struct BoardService<S, C, G>
where
    S: ProjectStore,
    C: Clock,
    G: IdGenerator + ?Sized,
{
    store: Arc<S>,
    clock: Arc<C>,
    ids: Arc<G>,
}

impl<S, C, G> Clone for BoardService<S, C, G>
where
    S: ProjectStore,
    C: Clock,
    G: IdGenerator + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            ids: Arc::clone(&self.ids),
        }
    }
}

impl<S, C, G> BoardService<S, C, G>
where
    S: ProjectStore,
    C: Clock,
    G: IdGenerator + ?Sized,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>, ids: Arc<G>) -> Self {
        Self { store, clock, ids }
    }

    /// Creates a project with empty stage columns and opens it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the name is blank, in which
    /// case nothing is stored, or [`BoardServiceError::Store`] when the store
    /// rejects the project.
    pub fn create_project(&self, request: CreateProjectRequest) -> BoardServiceResult<Project> {
        let CreateProjectRequest { name, description } = request;
        let id = ProjectId::from_uuid(self.ids.next_id());
        let project = Project::new(id, name, description, &*self.clock)?;

        self.store.append_and_open(project.clone())?;
        info!(project_id = %id, name = project.name(), "project created");
        Ok(project)
    }

    /// Opens a project by identifier.
    ///
    /// Returns `Ok(None)` and leaves the current project unchanged when no
    /// project has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store fails.
    pub fn open_project(&self, id: ProjectId) -> BoardServiceResult<Option<Project>> {
        match self.store.open(id) {
            Ok(()) => {
                debug!(project_id = %id, "project opened");
                Ok(self.store.current()?)
            }
            Err(ProjectStoreError::NotFound(_)) => {
                debug!(project_id = %id, "ignoring open of unknown project");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Returns to the project list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store fails.
    pub fn close_project(&self) -> BoardServiceResult<()> {
        self.store.close()?;
        debug!("project closed");
        Ok(())
    }

    /// Creates a task in the current project.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the title is blank,
    /// [`BoardServiceError::NoCurrentProject`] when no project is open, or
    /// [`BoardServiceError::Store`] when the store fails. No task is added
    /// in any of these cases.
    pub fn create_task(&self, request: CreateTaskRequest) -> BoardServiceResult<Task> {
        let (stage, draft) = request.into_draft()?;
        let id = TaskId::from_uuid(self.ids.next_id());
        let task = self
            .store
            .modify_current(|project| project.add_task(id, draft, stage))?
            .ok_or(BoardServiceError::NoCurrentProject)?;

        info!(task_id = %id, stage = %stage, "task created");
        Ok(task)
    }

    /// Moves a task from `todo` to `in-progress`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store fails. A task
    /// that is not in `todo`, or a missing current project, is not an error.
    pub fn start(&self, task_id: TaskId) -> BoardServiceResult<TransitionOutcome> {
        self.transition(task_id, StageAction::Start)
    }

    /// Marks a task in `in-progress` complete and moves it to `review`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store fails.
    pub fn complete_and_send_to_review(
        &self,
        task_id: TaskId,
    ) -> BoardServiceResult<TransitionOutcome> {
        self.transition(task_id, StageAction::SubmitForReview)
    }

    /// Approves a task in `review` into `done`, attributing it to
    /// `reviewer`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store fails.
    pub fn approve(
        &self,
        task_id: TaskId,
        reviewer: impl Into<String>,
    ) -> BoardServiceResult<TransitionOutcome> {
        self.transition(
            task_id,
            StageAction::Approve {
                reviewer: reviewer.into(),
            },
        )
    }

    /// Flips a task's completion flag in the `stage` column.
    ///
    /// In `in-progress` this is the same as
    /// [`Self::complete_and_send_to_review`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store fails.
    pub fn toggle_completion(
        &self,
        task_id: TaskId,
        stage: Stage,
    ) -> BoardServiceResult<TransitionOutcome> {
        let outcome = self
            .store
            .modify_current(|project| project.toggle_completion(task_id, stage))?
            .unwrap_or(TransitionOutcome::Unchanged);
        debug!(task_id = %task_id, stage = %stage, ?outcome, "completion toggled");
        Ok(outcome)
    }

    /// Permanently deletes a task from the `stage` column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store fails.
    pub fn delete_task(
        &self,
        task_id: TaskId,
        stage: Stage,
    ) -> BoardServiceResult<TransitionOutcome> {
        let removed = self
            .store
            .modify_current(|project| project.delete_task(task_id, stage))?
            .flatten();
        let outcome = if removed.is_some() {
            TransitionOutcome::Applied
        } else {
            TransitionOutcome::Unchanged
        };
        debug!(task_id = %task_id, stage = %stage, ?outcome, "task deleted");
        Ok(outcome)
    }

    /// Returns the project currently open, if any.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store fails.
    pub fn current_project(&self) -> BoardServiceResult<Option<Project>> {
        Ok(self.store.current()?)
    }

    /// Returns all projects in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store fails.
    pub fn list_projects(&self) -> BoardServiceResult<Vec<Project>> {
        Ok(self.store.list()?)
    }

    /// Returns the full board state for rendering.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store fails.
    pub fn snapshot(&self) -> BoardServiceResult<BoardSnapshot> {
        Ok(self.store.snapshot()?)
    }

    fn transition(
        &self,
        task_id: TaskId,
        action: StageAction,
    ) -> BoardServiceResult<TransitionOutcome> {
        let name = action.name();
        let outcome = self
            .store
            .modify_current(|project| project.apply(task_id, action))?
            .unwrap_or(TransitionOutcome::Unchanged);
        debug!(task_id = %task_id, action = name, ?outcome, "stage transition");
        Ok(outcome)
    }
}
