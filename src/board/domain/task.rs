//! Task record and the validated input used to create one.

use super::{BoardDomainError, Priority, Role, Stage, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Validated input for a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: Option<String>,
    assignee: Option<Role>,
    due_date: Option<NaiveDate>,
    priority: Priority,
}

impl TaskDraft {
    /// Creates a draft with the required title and default optional fields.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the title is empty
    /// after trimming.
    pub fn new(title: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw_title = title.into();
        if raw_title.trim().is_empty() {
            return Err(BoardDomainError::EmptyTaskTitle);
        }
        Ok(Self {
            title: raw_title,
            description: None,
            assignee: None,
            due_date: None,
            priority: Priority::default(),
        })
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

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// A work item living in exactly one column of a project.
///
/// Tasks have no public mutators. Their `status`, completion flag and
/// reviewer are changed only by the transition engine on [`super::Project`].
/// Deserialization rejects a blank title and a reviewer on a task that is
/// not done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    assignee: Option<Role>,
    due_date: Option<NaiveDate>,
    completed: bool,
    priority: Priority,
    status: Stage,
    reviewed_by: Option<String>,
}

#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    title: String,
    description: Option<String>,
    assignee: Option<Role>,
    due_date: Option<NaiveDate>,
    completed: bool,
    priority: Priority,
    status: Stage,
    reviewed_by: Option<String>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = BoardDomainError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let TaskRecord {
            id,
            title,
            description,
            assignee,
            due_date,
            completed,
            priority,
            status,
            reviewed_by,
        } = record;

        if title.trim().is_empty() {
            return Err(BoardDomainError::EmptyTaskTitle);
        }
        if reviewed_by.is_some() && status != Stage::Done {
            return Err(BoardDomainError::ReviewerOutsideDone(id));
        }
        Ok(Self {
            id,
            title,
            description,
            assignee,
            due_date,
            completed,
            priority,
            status,
            reviewed_by,
        })
    }
}

impl Task {
    /// Builds a task from a draft, placed in `stage`.
    pub(super) fn from_draft(id: TaskId, draft: TaskDraft, stage: Stage) -> Self {
        let TaskDraft {
            title,
            description,
            assignee,
            due_date,
            priority,
        } = draft;

        Self {
            id,
            title,
            description,
            assignee,
            due_date,
            completed: false,
            priority,
            status: stage,
            reviewed_by: None,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the assignee role, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<Role> {
        self.assignee
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns whether the task is marked complete.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the stage of the column holding this task.
    #[must_use]
    pub const fn status(&self) -> Stage {
        self.status
    }

    /// Returns who approved the task into `done`, if anyone.
    #[must_use]
    pub fn reviewed_by(&self) -> Option<&str> {
        self.reviewed_by.as_deref()
    }

    pub(super) const fn enter(&mut self, stage: Stage) {
        self.status = stage;
    }

    pub(super) const fn mark_completed(&mut self) {
        self.completed = true;
    }

    pub(super) const fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    pub(super) fn record_reviewer(&mut self, reviewer: String) {
        self.reviewed_by = Some(reviewer);
    }
}
