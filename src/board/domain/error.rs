//! Error types for board domain validation and parsing.

use super::{Stage, TaskId};
use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// A stored column sits at the position of another stage.
    #[error("column {found} found where {expected} belongs")]
    ColumnOutOfOrder {
        /// Stage owning this position.
        expected: Stage,
        /// Stage of the column found there.
        found: Stage,
    },

    /// A stored column title does not match its stage.
    #[error("column {stage} has title '{title}'")]
    ColumnTitleMismatch {
        /// Column stage.
        stage: Stage,
        /// Title found.
        title: String,
    },

    /// A stored task's status differs from the column holding it.
    #[error("task {task_id} has status {status} but sits in {column}")]
    TaskStatusMismatch {
        /// Offending task.
        task_id: TaskId,
        /// Status recorded on the task.
        status: Stage,
        /// Column holding the task.
        column: Stage,
    },

    /// A stored task carries a reviewer without being done.
    #[error("task {0} has a reviewer but is not done")]
    ReviewerOutsideDone(TaskId),

    /// A stored task appears more than once in a project.
    #[error("task {0} appears more than once")]
    DuplicateTask(TaskId),
}

/// Error returned while parsing a pipeline stage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown stage: {0}")]
pub struct ParseStageError(pub String);

/// Error returned while parsing a task priority.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing an assignee role.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);
