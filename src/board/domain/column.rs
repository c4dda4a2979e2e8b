//! Stage column holding an ordered task sequence.

use super::{BoardDomainError, Stage, Task, TaskId};
use serde::{Deserialize, Serialize};

/// One of the four fixed columns of a project.
///
/// Task order is insertion order; moved tasks are appended at the end.
/// Deserialization checks the title against the stage and every task's
/// status against the column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ColumnRecord")]
pub struct Column {
    id: Stage,
    title: String,
    tasks: Vec<Task>,
}

#[derive(Deserialize)]
struct ColumnRecord {
    id: Stage,
    title: String,
    tasks: Vec<Task>,
}

impl TryFrom<ColumnRecord> for Column {
    type Error = BoardDomainError;

    fn try_from(record: ColumnRecord) -> Result<Self, Self::Error> {
        let ColumnRecord { id, title, tasks } = record;

        if title != id.title() {
            return Err(BoardDomainError::ColumnTitleMismatch { stage: id, title });
        }
        if let Some(task) = tasks.iter().find(|task| task.status() != id) {
            return Err(BoardDomainError::TaskStatusMismatch {
                task_id: task.id(),
                status: task.status(),
                column: id,
            });
        }
        Ok(Self { id, title, tasks })
    }
}

impl Column {
    pub(super) fn empty(stage: Stage) -> Self {
        Self {
            id: stage,
            title: stage.title().to_owned(),
            tasks: Vec::new(),
        }
    }

    /// Returns the stage this column represents.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the column holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the task with the given identifier, if present.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Returns whether the column holds the given task.
    #[must_use]
    pub fn contains(&self, task_id: TaskId) -> bool {
        self.task(task_id).is_some()
    }

    pub(super) fn position(&self, task_id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == task_id)
    }

    pub(super) fn task_mut(&mut self, task_id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == task_id)
    }

    pub(super) fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Removes the task at `index`; callers obtain `index` from
    /// [`Self::position`].
    pub(super) fn take(&mut self, index: usize) -> Option<Task> {
        (index < self.tasks.len()).then(|| self.tasks.remove(index))
    }
}
