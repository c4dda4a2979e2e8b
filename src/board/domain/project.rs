//! Project aggregate root holding the four stage columns.

use super::{BoardDomainError, Column, ProjectId, Stage, Task, TaskDraft, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Project aggregate root.
///
/// The column set is fixed at construction: exactly one column per
/// [`Stage`], in pipeline order. Tasks are added, moved and removed only
/// through the methods in this module and in the transition engine.
/// Deserialized projects are checked for a non-blank name, columns in
/// pipeline order and task identifiers that appear only once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProjectRecord")]
pub struct Project {
    id: ProjectId,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    columns: [Column; 4],
}

#[derive(Deserialize)]
struct ProjectRecord {
    id: ProjectId,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    columns: [Column; 4],
}

impl TryFrom<ProjectRecord> for Project {
    type Error = BoardDomainError;

    fn try_from(record: ProjectRecord) -> Result<Self, Self::Error> {
        let ProjectRecord {
            id,
            name,
            description,
            created_at,
            columns,
        } = record;

        if name.trim().is_empty() {
            return Err(BoardDomainError::EmptyProjectName);
        }
        for (column, expected) in columns.iter().zip(Stage::ALL) {
            if column.stage() != expected {
                return Err(BoardDomainError::ColumnOutOfOrder {
                    expected,
                    found: column.stage(),
                });
            }
        }
        let mut seen = HashSet::new();
        let tasks = columns.iter().flat_map(|column| column.tasks().iter());
        for task in tasks {
            if !seen.insert(task.id()) {
                return Err(BoardDomainError::DuplicateTask(task.id()));
            }
        }

        Ok(Self {
            id,
            name,
            description,
            created_at,
            columns,
        })
    }
}

impl Project {
    /// Creates an empty project with the four stage columns.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyProjectName`] when the name is empty
    /// after trimming.
    pub fn new(
        id: ProjectId,
        name: impl Into<String>,
        description: Option<String>,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        let raw_name = name.into();
        if raw_name.trim().is_empty() {
            return Err(BoardDomainError::EmptyProjectName);
        }

        Ok(Self {
            id,
            name: raw_name,
            description,
            created_at: clock.utc(),
            columns: Stage::ALL.map(Column::empty),
        })
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the columns in pipeline order.
    #[must_use]
    pub const fn columns(&self) -> &[Column; 4] {
        &self.columns
    }

    /// Returns the column for `stage`.
    #[must_use]
    pub const fn column(&self, stage: Stage) -> &Column {
        let [todo, in_progress, review, done] = &self.columns;
        match stage {
            Stage::Todo => todo,
            Stage::InProgress => in_progress,
            Stage::Review => review,
            Stage::Done => done,
        }
    }

    pub(super) fn column_mut(&mut self, stage: Stage) -> &mut Column {
        let [todo, in_progress, review, done] = &mut self.columns;
        match stage {
            Stage::Todo => todo,
            Stage::InProgress => in_progress,
            Stage::Review => review,
            Stage::Done => done,
        }
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Finds a task anywhere in the project.
    #[must_use]
    pub fn find_task(&self, task_id: TaskId) -> Option<&Task> {
        self.columns.iter().find_map(|column| column.task(task_id))
    }

    /// Returns every task in pipeline order, column by column.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.columns.iter().flat_map(|column| column.tasks().iter())
    }

    /// Creates a task from `draft` at the end of the `stage` column.
    ///
    /// The new task's status is `stage`.
    pub fn add_task(&mut self, id: TaskId, draft: TaskDraft, stage: Stage) -> Task {
        let task = Task::from_draft(id, draft, stage);
        self.column_mut(stage).push(task.clone());
        task
    }
}
