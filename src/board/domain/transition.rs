//! Stage transition engine.
//!
//! Every move between columns goes through [`Project::apply`]. The task is
//! located in its source column before anything is touched, so a move is
//! either carried out completely (remove, update fields, append) or not at
//! all. A task that is not in the expected source column leaves the project
//! unchanged and is reported as [`TransitionOutcome::Unchanged`] rather than
//! as an error.

use super::{Project, Stage, Task, TaskId};
use serde::{Deserialize, Serialize};

/// A user action that moves a task one stage forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StageAction {
    /// `todo → in-progress`.
    Start,
    /// `in-progress → review`, marking the task complete.
    SubmitForReview,
    /// `review → done`, recording who approved the task.
    Approve {
        /// Reviewer identity stored on the task.
        reviewer: String,
    },
}

impl StageAction {
    /// Returns the stage the task must currently be in.
    #[must_use]
    pub const fn source(&self) -> Stage {
        match self {
            Self::Start => Stage::Todo,
            Self::SubmitForReview => Stage::InProgress,
            Self::Approve { .. } => Stage::Review,
        }
    }

    /// Returns the stage the task ends up in.
    #[must_use]
    pub const fn target(&self) -> Stage {
        match self {
            Self::Start => Stage::InProgress,
            Self::SubmitForReview => Stage::Review,
            Self::Approve { .. } => Stage::Done,
        }
    }

    /// Returns a short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::SubmitForReview => "submit_for_review",
            Self::Approve { .. } => "approve",
        }
    }
}

/// Result of asking the engine to change a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[must_use]
pub enum TransitionOutcome {
    /// The change was carried out.
    Applied,
    /// The precondition did not hold; the project is untouched.
    Unchanged,
}

impl TransitionOutcome {
    /// Returns whether the project was changed.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

impl Project {
    /// Moves a task one stage forward according to `action`.
    ///
    /// The task is appended to the end of the target column and its status
    /// set to the target stage. `SubmitForReview` also marks it complete and
    /// `Approve` records the reviewer.
    pub fn apply(&mut self, task_id: TaskId, action: StageAction) -> TransitionOutcome {
        let source = action.source();
        let target = action.target();
        debug_assert!(source.can_transition_to(target));

        let Some(index) = self.column(source).position(task_id) else {
            return TransitionOutcome::Unchanged;
        };
        let Some(mut task) = self.column_mut(source).take(index) else {
            return TransitionOutcome::Unchanged;
        };

        task.enter(target);
        match action {
            StageAction::Start => {}
            StageAction::SubmitForReview => task.mark_completed(),
            StageAction::Approve { reviewer } => task.record_reviewer(reviewer),
        }
        self.column_mut(target).push(task);
        TransitionOutcome::Applied
    }

    /// Flips the completion flag of a task in place.
    ///
    /// Completing a task in `in-progress` is the `SubmitForReview`
    /// transition instead: the task moves to `review`.
    pub fn toggle_completion(&mut self, task_id: TaskId, stage: Stage) -> TransitionOutcome {
        if stage == Stage::InProgress {
            return self.apply(task_id, StageAction::SubmitForReview);
        }

        match self.column_mut(stage).task_mut(task_id) {
            Some(task) => {
                task.toggle_completed();
                TransitionOutcome::Applied
            }
            None => TransitionOutcome::Unchanged,
        }
    }

    /// Permanently removes a task from the `stage` column.
    ///
    /// Returns the removed task, or `None` when the column does not hold it.
    pub fn delete_task(&mut self, task_id: TaskId, stage: Stage) -> Option<Task> {
        let column = self.column_mut(stage);
        let index = column.position(task_id)?;
        column.take(index)
    }
}
