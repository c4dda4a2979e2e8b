//! Pipeline stages and the legal stage graph.

use super::ParseStageError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four fixed pipeline stages.
///
/// A stage doubles as the identifier of the column holding tasks in that
/// stage, and as the `status` recorded on each of those tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    /// Work that has not started.
    Todo,
    /// Work being carried out.
    InProgress,
    /// Finished work awaiting approval.
    Review,
    /// Approved work.
    Done,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Self; 4] = [Self::Todo, Self::InProgress, Self::Review, Self::Done];

    /// Returns the canonical identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }

    /// Returns the column title shown for this stage.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }

    /// Returns the stage a task moves to from this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Todo => Some(Self::InProgress),
            Self::InProgress => Some(Self::Review),
            Self::Review => Some(Self::Done),
            Self::Done => None,
        }
    }

    /// Returns whether moving a task from this stage to `target` is legal.
    ///
    /// Only single forward steps are allowed: no skipping and no moving
    /// backwards.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Todo, Self::InProgress)
                | (Self::InProgress, Self::Review)
                | (Self::Review, Self::Done)
        )
    }

    /// Returns whether no transition leaves this stage.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Stage {
    type Error = ParseStageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value
            .trim()
            .to_ascii_lowercase()
            .replace([' ', '_'], "-");
        match normalized.as_str() {
            "todo" | "to-do" => Ok(Self::Todo),
            "in-progress" | "inprogress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "done" => Ok(Self::Done),
            _ => Err(ParseStageError(value.to_owned())),
        }
    }
}
