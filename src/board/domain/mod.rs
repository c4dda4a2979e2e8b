//! Domain model for the stage board.
//!
//! Projects own four fixed stage columns; columns own ordered tasks. The
//! transition engine in [`Project::apply`] is the only code that moves tasks
//! between columns, and it keeps each task's `status` equal to the stage of
//! the column holding it.

mod column;
mod error;
mod fields;
mod ids;
mod project;
mod snapshot;
mod stage;
mod task;
mod transition;

pub use column::Column;
pub use error::{BoardDomainError, ParsePriorityError, ParseRoleError, ParseStageError};
pub use fields::{Priority, Role};
pub use ids::{ProjectId, TaskId};
pub use project::Project;
pub use snapshot::BoardSnapshot;
pub use stage::Stage;
pub use task::{Task, TaskDraft};
pub use transition::{StageAction, TransitionOutcome};
