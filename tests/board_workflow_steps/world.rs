//! Shared world state for stage board BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use stageboard::board::{
    adapters::{SequentialIdGenerator, memory::InMemoryProjectStore},
    domain::{BoardSnapshot, Project, Stage, TaskId, TransitionOutcome},
    services::BoardService,
};

/// Service type used by the BDD world.
pub type TestBoardService =
    BoardService<InMemoryProjectStore, DefaultClock, SequentialIdGenerator>;

/// Scenario world for board workflow behaviour tests.
pub struct BoardWorld {
    pub service: TestBoardService,
    pub tasks: HashMap<String, TaskId>,
    pub before: Option<BoardSnapshot>,
    pub last_outcome: Option<TransitionOutcome>,
}

impl BoardWorld {
    /// Creates a world with an empty board.
    #[must_use]
    pub fn new() -> Self {
        let service = BoardService::new(
            Arc::new(InMemoryProjectStore::new()),
            Arc::new(DefaultClock),
            Arc::new(SequentialIdGenerator::new(1)),
        );

        Self {
            service,
            tasks: HashMap::new(),
            before: None,
            last_outcome: None,
        }
    }

    /// Looks up a task created earlier in the scenario by title.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.tasks
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("no task titled '{title}' in scenario world"))
    }

    /// Records the board state before a `when` step acts.
    pub fn remember_board(&mut self) -> Result<(), eyre::Report> {
        self.before = Some(self.service.snapshot()?);
        Ok(())
    }

    /// Returns the project currently open.
    pub fn open_project(&self) -> Result<Project, eyre::Report> {
        self.service
            .current_project()?
            .ok_or_else(|| eyre::eyre!("no project is open"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Parses a column name used in a feature file.
pub fn stage(column: &str) -> Result<Stage, eyre::Report> {
    Stage::try_from(column).map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))
}
