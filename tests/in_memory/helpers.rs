//! Shared test helpers for in-memory board integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use stageboard::board::{
    adapters::{SequentialIdGenerator, memory::InMemoryProjectStore},
    domain::{Project, Stage},
    services::BoardService,
};
use std::sync::Arc;

/// Board service wired to the in-memory store with predictable ids.
pub type TestBoardService =
    BoardService<InMemoryProjectStore, DefaultClock, SequentialIdGenerator>;

/// Provides a fresh in-memory store for each test.
#[fixture]
pub fn store() -> InMemoryProjectStore {
    InMemoryProjectStore::new()
}

/// Builds a service over `store` with sequential ids in `namespace`.
#[must_use]
pub fn service_over(store: &InMemoryProjectStore, namespace: u64) -> TestBoardService {
    BoardService::new(
        Arc::new(store.clone()),
        Arc::new(DefaultClock),
        Arc::new(SequentialIdGenerator::new(namespace)),
    )
}

/// Returns the task titles of one column in display order.
#[must_use]
pub fn titles(project: &Project, stage: Stage) -> Vec<String> {
    project
        .column(stage)
        .tasks()
        .iter()
        .map(|task| task.title().to_owned())
        .collect()
}

/// Asserts that every task's status matches the column holding it.
pub fn assert_statuses_match_columns(project: &Project) {
    for column in project.columns() {
        for task in column.tasks() {
            assert_eq!(
                task.status(),
                column.stage(),
                "task '{}' has status {} but sits in {}",
                task.title(),
                task.status(),
                column.stage()
            );
        }
    }
}
