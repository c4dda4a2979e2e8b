//! Then steps for stage board BDD scenarios.

use super::world::{BoardWorld, stage};
use rstest_bdd_macros::then;
use stageboard::board::domain::TransitionOutcome;

#[then(r#"the "{column}" column is empty"#)]
fn column_is_empty(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let project = world.open_project()?;
    let tasks = project.column(stage(&column)?).tasks();
    eyre::ensure!(tasks.is_empty(), "expected {column} to be empty, found {tasks:?}");
    Ok(())
}

#[then(r#"the "{column}" column holds "{title}""#)]
fn column_holds(world: &BoardWorld, column: String, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let project = world.open_project()?;
    let expected = stage(&column)?;
    let task = project
        .column(expected)
        .task(task_id)
        .ok_or_else(|| eyre::eyre!("{column} does not hold '{title}'"))?;
    eyre::ensure!(
        task.status() == expected,
        "task status {} does not match column {column}",
        task.status()
    );
    Ok(())
}

#[then(r#"the task "{title}" is completed"#)]
fn task_is_completed(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let project = world.open_project()?;
    let task = project
        .find_task(task_id)
        .ok_or_else(|| eyre::eyre!("task '{title}' is missing"))?;
    eyre::ensure!(task.is_completed(), "task '{title}' should be completed");
    Ok(())
}

#[then(r#"the task "{title}" was reviewed by "{reviewer}""#)]
fn task_reviewed_by(
    world: &BoardWorld,
    title: String,
    reviewer: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let project = world.open_project()?;
    let task = project
        .find_task(task_id)
        .ok_or_else(|| eyre::eyre!("task '{title}' is missing"))?;
    eyre::ensure!(
        task.reviewed_by() == Some(reviewer.as_str()),
        "expected reviewer {reviewer}, found {:?}",
        task.reviewed_by()
    );
    Ok(())
}

#[then("the action is reported as unchanged")]
fn action_unchanged(world: &BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.last_outcome == Some(TransitionOutcome::Unchanged),
        "expected an unchanged outcome, found {:?}",
        world.last_outcome
    );
    Ok(())
}

#[then("the board is unchanged")]
fn board_is_unchanged(world: &BoardWorld) -> Result<(), eyre::Report> {
    let before = world
        .before
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no board state recorded before the action"))?;
    eyre::ensure!(
        &world.service.snapshot()? == before,
        "board changed after a no-op action"
    );
    Ok(())
}

#[then("the project holds {count:u64} tasks")]
fn project_holds_tasks(world: &BoardWorld, count: u64) -> Result<(), eyre::Report> {
    let project = world.open_project()?;
    eyre::ensure!(
        project.task_count() == usize::try_from(count)?,
        "expected {count} tasks, found {}",
        project.task_count()
    );
    Ok(())
}

#[then("the board holds {count:u64} projects")]
fn board_holds_projects(world: &BoardWorld, count: u64) -> Result<(), eyre::Report> {
    let projects = world.service.list_projects()?;
    eyre::ensure!(
        projects.len() == usize::try_from(count)?,
        "expected {count} projects, found {}",
        projects.len()
    );
    Ok(())
}

#[then("no project is open")]
fn no_project_open(world: &BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.service.current_project()?.is_none(),
        "a project is still open"
    );
    Ok(())
}

#[then("the open project matches its list entry")]
fn open_project_matches_entry(world: &BoardWorld) -> Result<(), eyre::Report> {
    let snapshot = world.service.snapshot()?;
    let current = snapshot
        .current
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no project is open"))?;
    let entry = snapshot
        .project(current.id())
        .ok_or_else(|| eyre::eyre!("open project is missing from the list"))?;
    eyre::ensure!(current == entry, "open project diverged from its list entry");
    Ok(())
}
