//! Given steps for stage board BDD scenarios.

use super::world::{BoardWorld, stage};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use stageboard::board::{
    domain::Priority,
    services::{CreateProjectRequest, CreateTaskRequest},
};

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let snapshot = world.service.snapshot()?;
    eyre::ensure!(snapshot.projects.is_empty(), "board should start empty");
    Ok(())
}

#[given(r#"a board with a project "{name}" described as "{description}""#)]
fn board_with_project(
    world: &mut BoardWorld,
    name: String,
    description: String,
) -> Result<(), eyre::Report> {
    world
        .service
        .create_project(CreateProjectRequest::new(name).with_description(description))
        .wrap_err("create project for scenario")?;
    Ok(())
}

#[given(r#"a task "{title}" in the "{column}" column"#)]
fn task_in_column(
    world: &mut BoardWorld,
    title: String,
    column: String,
) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new(stage(&column)?, title.clone());
    add_task(world, title, request)
}

#[given(r#"a task "{title}" in the "{column}" column with priority "{priority}""#)]
fn task_in_column_with_priority(
    world: &mut BoardWorld,
    title: String,
    column: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let level = Priority::try_from(priority.as_str())
        .map_err(|err| eyre::eyre!("invalid priority in scenario: {err}"))?;
    let request = CreateTaskRequest::new(stage(&column)?, title.clone()).with_priority(level);
    add_task(world, title, request)
}

fn add_task(
    world: &mut BoardWorld,
    title: String,
    request: CreateTaskRequest,
) -> Result<(), eyre::Report> {
    let task = world
        .service
        .create_task(request)
        .wrap_err("create task for scenario")?;
    world.tasks.insert(title, task.id());
    Ok(())
}
