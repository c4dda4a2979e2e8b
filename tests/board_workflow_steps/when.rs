//! When steps for stage board BDD scenarios.

use super::world::{BoardWorld, stage};
use rstest_bdd_macros::when;
use stageboard::board::services::CreateProjectRequest;

#[when(r#"the task "{title}" is started"#)]
fn start_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    world.remember_board()?;
    world.last_outcome = Some(world.service.start(task_id)?);
    Ok(())
}

#[when(r#"the task "{title}" is submitted for review"#)]
fn submit_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    world.remember_board()?;
    world.last_outcome = Some(world.service.complete_and_send_to_review(task_id)?);
    Ok(())
}

#[when(r#"the task "{title}" is approved by "{reviewer}""#)]
fn approve_task(
    world: &mut BoardWorld,
    title: String,
    reviewer: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    world.remember_board()?;
    world.last_outcome = Some(world.service.approve(task_id, reviewer)?);
    Ok(())
}

#[when(r#"the completion of "{title}" is toggled in the "{column}" column"#)]
fn toggle_task(world: &mut BoardWorld, title: String, column: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    world.remember_board()?;
    world.last_outcome = Some(world.service.toggle_completion(task_id, stage(&column)?)?);
    Ok(())
}

#[when(r#"the task "{title}" is deleted from the "{column}" column"#)]
fn delete_task(world: &mut BoardWorld, title: String, column: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    world.remember_board()?;
    world.last_outcome = Some(world.service.delete_task(task_id, stage(&column)?)?);
    Ok(())
}

#[when("a project with a blank name is created")]
fn create_blank_project(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.remember_board()?;
    let result = world.service.create_project(CreateProjectRequest::new("   "));
    eyre::ensure!(result.is_err(), "blank project name should be rejected");
    Ok(())
}

#[when("the project list is opened")]
fn open_project_list(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.remember_board()?;
    world.service.close_project()?;
    Ok(())
}
