//! Text and JSON rendering of board snapshots.

use super::config::OutputFormat;
use crate::board::domain::{BoardSnapshot, Column, Project, Task};
use std::fmt::{self, Write};
use thiserror::Error;

const SHORT_ID_LEN: usize = 8;
const EMPTY_BOARD: &str = "No projects yet. Create your first project with: new-project <name>";

/// Errors raised while rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Formatting into the output buffer failed.
    #[error("failed to format board")]
    Format(#[from] fmt::Error),
    /// JSON serialization failed.
    #[error("failed to serialize board")]
    Json(#[from] serde_json::Error),
}

/// Renders `snapshot` in `format`.
///
/// # Errors
///
/// Returns [`RenderError`] when formatting or serialization fails.
pub fn render(snapshot: &BoardSnapshot, format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Text => Ok(render_text(snapshot)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(snapshot)?),
    }
}

/// Returns the leading characters of an identifier shown in text output.
#[must_use]
pub fn short_id(id: &impl ToString) -> String {
    id.to_string().chars().take(SHORT_ID_LEN).collect()
}

fn render_text(snapshot: &BoardSnapshot) -> Result<String, fmt::Error> {
    let mut out = String::new();
    match &snapshot.current {
        Some(project) => write_project(&mut out, project)?,
        None => write_project_list(&mut out, &snapshot.projects)?,
    }
    Ok(out.trim_end().to_owned())
}

fn write_project_list(out: &mut String, projects: &[Project]) -> fmt::Result {
    if projects.is_empty() {
        return writeln!(out, "{EMPTY_BOARD}");
    }

    writeln!(out, "Projects ({})", projects.len())?;
    for project in projects {
        write!(out, "  [{}] {}", short_id(&project.id()), project.name())?;
        if let Some(description) = project.description() {
            write!(out, " - {description}")?;
        }
        let count = project.task_count();
        writeln!(
            out,
            " (created {}, {count} {})",
            project.created_at().format("%Y-%m-%d"),
            if count == 1 { "task" } else { "tasks" }
        )?;
    }
    Ok(())
}

fn write_project(out: &mut String, project: &Project) -> fmt::Result {
    writeln!(out, "{}  [{}]", project.name(), short_id(&project.id()))?;
    if let Some(description) = project.description() {
        writeln!(out, "{description}")?;
    }
    for column in project.columns() {
        write_column(out, column)?;
    }
    Ok(())
}

fn write_column(out: &mut String, column: &Column) -> fmt::Result {
    writeln!(out, "== {} ({}) ==", column.title(), column.len())?;
    column.tasks().iter().try_for_each(|task| write_task(out, task))
}

fn write_task(out: &mut String, task: &Task) -> fmt::Result {
    let mark = if task.is_completed() { 'x' } else { ' ' };
    write!(
        out,
        "  [{mark}] {} {}  priority={}",
        short_id(&task.id()),
        task.title(),
        task.priority()
    )?;
    if let Some(assignee) = task.assignee() {
        write!(out, "  assignee={assignee}")?;
    }
    if let Some(due) = task.due_date() {
        write!(out, "  due={due}")?;
    }
    if let Some(reviewer) = task.reviewed_by() {
        write!(out, "  reviewed by {reviewer}")?;
    }
    writeln!(out)?;
    if let Some(description) = task.description() {
        writeln!(out, "      {description}")?;
    }
    Ok(())
}
