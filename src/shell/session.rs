//! Interactive session dispatching commands to the board service.

use super::{
    command::{Command, HELP},
    config::ShellConfig,
    render::{RenderError, render},
};
use crate::board::{
    domain::{BoardSnapshot, ProjectId, Stage, TaskId, TransitionOutcome},
    ports::{IdGenerator, ProjectStore},
    services::{BoardService, BoardServiceError},
};
use mockable::Clock;
use thiserror::Error;
use tracing::debug;

/// What the caller should do after a line is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Print the text and keep reading.
    Output(String),
    /// End the session.
    Quit,
}

/// Errors that end a session.
///
/// Bad input never surfaces here; it is logged and the board is shown
/// unchanged.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The store failed.
    #[error(transparent)]
    Service(#[from] BoardServiceError),
    /// The board could not be rendered.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Shell session over one board service.
pub struct Session<S, C, G>
where
    S: ProjectStore,
    C: Clock,
    G: IdGenerator + ?Sized,
{
    service: BoardService<S, C, G>,
    config: ShellConfig,
}

impl<S, C, G> Session<S, C, G>
where
    S: ProjectStore,
    C: Clock,
    G: IdGenerator + ?Sized,
{
    /// Creates a session.
    #[must_use]
    pub const fn new(service: BoardService<S, C, G>, config: ShellConfig) -> Self {
        Self { service, config }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Renders the current board.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the store or the renderer fails.
    pub fn render(&self) -> Result<String, SessionError> {
        let snapshot = self.service.snapshot()?;
        Ok(render(&snapshot, self.config.format)?)
    }

    /// Parses and applies one input line, then renders the board.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] only when the store or the renderer fails.
    pub fn handle_line(&self, line: &str) -> Result<Step, SessionError> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                debug!(error = %err, line, "nothing happened: unparsable command");
                return self.render().map(Step::Output);
            }
        };

        match command {
            Command::Quit => return Ok(Step::Quit),
            Command::Help => return Ok(Step::Output(HELP.to_owned())),
            other => self.dispatch(other)?,
        }
        self.render().map(Step::Output)
    }

    fn dispatch(&self, command: Command) -> Result<(), SessionError> {
        let outcome = match command {
            Command::NewProject(request) => {
                Self::absorb(self.service.create_project(request).map(|_| ()))?;
                return Ok(());
            }
            Command::Open(reference) => {
                let snapshot = self.service.snapshot()?;
                if let Some(id) = resolve_project(&snapshot, &reference) {
                    if self.service.open_project(id)?.is_none() {
                        debug!(project_id = %id, "nothing happened: project vanished");
                    }
                } else {
                    debug!(reference, "nothing happened: no matching project");
                }
                return Ok(());
            }
            Command::Back => {
                self.service.close_project()?;
                return Ok(());
            }
            Command::Add(request) => {
                Self::absorb(self.service.create_task(request).map(|_| ()))?;
                return Ok(());
            }
            Command::Start(reference) => {
                self.with_task(&reference, None, |id| self.service.start(id))?
            }
            Command::Submit(reference) => self.with_task(&reference, None, |id| {
                self.service.complete_and_send_to_review(id)
            })?,
            Command::Toggle { task, stage } => self.with_task(&task, Some(stage), |id| {
                self.service.toggle_completion(id, stage)
            })?,
            Command::Approve { task, reviewer } => {
                let name = reviewer.unwrap_or_else(|| self.config.reviewer.clone());
                self.with_task(&task, None, |id| self.service.approve(id, name))?
            }
            Command::Delete { task, stage } => self.with_task(&task, Some(stage), |id| {
                self.service.delete_task(id, stage)
            })?,
            Command::Show | Command::Help | Command::Quit => return Ok(()),
        };

        if outcome == TransitionOutcome::Unchanged {
            debug!("nothing happened: transition did not apply");
        }
        Ok(())
    }

    fn with_task<F>(
        &self,
        reference: &str,
        stage: Option<Stage>,
        apply: F,
    ) -> Result<TransitionOutcome, SessionError>
    where
        F: FnOnce(TaskId) -> Result<TransitionOutcome, BoardServiceError>,
    {
        let snapshot = self.service.snapshot()?;
        match resolve_task(&snapshot, reference, stage) {
            Some(id) => Ok(apply(id)?),
            None => {
                debug!(reference, ?stage, "nothing happened: no matching task");
                Ok(TransitionOutcome::Unchanged)
            }
        }
    }

    fn absorb(result: Result<(), BoardServiceError>) -> Result<(), SessionError> {
        match result {
            Ok(()) => Ok(()),
            Err(err @ (BoardServiceError::Domain(_) | BoardServiceError::NoCurrentProject)) => {
                debug!(error = %err, "nothing happened: request rejected");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Resolves a project reference: a full id or a unique id prefix.
#[must_use]
pub fn resolve_project(snapshot: &BoardSnapshot, reference: &str) -> Option<ProjectId> {
    unique_match(
        snapshot.projects.iter().map(|project| project.id()),
        reference,
    )
}

/// Resolves a task reference in the open project, optionally limited to one
/// column.
#[must_use]
pub fn resolve_task(
    snapshot: &BoardSnapshot,
    reference: &str,
    stage: Option<Stage>,
) -> Option<TaskId> {
    let project = snapshot.current.as_ref()?;
    let ids = project
        .tasks()
        .filter(|task| stage.is_none_or(|wanted| task.status() == wanted))
        .map(|task| task.id());
    unique_match(ids, reference)
}

fn unique_match<I, T>(ids: I, reference: &str) -> Option<T>
where
    I: Iterator<Item = T>,
    T: ToString,
{
    let needle = reference.trim().to_ascii_lowercase();
    if needle.is_empty() {
        return None;
    }
    let mut matches = ids.filter(|id| id.to_string().starts_with(&needle));
    let first = matches.next()?;
    matches.next().is_none().then_some(first)
}
