//! Line-oriented command language.

use crate::board::{
    domain::{ParsePriorityError, ParseRoleError, ParseStageError, Priority, Role, Stage},
    services::{CreateProjectRequest, CreateTaskRequest},
};
use chrono::NaiveDate;
use std::str::FromStr;
use thiserror::Error;

const FIELD_SEPARATOR: char = ';';
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Usage text printed by `help`.
pub const HELP: &str = "\
commands:
  new-project <name> [; description]
  open <project-id>
  back
  add <column> <title> [; desc=... ; assignee=... ; due=YYYY-MM-DD ; priority=low|medium|high]
  start <task-id>
  submit <task-id>
  toggle <task-id> <column>
  approve <task-id> [reviewer]
  delete <task-id> <column>
  show
  help
  quit
ids may be shortened to any unique prefix";

/// Errors raised while parsing a command line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandParseError {
    /// The first word is not a known command.
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// A required argument is absent.
    #[error("{command} needs a {argument}")]
    MissingArgument {
        /// Command being parsed.
        command: &'static str,
        /// Name of the absent argument.
        argument: &'static str,
    },

    /// A column name is not one of the four stages.
    #[error(transparent)]
    InvalidStage(#[from] ParseStageError),

    /// A priority value is not recognised.
    #[error(transparent)]
    InvalidPriority(#[from] ParsePriorityError),

    /// An assignee is not in the role roster.
    #[error(transparent)]
    InvalidRole(#[from] ParseRoleError),

    /// A due date is not `YYYY-MM-DD`.
    #[error("invalid due date '{value}': {reason}")]
    InvalidDate {
        /// Raw input.
        value: String,
        /// Parser message.
        reason: String,
    },

    /// A `key=value` field has an unknown key or no `=`.
    #[error("unknown task field '{0}'")]
    UnknownField(String),
}

/// One parsed user intent.
///
/// Task and project references are kept as typed text; the session resolves
/// them against the current board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a project and open it.
    NewProject(CreateProjectRequest),
    /// Open a project by id or id prefix.
    Open(String),
    /// Return to the project list.
    Back,
    /// Create a task in the open project.
    Add(CreateTaskRequest),
    /// Move a task from `todo` to `in-progress`.
    Start(String),
    /// Complete a task and send it to `review`.
    Submit(String),
    /// Flip a task's completion flag in a column.
    Toggle {
        /// Task reference.
        task: String,
        /// Column holding the task.
        stage: Stage,
    },
    /// Approve a task in `review`.
    Approve {
        /// Task reference.
        task: String,
        /// Reviewer name; the configured default applies when absent.
        reviewer: Option<String>,
    },
    /// Delete a task from a column.
    Delete {
        /// Task reference.
        task: String,
        /// Column holding the task.
        stage: Stage,
    },
    /// Render the board.
    Show,
    /// Print usage.
    Help,
    /// End the session.
    Quit,
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let trimmed = line.trim();
        let (verb, rest) = trimmed
            .split_once(char::is_whitespace)
            .map_or((trimmed, ""), |(verb, rest)| (verb, rest.trim()));

        match verb.to_ascii_lowercase().as_str() {
            "" | "show" | "ls" => Ok(Self::Show),
            "new-project" | "new" => Ok(parse_new_project(rest)),
            "open" => required(rest, "open", "project id").map(Self::Open),
            "back" => Ok(Self::Back),
            "add" => parse_add(rest),
            "start" => required(rest, "start", "task id").map(Self::Start),
            "submit" => required(rest, "submit", "task id").map(Self::Submit),
            "toggle" => {
                let (task, stage) = task_and_stage(rest, "toggle")?;
                Ok(Self::Toggle { task, stage })
            }
            "approve" => parse_approve(rest),
            "delete" | "rm" => {
                let (task, stage) = task_and_stage(rest, "delete")?;
                Ok(Self::Delete { task, stage })
            }
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandParseError::UnknownCommand(other.to_owned())),
        }
    }
}

fn required(
    rest: &str,
    command: &'static str,
    argument: &'static str,
) -> Result<String, CommandParseError> {
    rest.split_whitespace()
        .next()
        .map(str::to_owned)
        .ok_or(CommandParseError::MissingArgument { command, argument })
}

// Blank names pass through so the service can reject them.
fn parse_new_project(rest: &str) -> Command {
    let (name, description) = split_field(rest);
    let mut request = CreateProjectRequest::new(name);
    if let Some(text) = description.filter(|text| !text.is_empty()) {
        request = request.with_description(text);
    }
    Command::NewProject(request)
}

fn parse_add(rest: &str) -> Result<Command, CommandParseError> {
    let mut segments = rest.split(FIELD_SEPARATOR).map(str::trim);
    let head = segments.next().unwrap_or_default();
    let (column, title) = head
        .split_once(char::is_whitespace)
        .map_or((head, ""), |(column, title)| (column, title.trim()));
    if column.is_empty() {
        return Err(CommandParseError::MissingArgument {
            command: "add",
            argument: "column",
        });
    }

    let mut request = CreateTaskRequest::new(Stage::try_from(column)?, title);
    for segment in segments.filter(|segment| !segment.is_empty()) {
        request = apply_field(request, segment)?;
    }
    Ok(Command::Add(request))
}

fn apply_field(
    request: CreateTaskRequest,
    segment: &str,
) -> Result<CreateTaskRequest, CommandParseError> {
    let Some((key, value)) = segment.split_once('=') else {
        return Err(CommandParseError::UnknownField(segment.to_owned()));
    };
    let text = value.trim();

    match key.trim().to_ascii_lowercase().as_str() {
        "desc" | "description" => Ok(request.with_description(text)),
        "assignee" => Ok(request.with_assignee(Role::try_from(text)?)),
        "priority" => Ok(request.with_priority(Priority::try_from(text)?)),
        "due" => NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map(|date| request.with_due_date(date))
            .map_err(|err| CommandParseError::InvalidDate {
                value: text.to_owned(),
                reason: err.to_string(),
            }),
        _ => Err(CommandParseError::UnknownField(key.trim().to_owned())),
    }
}

fn parse_approve(rest: &str) -> Result<Command, CommandParseError> {
    let task = required(rest, "approve", "task id")?;
    let reviewer = rest
        .split_once(char::is_whitespace)
        .map(|(_, reviewer)| reviewer.trim().to_owned())
        .filter(|reviewer| !reviewer.is_empty());
    Ok(Command::Approve { task, reviewer })
}

fn task_and_stage(
    rest: &str,
    command: &'static str,
) -> Result<(String, Stage), CommandParseError> {
    let mut words = rest.split_whitespace();
    let task = words.next().ok_or(CommandParseError::MissingArgument {
        command,
        argument: "task id",
    })?;
    let column = words.next().ok_or(CommandParseError::MissingArgument {
        command,
        argument: "column",
    })?;
    Ok((task.to_owned(), Stage::try_from(column)?))
}

fn split_field(rest: &str) -> (&str, Option<&str>) {
    rest.split_once(FIELD_SEPARATOR)
        .map_or((rest.trim(), None), |(head, tail)| {
            (head.trim(), Some(tail.trim()))
        })
}
