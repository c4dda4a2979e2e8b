//! Line-oriented presentation adapter over the board service.
//!
//! Each input line is parsed into a [`Command`], applied through
//! [`crate::board::services::BoardService`] and answered with a fresh
//! rendering of the board. Unparsable input and rejected requests leave the
//! board unchanged and are only logged.

pub mod command;
pub mod config;
pub mod render;
pub mod session;

pub use command::{Command, CommandParseError, HELP};
pub use config::{
    ConfigError, EnvSource, IdStrategy, OutputFormat, ProcessEnv, ShellConfig, log_filter,
};
pub use render::{RenderError, render, short_id};
pub use session::{Session, SessionError, Step, resolve_project, resolve_task};
