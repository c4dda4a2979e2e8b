//! Shell configuration read from the environment.

use crate::board::{
    adapters::{RandomIdGenerator, SequentialIdGenerator},
    domain::Role,
    ports::IdGenerator,
};
use std::sync::Arc;
use thiserror::Error;

/// Variable naming the default reviewer used by `approve`.
pub const REVIEWER_VAR: &str = "STAGEBOARD_REVIEWER";
/// Variable selecting the output format (`text` or `json`).
pub const FORMAT_VAR: &str = "STAGEBOARD_FORMAT";
/// Variable selecting the identifier strategy (`random` or `sequential`).
pub const IDS_VAR: &str = "STAGEBOARD_IDS";
/// Variable holding the log filter directive.
pub const LOG_VAR: &str = "STAGEBOARD_LOG";

const FALLBACK_LOG_VAR: &str = "RUST_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";
const SEQUENTIAL_NAMESPACE: u64 = 1;

/// Read access to environment variables.
pub trait EnvSource {
    /// Returns the value of `key`, or `None` when unset or not UTF-8.
    fn var(&self, key: &str) -> Option<String>;
}

/// [`EnvSource`] backed by the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// How the board is rendered after each command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable columns.
    #[default]
    Text,
    /// Pretty-printed JSON snapshot.
    Json,
}

impl TryFrom<&str> for OutputFormat {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidFormat(value.to_owned())),
        }
    }
}

/// Identifier source used for new projects and tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// Random version 4 UUIDs.
    #[default]
    Random,
    /// Counter-based UUIDs, stable across runs of the same script.
    Sequential,
}

impl IdStrategy {
    /// Builds the identifier generator for this strategy.
    #[must_use]
    pub fn generator(self) -> Arc<dyn IdGenerator> {
        match self {
            Self::Random => Arc::new(RandomIdGenerator),
            Self::Sequential => Arc::new(SequentialIdGenerator::new(SEQUENTIAL_NAMESPACE)),
        }
    }
}

impl TryFrom<&str> for IdStrategy {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "sequential" => Ok(Self::Sequential),
            _ => Err(ConfigError::InvalidIdStrategy(value.to_owned())),
        }
    }
}

/// Errors raised while reading shell configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The output format is not `text` or `json`.
    #[error("invalid output format '{0}', expected text or json")]
    InvalidFormat(String),

    /// The identifier strategy is not `random` or `sequential`.
    #[error("invalid id strategy '{0}', expected random or sequential")]
    InvalidIdStrategy(String),

    /// The reviewer name is set but blank.
    #[error("reviewer name must not be empty")]
    EmptyReviewer,
}

/// Shell settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Reviewer recorded by `approve` when the command names none.
    pub reviewer: String,
    /// Rendering format.
    pub format: OutputFormat,
    /// Identifier strategy.
    pub ids: IdStrategy,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            reviewer: Role::ProductOwner.display_name().to_owned(),
            format: OutputFormat::default(),
            ids: IdStrategy::default(),
        }
    }
}

impl ShellConfig {
    /// Builds the configuration from defaults overridden by `env`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unusable value.
    pub fn from_env(env: &impl EnvSource) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(reviewer) = env.var(REVIEWER_VAR) {
            let trimmed = reviewer.trim();
            if trimmed.is_empty() {
                return Err(ConfigError::EmptyReviewer);
            }
            trimmed.clone_into(&mut config.reviewer);
        }
        if let Some(format) = env.var(FORMAT_VAR) {
            config.format = OutputFormat::try_from(format.as_str())?;
        }
        if let Some(ids) = env.var(IDS_VAR) {
            config.ids = IdStrategy::try_from(ids.as_str())?;
        }
        Ok(config)
    }
}

/// Returns the log filter directive from `env`, falling back to `RUST_LOG`
/// and then to `warn`.
#[must_use]
pub fn log_filter(env: &impl EnvSource) -> String {
    env.var(LOG_VAR)
        .or_else(|| env.var(FALLBACK_LOG_VAR))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned())
}
