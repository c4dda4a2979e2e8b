//! Interactive stage board shell.
//!
//! Usage:
//!
//! ```text
//! stageboard < script.txt
//! ```
//!
//! Reads one command per line from standard input and prints the board after
//! each one. Type `help` for the command list. Logs go to standard error and
//! are filtered by `STAGEBOARD_LOG` (or `RUST_LOG`); the remaining settings
//! come from `STAGEBOARD_REVIEWER`, `STAGEBOARD_FORMAT` and `STAGEBOARD_IDS`.

use mockable::DefaultClock;
use stageboard::{
    board::{adapters::memory::InMemoryProjectStore, services::BoardService},
    shell::{EnvSource, ProcessEnv, Session, ShellConfig, Step, log_filter},
};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn main() -> Result<(), BoxError> {
    let env = ProcessEnv;
    init_tracing(&env);

    let config = ShellConfig::from_env(&env)?;
    info!(format = ?config.format, ids = ?config.ids, "starting session");
    let service = BoardService::new(
        Arc::new(InMemoryProjectStore::new()),
        Arc::new(DefaultClock),
        config.ids.generator(),
    );
    let session = Session::new(service, config);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", session.render()?)?;
    for line in io::stdin().lock().lines() {
        match session.handle_line(&line?)? {
            Step::Output(text) => writeln!(stdout, "{text}")?,
            Step::Quit => break,
        }
    }
    Ok(())
}

fn init_tracing(env: &impl EnvSource) {
    let directive = log_filter(env);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
