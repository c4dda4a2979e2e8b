//! Stageboard: a kanban board for projects moving tasks through fixed stages.
//!
//! Every project has four columns, `todo`, `in-progress`, `review` and
//! `done`. Tasks move forward one stage at a time through three actions:
//! start, submit for review and approve.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: projects, columns, tasks and the transition engine
//! - **Ports**: the project store and identifier source traits
//! - **Adapters**: in-memory store and identifier generators
//! - **Services**: the board service applying user intents
//!
//! # Modules
//!
//! - [`board`]: the board model, store and service
//! - [`shell`]: line-oriented command shell rendering the board

pub mod board;
pub mod shell;
