//! Stage board: projects, stage columns and the task transition engine.
//!
//! Tasks move through a fixed pipeline (`todo → in-progress → review →
//! done`). Starting, submitting for review and approving are the only legal
//! moves; each appends the task to the end of the next column. Approving
//! records the reviewer on the task. The module follows hexagonal
//! architecture:
//!
//! - Domain types and the transition engine in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
