//! Port contracts for the stage board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod ids;
pub mod store;

#[cfg(test)]
pub use ids::MockIdGenerator;
pub use ids::IdGenerator;
pub use store::{ProjectStore, ProjectStoreError, ProjectStoreResult};
