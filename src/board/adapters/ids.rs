//! Identifier generators.

use crate::board::ports::IdGenerator;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Generates random version 4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Generates predictable identifiers from a namespace and a counter.
///
/// The counter starts at 1 and is rotated into the leading bits, so the
/// first eight hex digits of an id count up (`00000001-...`). The namespace
/// fills the low 64 bits; generators with distinct namespaces never collide.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    namespace: u64,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator for the given namespace.
    #[must_use]
    pub const fn new(namespace: u64) -> Self {
        Self {
            namespace,
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> Uuid {
        let sequence = self.counter.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        Uuid::from_u64_pair(sequence.rotate_left(32), self.namespace)
    }
}
