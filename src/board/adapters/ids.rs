//! Identifier sources.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

use crate::board::ports::IdSource;

/// Monotonic counter shared by every entity kind.
///
/// Identifiers are `Uuid::from_u128(n)` for `n = 1, 2, 3, ...`, so they are
/// distinct across columns and tasks and sort in creation order.
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: AtomicU64,
}

impl SequentialIds {
    /// Creates a counter that starts at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> Uuid {
        let next = self.last.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        Uuid::from_u128(u128::from(next))
    }

    fn observe(&self, id: Uuid) {
        // Identifiers beyond the counter's range can never be produced by it.
        if let Ok(value) = u64::try_from(id.as_u128()) {
            self.last.fetch_max(value, Ordering::Relaxed);
        }
    }
}

/// Random version 4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }

    fn observe(&self, _id: Uuid) {}
}
