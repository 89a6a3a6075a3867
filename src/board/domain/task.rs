//! Task card entity.

use super::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// A card owned by exactly one column at a time.
///
/// Tasks live in one flat sequence; `column_id` is a non-owning reference to
/// the owning column. Updates never mutate a stored task in place: they
/// produce a new value which the store swaps into the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    column_id: ColumnId,
    content: String,
}

impl Task {
    /// Creates a task value.
    #[must_use]
    pub fn new(id: TaskId, column_id: ColumnId, content: impl Into<String>) -> Self {
        Self {
            id,
            column_id,
            content: content.into(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the identifier of the owning column.
    #[must_use]
    pub const fn column_id(&self) -> ColumnId {
        self.column_id
    }

    /// Returns the task content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns a copy of this task owned by `column_id`.
    #[must_use]
    pub fn reparented(&self, column_id: ColumnId) -> Self {
        Self {
            id: self.id,
            column_id,
            content: self.content.clone(),
        }
    }

    /// Returns a copy of this task carrying new content.
    #[must_use]
    pub fn rewritten(&self, content: impl Into<String>) -> Self {
        Self {
            id: self.id,
            column_id: self.column_id,
            content: content.into(),
        }
    }
}
