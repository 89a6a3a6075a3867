//! Column entity.

use super::ColumnId;
use serde::{Deserialize, Serialize};

/// A named, ordered list on the board.
///
/// Columns carry no position field; their place on the board is their index
/// in the store's column sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    title: String,
}

impl Column {
    /// Creates a column value.
    #[must_use]
    pub fn new(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the column title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns a copy of this column carrying a new title.
    #[must_use]
    pub fn retitled(&self, title: impl Into<String>) -> Self {
        Self {
            id: self.id,
            title: title.into(),
        }
    }
}
