//! Serializable copy of both board collections.

use super::{BoardDomainError, Column, Task};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered copy of the column and task sequences.
///
/// Sequence order is the display order, so a snapshot fully describes a
/// board. Hosts that want durability serialize this value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Columns in board order.
    pub columns: Vec<Column>,
    /// Tasks in flat sequence order.
    pub tasks: Vec<Task>,
}

impl BoardSnapshot {
    /// Creates a snapshot from both sequences.
    #[must_use]
    pub const fn new(columns: Vec<Column>, tasks: Vec<Task>) -> Self {
        Self { columns, tasks }
    }

    /// Checks identifier uniqueness and task-to-column references.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateColumn`] or
    /// [`BoardDomainError::DuplicateTask`] for a repeated identifier, and
    /// [`BoardDomainError::DanglingTask`] for a task whose column is absent.
    pub fn validate(&self) -> Result<(), BoardDomainError> {
        let mut column_ids = HashSet::with_capacity(self.columns.len());
        for column in &self.columns {
            if !column_ids.insert(column.id()) {
                return Err(BoardDomainError::DuplicateColumn(column.id()));
            }
        }

        let mut task_ids = HashSet::with_capacity(self.tasks.len());
        for task in &self.tasks {
            if !task_ids.insert(task.id()) {
                return Err(BoardDomainError::DuplicateTask(task.id()));
            }
            if !column_ids.contains(&task.column_id()) {
                return Err(BoardDomainError::DanglingTask {
                    task: task.id(),
                    column: task.column_id(),
                });
            }
        }

        Ok(())
    }
}
