//! Error types for board state validation.

use super::{ColumnId, TaskId};
use thiserror::Error;
use uuid::Uuid;

/// Errors returned while creating or restoring board entities.
///
/// Stale references in rename, delete, and move operations are not errors:
/// those operations report whether they applied and otherwise leave the
/// board untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// A task was created against a column that does not exist.
    #[error("column does not exist: {0}")]
    InvalidReference(ColumnId),

    /// The identifier source produced an identifier that is already in use.
    #[error("identifier already in use: {0}")]
    IdentifierCollision(Uuid),

    /// A snapshot contains the same column identifier twice.
    #[error("duplicate column identifier: {0}")]
    DuplicateColumn(ColumnId),

    /// A snapshot contains the same task identifier twice.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// A snapshot contains a task whose column is missing.
    #[error("task {task} references missing column {column}")]
    DanglingTask {
        /// Task holding the stale reference.
        task: TaskId,
        /// Column the task points at.
        column: ColumnId,
    },
}
