//! Entity store port: the ordered column and task collections.

use crate::board::domain::{BoardDomainError, BoardSnapshot, Column, ColumnId, Task, TaskId};

/// Result type for store operations that can reject their input.
pub type BoardResult<T> = Result<T, BoardDomainError>;

/// Authoritative holder of the column and task sequences.
///
/// Operations keyed by an identifier that no longer exists are silent
/// no-ops and return `false`; a render racing a delete must never fail the
/// interaction. Every operation either applies fully or not at all.
#[cfg_attr(test, mockall::automock)]
pub trait EntityStore {
    /// Appends a new column with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::IdentifierCollision`] when the identifier
    /// source hands out an identifier already in use.
    fn create_column(&mut self, title: String) -> BoardResult<Column>;

    /// Replaces the title of a column, keeping its identity and position.
    fn rename_column(&mut self, id: ColumnId, title: String) -> bool;

    /// Removes a column together with every task it owns.
    fn delete_column(&mut self, id: ColumnId) -> bool;

    /// Relocates the `active` column into the slot held by `over`.
    ///
    /// No-op when either column is missing or both are the same column.
    fn move_column(&mut self, active: ColumnId, over: ColumnId) -> bool;

    /// Appends a new task owned by `column_id`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidReference`] when the column does
    /// not exist and [`BoardDomainError::IdentifierCollision`] when the
    /// identifier source repeats itself.
    fn create_task(&mut self, column_id: ColumnId, content: String) -> BoardResult<Task>;

    /// Replaces the content of a task, keeping its identity and position.
    fn rename_task(&mut self, id: TaskId, content: String) -> bool;

    /// Removes a task.
    fn delete_task(&mut self, id: TaskId) -> bool;

    /// Relocates the `active` task into the slot held by `over` in the flat
    /// task sequence. Column ownership is left unchanged.
    fn relocate_task(&mut self, active: TaskId, over: TaskId) -> bool;

    /// Points a task at another column without moving it in the flat
    /// sequence.
    ///
    /// No-op when the task or the column is missing.
    fn reparent_task(&mut self, id: TaskId, column_id: ColumnId) -> bool;

    /// Returns the columns in board order.
    fn columns(&self) -> Vec<Column>;

    /// Looks up a column.
    fn column(&self, id: ColumnId) -> Option<Column>;

    /// Looks up a task.
    fn task(&self, id: TaskId) -> Option<Task>;

    /// Returns the tasks owned by a column, in flat sequence order.
    fn tasks_of(&self, column_id: ColumnId) -> Vec<Task>;

    /// Counts the tasks owned by a column.
    fn task_count(&self, column_id: ColumnId) -> usize;

    /// Returns the column currently owning a task.
    fn column_of(&self, id: TaskId) -> Option<ColumnId>;

    /// Copies both sequences.
    fn snapshot(&self) -> BoardSnapshot;
}
