//! Presentation-facing board service.

use thiserror::Error;
use tracing::{debug, warn};

use super::BoardConfig;
use crate::{
    board::{
        adapters::memory::InMemoryEntityStore,
        domain::{BoardDomainError, BoardSnapshot, Column, ColumnId, Task, TaskId},
        ports::EntityStore,
    },
    gesture::{
        domain::{DragElement, DragIntent, GestureError},
        services::GestureReducer,
    },
};

/// Service-level errors for board operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardServiceError {
    /// The store rejected a creation.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// A drag event arrived out of order.
    #[error(transparent)]
    Gesture(#[from] GestureError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Single entry point for the presentation layer.
///
/// Binds the entity store operations to UI actions, fills in default text
/// from [`BoardConfig`], and routes drag events through a
/// [`GestureReducer`].
#[derive(Debug)]
pub struct BoardService<S = InMemoryEntityStore>
where
    S: EntityStore,
{
    store: S,
    reducer: GestureReducer,
    config: BoardConfig,
}

impl<S> BoardService<S>
where
    S: EntityStore,
{
    /// Creates a service with the default configuration.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_config(store, BoardConfig::default())
    }

    /// Creates a service with a custom configuration.
    #[must_use]
    pub const fn with_config(store: S, config: BoardConfig) -> Self {
        Self {
            store,
            reducer: GestureReducer::new(),
            config,
        }
    }

    /// Returns the current configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the underlying store for read access.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Appends a column titled with the configured default.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the store rejects the
    /// generated identifier.
    pub fn create_column(&mut self) -> BoardServiceResult<Column> {
        let column = self
            .store
            .create_column(self.config.default_column_title.clone())
            .inspect_err(|err| warn!(error = %err, "column creation rejected"))?;
        debug!(column_id = %column.id(), "column created");
        Ok(column)
    }

    /// Replaces a column title. Returns `false` when the column is gone.
    pub fn rename_column(&mut self, id: ColumnId, title: impl Into<String>) -> bool {
        let applied = self.store.rename_column(id, title.into());
        if applied {
            debug!(column_id = %id, "column renamed");
        }
        applied
    }

    /// Deletes a column and its tasks. Returns `false` when the column is
    /// gone.
    pub fn delete_column(&mut self, id: ColumnId) -> bool {
        let applied = self.store.delete_column(id);
        if applied {
            debug!(column_id = %id, "column deleted");
        }
        applied
    }

    /// Relocates a column into another column's slot.
    pub fn move_column(&mut self, active: ColumnId, over: ColumnId) -> bool {
        let applied = self.store.move_column(active, over);
        if applied {
            debug!(%active, %over, "column moved");
        }
        applied
    }

    /// Appends a task with the configured default content to a column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] wrapping
    /// [`BoardDomainError::InvalidReference`] when the column does not
    /// exist.
    pub fn create_task(&mut self, column_id: ColumnId) -> BoardServiceResult<Task> {
        let task = self
            .store
            .create_task(column_id, self.config.default_task_content.clone())
            .inspect_err(|err| warn!(%column_id, error = %err, "task creation rejected"))?;
        debug!(task_id = %task.id(), %column_id, "task created");
        Ok(task)
    }

    /// Replaces a task's content. Returns `false` when the task is gone.
    pub fn rename_task(&mut self, id: TaskId, content: impl Into<String>) -> bool {
        let applied = self.store.rename_task(id, content.into());
        if applied {
            debug!(task_id = %id, "task content updated");
        }
        applied
    }

    /// Deletes a task. Returns `false` when the task is gone.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let applied = self.store.delete_task(id);
        if applied {
            debug!(task_id = %id, "task deleted");
        }
        applied
    }

    /// Relocates a task into another task's slot in the flat sequence.
    pub fn relocate_task(&mut self, active: TaskId, over: TaskId) -> bool {
        let applied = self.store.relocate_task(active, over);
        if applied {
            debug!(%active, %over, "task relocated");
        }
        applied
    }

    /// Returns the columns in board order.
    #[must_use]
    pub fn columns(&self) -> Vec<Column> {
        self.store.columns()
    }

    /// Returns a column's tasks in display order.
    #[must_use]
    pub fn tasks_of(&self, column_id: ColumnId) -> Vec<Task> {
        self.store.tasks_of(column_id)
    }

    /// Returns the number of tasks in a column.
    #[must_use]
    pub fn task_count(&self, column_id: ColumnId) -> usize {
        self.store.task_count(column_id)
    }

    /// Looks up a column.
    #[must_use]
    pub fn column(&self, id: ColumnId) -> Option<Column> {
        self.store.column(id)
    }

    /// Looks up a task.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<Task> {
        self.store.task(id)
    }

    /// Copies both sequences for persistence by the host.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.store.snapshot()
    }

    /// Returns the overlay snapshot of the element being dragged.
    #[must_use]
    pub const fn active_drag(&self) -> Option<&DragElement> {
        self.reducer.active()
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.reducer.is_dragging()
    }

    /// Starts a drag.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Gesture`] when a drag is already active.
    pub fn drag_start(&mut self, active: DragElement) -> BoardServiceResult<()> {
        Ok(self.reducer.drag_start(active)?)
    }

    /// Applies a hover event.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Gesture`] when no drag is active or the
    /// event names a different active element.
    pub fn drag_over(
        &mut self,
        active: &DragElement,
        over: Option<&DragElement>,
    ) -> BoardServiceResult<DragIntent> {
        Ok(self.reducer.drag_over(&mut self.store, active, over)?)
    }

    /// Applies a release event and ends the drag.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Gesture`] when no drag is active or the
    /// event names a different active element.
    pub fn drag_end(
        &mut self,
        active: &DragElement,
        over: Option<&DragElement>,
    ) -> BoardServiceResult<DragIntent> {
        Ok(self.reducer.drag_end(&mut self.store, active, over)?)
    }

    /// Abandons the current drag without reverting hover mutations.
    pub fn drag_cancel(&mut self) -> Option<DragElement> {
        self.reducer.drag_cancel()
    }
}

impl Default for BoardService<InMemoryEntityStore> {
    fn default() -> Self {
        Self::new(InMemoryEntityStore::new())
    }
}
