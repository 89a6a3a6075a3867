//! Flat dual-collection entity store.

use std::sync::Arc;
use tracing::trace;
use uuid::Uuid;

use crate::board::{
    adapters::ids::SequentialIds,
    domain::{BoardDomainError, BoardSnapshot, Column, ColumnId, Task, TaskId, relocate},
    ports::{BoardResult, EntityStore, IdSource},
};

/// Entity store holding both sequences in memory.
///
/// Lookups are linear scans over the sequences. Positions are the vector
/// indices themselves, so there is always exactly one entity per slot and
/// no gaps.
#[derive(Debug)]
pub struct InMemoryEntityStore<I: IdSource = SequentialIds> {
    columns: Vec<Column>,
    tasks: Vec<Task>,
    ids: Arc<I>,
}

impl InMemoryEntityStore<SequentialIds> {
    /// Creates an empty store backed by a fresh sequential identifier source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id_source(Arc::new(SequentialIds::new()))
    }
}

impl Default for InMemoryEntityStore<SequentialIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource> InMemoryEntityStore<I> {
    /// Creates an empty store drawing identifiers from `ids`.
    #[must_use]
    pub const fn with_id_source(ids: Arc<I>) -> Self {
        Self {
            columns: Vec::new(),
            tasks: Vec::new(),
            ids,
        }
    }

    /// Rebuilds a store from a previously taken snapshot.
    ///
    /// Every restored identifier is reported to `ids` so freshly created
    /// entities cannot collide with restored ones.
    ///
    /// # Errors
    ///
    /// Returns the [`BoardSnapshot::validate`] error when the snapshot
    /// repeats an identifier or contains a task without its column.
    pub fn from_snapshot(snapshot: BoardSnapshot, ids: Arc<I>) -> BoardResult<Self> {
        snapshot.validate()?;
        let BoardSnapshot { columns, tasks } = snapshot;
        for column in &columns {
            ids.observe(column.id().into_inner());
        }
        for task in &tasks {
            ids.observe(task.id().into_inner());
        }
        Ok(Self {
            columns,
            tasks,
            ids,
        })
    }

    /// Returns the tasks in flat sequence order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn column_index(&self, id: ColumnId) -> Option<usize> {
        self.columns.iter().position(|column| column.id() == id)
    }

    fn task_index(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    fn is_in_use(&self, id: Uuid) -> bool {
        self.columns
            .iter()
            .any(|column| column.id().into_inner() == id)
            || self.tasks.iter().any(|task| task.id().into_inner() == id)
    }

    fn fresh_id(&self) -> BoardResult<Uuid> {
        let id = self.ids.next_id();
        if self.is_in_use(id) {
            return Err(BoardDomainError::IdentifierCollision(id));
        }
        Ok(id)
    }
}

impl<I: IdSource> EntityStore for InMemoryEntityStore<I> {
    fn create_column(&mut self, title: String) -> BoardResult<Column> {
        let column = Column::new(ColumnId::from_uuid(self.fresh_id()?), title);
        self.columns.push(column.clone());
        Ok(column)
    }

    fn rename_column(&mut self, id: ColumnId, title: String) -> bool {
        let Some(slot) = self.columns.iter_mut().find(|column| column.id() == id) else {
            trace!(column_id = %id, "rename ignored, column not found");
            return false;
        };
        *slot = slot.retitled(title);
        true
    }

    fn delete_column(&mut self, id: ColumnId) -> bool {
        let Some(index) = self.column_index(id) else {
            trace!(column_id = %id, "delete ignored, column not found");
            return false;
        };
        self.columns.remove(index);
        self.tasks.retain(|task| task.column_id() != id);
        true
    }

    fn move_column(&mut self, active: ColumnId, over: ColumnId) -> bool {
        let (Some(from), Some(to)) = (self.column_index(active), self.column_index(over)) else {
            trace!(%active, %over, "column move ignored, column not found");
            return false;
        };
        relocate(&mut self.columns, from, to)
    }

    fn create_task(&mut self, column_id: ColumnId, content: String) -> BoardResult<Task> {
        if self.column_index(column_id).is_none() {
            return Err(BoardDomainError::InvalidReference(column_id));
        }
        let task = Task::new(TaskId::from_uuid(self.fresh_id()?), column_id, content);
        self.tasks.push(task.clone());
        Ok(task)
    }

    fn rename_task(&mut self, id: TaskId, content: String) -> bool {
        let Some(slot) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            trace!(task_id = %id, "rename ignored, task not found");
            return false;
        };
        *slot = slot.rewritten(content);
        true
    }

    fn delete_task(&mut self, id: TaskId) -> bool {
        let Some(index) = self.task_index(id) else {
            trace!(task_id = %id, "delete ignored, task not found");
            return false;
        };
        self.tasks.remove(index);
        true
    }

    fn relocate_task(&mut self, active: TaskId, over: TaskId) -> bool {
        let (Some(from), Some(to)) = (self.task_index(active), self.task_index(over)) else {
            trace!(%active, %over, "task relocate ignored, task not found");
            return false;
        };
        relocate(&mut self.tasks, from, to)
    }

    fn reparent_task(&mut self, id: TaskId, column_id: ColumnId) -> bool {
        if self.column_index(column_id).is_none() {
            trace!(task_id = %id, %column_id, "reparent ignored, column not found");
            return false;
        }
        let Some(slot) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            trace!(task_id = %id, "reparent ignored, task not found");
            return false;
        };
        *slot = slot.reparented(column_id);
        true
    }

    fn columns(&self) -> Vec<Column> {
        self.columns.clone()
    }

    fn column(&self, id: ColumnId) -> Option<Column> {
        self.columns.iter().find(|column| column.id() == id).cloned()
    }

    fn task(&self, id: TaskId) -> Option<Task> {
        self.tasks.iter().find(|task| task.id() == id).cloned()
    }

    fn tasks_of(&self, column_id: ColumnId) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.column_id() == column_id)
            .cloned()
            .collect()
    }

    fn task_count(&self, column_id: ColumnId) -> usize {
        self.tasks
            .iter()
            .filter(|task| task.column_id() == column_id)
            .count()
    }

    fn column_of(&self, id: TaskId) -> Option<ColumnId> {
        self.tasks
            .iter()
            .find(|task| task.id() == id)
            .map(Task::column_id)
    }

    fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(self.columns.clone(), self.tasks.clone())
    }
}
