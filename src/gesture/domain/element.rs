//! Drag participants: the active element and the element under the pointer.

use crate::board::domain::{Column, ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of board element taking part in a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// A whole column.
    Column,
    /// A single task card.
    Task,
}

impl ElementKind {
    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Column => "column",
            Self::Task => "task",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-tagged identifier of a drag participant.
///
/// Two participants are the same element only when both kind and
/// identifier match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum ElementId {
    /// Identifier of a column.
    Column(ColumnId),
    /// Identifier of a task.
    Task(TaskId),
}

impl ElementId {
    /// Returns the element kind.
    #[must_use]
    pub const fn kind(self) -> ElementKind {
        match self {
            Self::Column(_) => ElementKind::Column,
            Self::Task(_) => ElementKind::Task,
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column(id) => write!(f, "column:{id}"),
            Self::Task(id) => write!(f, "task:{id}"),
        }
    }
}

/// A drag participant together with the data snapshot taken by the
/// presentation layer.
///
/// The snapshot feeds overlay rendering only. Structural decisions always
/// read live state from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DragElement {
    /// A column being dragged or hovered.
    Column(Column),
    /// A task being dragged or hovered.
    Task(Task),
}

impl DragElement {
    /// Returns the kind-tagged identifier.
    #[must_use]
    pub const fn id(&self) -> ElementId {
        match self {
            Self::Column(column) => ElementId::Column(column.id()),
            Self::Task(task) => ElementId::Task(task.id()),
        }
    }

    /// Returns the element kind.
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        self.id().kind()
    }
}

impl From<Column> for DragElement {
    fn from(column: Column) -> Self {
        Self::Column(column)
    }
}

impl From<Task> for DragElement {
    fn from(task: Task) -> Self {
        Self::Task(task)
    }
}
