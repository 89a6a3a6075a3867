//! Classification of drag events into structural effects.

use super::DragElement;
use crate::board::domain::{ColumnId, TaskId};

/// Structural effect a drag event maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragIntent {
    /// Nothing to apply.
    Ignore,
    /// Move the active task into the over task's column and slot.
    RelocateTask {
        /// Task being dragged.
        active: TaskId,
        /// Task under the pointer.
        over: TaskId,
    },
    /// Point the active task at a column without moving it in the flat
    /// task sequence.
    ReparentTask {
        /// Task being dragged.
        task: TaskId,
        /// Column under the pointer.
        column: ColumnId,
    },
    /// Relocate the active column into the over column's slot.
    MoveColumn {
        /// Column being dragged.
        active: ColumnId,
        /// Column under the pointer.
        over: ColumnId,
    },
}

impl DragIntent {
    /// Returns `true` when the intent changes nothing.
    #[must_use]
    pub const fn is_ignore(self) -> bool {
        matches!(self, Self::Ignore)
    }
}

/// Classifies a hover event.
///
/// Only task drags act while hovering: a task over another task relocates,
/// a task over a column reparents. Columns hovering over anything are
/// ignored here and reorder on drop instead.
#[must_use]
pub fn classify_over(active: &DragElement, over: Option<&DragElement>) -> DragIntent {
    let Some(over) = over else {
        return DragIntent::Ignore;
    };
    if active.id() == over.id() {
        return DragIntent::Ignore;
    }

    match (active, over) {
        (DragElement::Task(dragged), DragElement::Task(target)) => DragIntent::RelocateTask {
            active: dragged.id(),
            over: target.id(),
        },
        (DragElement::Task(dragged), DragElement::Column(target)) => DragIntent::ReparentTask {
            task: dragged.id(),
            column: target.id(),
        },
        (DragElement::Column(_), _) => DragIntent::Ignore,
    }
}

/// Classifies a release event.
///
/// A column released over a different column moves there. Task drags have
/// already been applied while hovering, and a column released over a task
/// has no column slot to take.
#[must_use]
pub fn classify_end(active: &DragElement, over: Option<&DragElement>) -> DragIntent {
    match (active, over) {
        (DragElement::Column(dragged), Some(DragElement::Column(target)))
            if dragged.id() != target.id() =>
        {
            DragIntent::MoveColumn {
                active: dragged.id(),
                over: target.id(),
            }
        }
        _ => DragIntent::Ignore,
    }
}
