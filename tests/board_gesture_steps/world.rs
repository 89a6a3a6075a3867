//! Shared world state for board drag gesture BDD scenarios.

use std::collections::HashMap;

use rstest::fixture;
use taskboard::{
    board::{
        domain::{ColumnId, TaskId},
        services::BoardService,
    },
    gesture::domain::DragElement,
};

/// Scenario world for board gesture behaviour tests.
///
/// Columns and tasks are referred to by label; a column's label is its
/// title and a task's label is its content.
#[derive(Default)]
pub struct BoardWorld {
    pub service: BoardService,
    pub columns: HashMap<String, ColumnId>,
    pub tasks: HashMap<String, TaskId>,
    pub pending_drag: Option<DragElement>,
}

impl BoardWorld {
    /// Resolves a column label.
    pub fn column_id(&self, label: &str) -> Result<ColumnId, eyre::Report> {
        self.columns
            .get(label)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown column label {label}"))
    }

    /// Resolves a task label.
    pub fn task_id(&self, label: &str) -> Result<TaskId, eyre::Report> {
        self.tasks
            .get(label)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown task label {label}"))
    }

    /// Builds the drag element for a column from live board state.
    pub fn column_element(&self, label: &str) -> Result<DragElement, eyre::Report> {
        let id = self.column_id(label)?;
        self.service
            .column(id)
            .map(DragElement::from)
            .ok_or_else(|| eyre::eyre!("column {label} is not on the board"))
    }

    /// Builds the drag element for a task from live board state.
    pub fn task_element(&self, label: &str) -> Result<DragElement, eyre::Report> {
        let id = self.task_id(label)?;
        self.service
            .task(id)
            .map(DragElement::from)
            .ok_or_else(|| eyre::eyre!("task {label} is not on the board"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
