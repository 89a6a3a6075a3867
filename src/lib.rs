//! Taskboard: state model and reordering engine for a kanban board.
//!
//! This crate holds an ordered set of columns, each showing an ordered list
//! of tasks, and turns drag gestures from a presentation layer into
//! structural mutations: reordering tasks, reordering columns, and moving a
//! task from one column to another.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure state and classification logic
//! - **Ports**: Trait seams for the entity store and identifier generation
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Column and task collections and their mutations
//! - [`gesture`]: Drag lifecycle classification and the gesture reducer
//!
//! # Example
//!
//! ```
//! use taskboard::board::services::BoardService;
//! use taskboard::gesture::domain::DragElement;
//!
//! let mut board = BoardService::default();
//! let todo = board.create_column().expect("fresh column");
//! let done = board.create_column().expect("fresh column");
//! let task = board.create_task(todo.id()).expect("column exists");
//!
//! let active = DragElement::from(task.clone());
//! let over = DragElement::from(done.clone());
//! board.drag_start(active.clone()).expect("idle board");
//! board.drag_over(&active, Some(&over)).expect("drag in progress");
//! board.drag_end(&active, Some(&over)).expect("drag in progress");
//!
//! assert_eq!(board.tasks_of(done.id()), vec![task.reparented(done.id())]);
//! ```

pub mod board;
pub mod gesture;
