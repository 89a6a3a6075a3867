//! Domain model for the board.
//!
//! Columns and tasks live in two flat ordered sequences. A task points at its
//! column through `column_id`; there is no nesting and no rank field, so
//! order is carried entirely by sequence position.

mod column;
mod error;
mod ids;
mod sequence;
mod snapshot;
mod task;

pub use column::Column;
pub use error::BoardDomainError;
pub use ids::{ColumnId, TaskId};
pub use sequence::relocate;
pub use snapshot::BoardSnapshot;
pub use task::Task;
