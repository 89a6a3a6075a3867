//! Error types for the drag lifecycle.

use super::ElementId;
use thiserror::Error;

/// Errors returned when drag events arrive out of order.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GestureError {
    /// A drag started while another one was still active.
    #[error("drag already in progress for {0}")]
    AlreadyDragging(ElementId),

    /// A hover or release arrived with no drag in progress.
    #[error("no drag in progress")]
    NotDragging,

    /// The event names a different active element than the one that
    /// started the drag.
    #[error("drag event for {actual} while {expected} is active")]
    ActiveMismatch {
        /// Element recorded at drag start.
        expected: ElementId,
        /// Element named by the event.
        actual: ElementId,
    },
}
