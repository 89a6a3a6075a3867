//! Drag lifecycle state machine.

use tracing::{debug, warn};

use crate::{
    board::ports::EntityStore,
    gesture::domain::{DragElement, DragIntent, GestureError, classify_end, classify_over},
};

/// Result type for gesture reducer operations.
pub type GestureResult<T> = Result<T, GestureError>;

/// Turns drag start, hover, and release events into store mutations.
///
/// The reducer is either idle or tracking one active element. Task drags
/// mutate the store on every qualifying hover; column drags mutate only on
/// release. Cancelling a drag discards the transient state but keeps every
/// mutation already applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GestureReducer {
    active: Option<DragElement>,
}

impl GestureReducer {
    /// Creates an idle reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Returns the snapshot of the element being dragged, if any.
    #[must_use]
    pub const fn active(&self) -> Option<&DragElement> {
        self.active.as_ref()
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Starts tracking `active`.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::AlreadyDragging`] when another drag has not
    /// been released or cancelled yet. The earlier drag stays active.
    pub fn drag_start(&mut self, active: DragElement) -> GestureResult<()> {
        if let Some(current) = &self.active {
            warn!(active = %current.id(), rejected = %active.id(), "drag start rejected");
            return Err(GestureError::AlreadyDragging(current.id()));
        }
        debug!(active = %active.id(), "drag started");
        self.active = Some(active);
        Ok(())
    }

    /// Applies a hover event and returns the intent that changed the store.
    ///
    /// Returns [`DragIntent::Ignore`] when the event has no effect.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::NotDragging`] when idle and
    /// [`GestureError::ActiveMismatch`] when `active` is not the element
    /// that started the drag.
    pub fn drag_over<S>(
        &mut self,
        store: &mut S,
        active: &DragElement,
        over: Option<&DragElement>,
    ) -> GestureResult<DragIntent>
    where
        S: EntityStore + ?Sized,
    {
        self.ensure_active(active)?;
        Ok(apply(store, classify_over(active, over)))
    }

    /// Applies a release event, returns to idle, and returns the intent
    /// that changed the store.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`GestureReducer::drag_over`]. The drag
    /// stays active when an error is returned.
    pub fn drag_end<S>(
        &mut self,
        store: &mut S,
        active: &DragElement,
        over: Option<&DragElement>,
    ) -> GestureResult<DragIntent>
    where
        S: EntityStore + ?Sized,
    {
        self.ensure_active(active)?;
        self.active = None;
        debug!(active = %active.id(), "drag ended");
        Ok(apply(store, classify_end(active, over)))
    }

    /// Abandons the current drag and returns its snapshot.
    ///
    /// Mutations applied while hovering are kept.
    pub fn drag_cancel(&mut self) -> Option<DragElement> {
        let cancelled = self.active.take();
        if let Some(element) = &cancelled {
            debug!(active = %element.id(), "drag cancelled");
        }
        cancelled
    }

    fn ensure_active(&self, active: &DragElement) -> GestureResult<()> {
        let Some(current) = &self.active else {
            warn!(active = %active.id(), "drag event while idle");
            return Err(GestureError::NotDragging);
        };
        if current.id() != active.id() {
            warn!(expected = %current.id(), actual = %active.id(), "drag event for wrong element");
            return Err(GestureError::ActiveMismatch {
                expected: current.id(),
                actual: active.id(),
            });
        }
        Ok(())
    }
}

/// Executes an intent against the store, reporting `Ignore` when nothing
/// changed.
fn apply<S>(store: &mut S, intent: DragIntent) -> DragIntent
where
    S: EntityStore + ?Sized,
{
    let applied = match intent {
        DragIntent::Ignore => false,
        DragIntent::RelocateTask { active, over } => {
            // Ownership follows the over task's live column, not its snapshot.
            let Some(column) = store.column_of(over) else {
                return DragIntent::Ignore;
            };
            let reparented = store.reparent_task(active, column);
            let relocated = store.relocate_task(active, over);
            reparented || relocated
        }
        DragIntent::ReparentTask { task, column } => store.reparent_task(task, column),
        DragIntent::MoveColumn { active, over } => store.move_column(active, over),
    };

    if applied {
        debug!(?intent, "drag intent applied");
        intent
    } else {
        DragIntent::Ignore
    }
}
