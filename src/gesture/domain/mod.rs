//! Domain model for drag gestures.
//!
//! A drag names an active element and, while hovering or on release, the
//! element under the pointer. Classification is pure: it maps those two
//! elements to a [`DragIntent`] without touching the store.

mod element;
mod error;
mod intent;

pub use element::{DragElement, ElementId, ElementKind};
pub use error::GestureError;
pub use intent::{DragIntent, classify_end, classify_over};
