//! Application services for drag gestures.

mod reducer;

pub use reducer::{GestureReducer, GestureResult};
