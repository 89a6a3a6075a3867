//! Adapter implementations for board ports.

pub mod ids;
pub mod memory;

pub use ids::{RandomIds, SequentialIds};
