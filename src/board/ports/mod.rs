//! Port contracts for the board.
//!
//! Ports define the seams the gesture reducer and the presentation layer
//! depend on, independent of how the collections are held.

pub mod ids;
pub mod store;

pub use ids::IdSource;
pub use store::{BoardResult, EntityStore};

#[cfg(test)]
pub use ids::MockIdSource;
#[cfg(test)]
pub use store::MockEntityStore;
