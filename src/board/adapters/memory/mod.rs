//! In-memory adapter for the entity store port.

mod store;

pub use store::InMemoryEntityStore;
