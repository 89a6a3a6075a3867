//! Board state: columns, tasks, and the operations that reorder them.
//!
//! The board context owns the two ordered collections and every primitive
//! that mutates them. It has no knowledge of drag gestures. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Presentation-facing services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
