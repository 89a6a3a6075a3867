//! Drag gesture handling.
//!
//! The gesture context consumes drag lifecycle events from the presentation
//! layer and turns them into entity store calls:
//!
//! - Domain types and pure classification in [`domain`]
//! - The stateful reducer in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
