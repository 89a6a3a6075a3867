//! Step definitions for board drag gesture scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
