//! Unit tests for the gesture context.
