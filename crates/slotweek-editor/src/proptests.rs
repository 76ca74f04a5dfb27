//! Property-based tests for the selection controller.
