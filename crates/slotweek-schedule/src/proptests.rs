//! Property-based tests for draft assembly.
