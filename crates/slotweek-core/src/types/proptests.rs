//! Property-based tests for the grid types and the range compressor.
