//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node-count tests for move generation
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `movegen.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod proptest;
