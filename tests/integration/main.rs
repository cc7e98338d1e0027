//! Cross-layer integration tests for chesstalk
//!
//! Tests that verify correct interaction between multiple crates.

mod parallel;
mod scenarios;
mod sessions;
mod warnings;
