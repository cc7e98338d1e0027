//! Chess position oracle for chesstalk.
//!
//! This crate provides:
//! - [`ChessOracle`] - the capabilities the resolver queries: legal moves,
//!   per-move facts, notation, push/pop, and check/mate/stalemate tests
//! - [`Tentative`] - a scoped guard that applies a move and always rolls it back
//! - [`Board`] - the `shakmaty`-backed implementation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod board;
pub mod oracle;

pub use board::Board;
pub use oracle::{ChessOracle, Tentative};
