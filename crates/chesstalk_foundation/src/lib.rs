//! Board vocabulary, outcome markers, and error types for chesstalk.
//!
//! This crate provides:
//! - [`File`], [`Rank`], [`Square`], [`PieceKind`], [`CastlingSide`] - the closed
//!   sets a spoken phrase can name
//! - [`OutcomeMarker`] - the trailing "check" / "checkmate" / "stalemate"
//! - [`OutcomeWarning`] - soft mismatches between a phrase and its move
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod board;
pub mod error;
pub mod outcome;

pub use board::{CastlingSide, File, PieceKind, Rank, Side, Square};
pub use error::{AmbiguityKind, Error, ErrorContext, ErrorKind, InvalidMoveKind, Result};
pub use outcome::{OutcomeMarker, OutcomeWarning, WarningKind};
