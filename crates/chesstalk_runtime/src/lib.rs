//! REPL, CLI, and game persistence for chesstalk.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-eval-print loop over spoken phrases
//! - [`Session`] - The board, resolver, and tracer a front end drives
//! - Saved game serialization and deserialization

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod highlight;
pub mod repl;
pub mod serialize;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use highlight::PhraseHighlighter;
pub use repl::{Command, Repl, Response};
pub use serialize::SavedGame;
pub use session::{Played, Session, SessionConfig};
