//! chesstalk - Spoken chess phrases to standard algebraic notation
//!
//! This crate re-exports all layers of the chesstalk system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: chesstalk_runtime    - REPL, CLI, saved games
//! Layer 3: chesstalk_debug      - Resolution tracing
//! Layer 2: chesstalk_grammar    - Normalizer, tokenizer, rule table, resolver
//! Layer 1: chesstalk_oracle     - Chess rules oracle (legal moves, notation)
//! Layer 0: chesstalk_foundation - Core types (Square, PieceKind, Error)
//! ```

pub use chesstalk_debug as debug;
pub use chesstalk_foundation as foundation;
pub use chesstalk_grammar as grammar;
pub use chesstalk_oracle as oracle;
pub use chesstalk_runtime as runtime;
