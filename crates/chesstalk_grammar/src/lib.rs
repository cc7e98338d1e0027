//! Spoken chess phrase grammar for chesstalk.
//!
//! This crate turns phrases like "knight takes bishop" or "castles kingside"
//! into the one legal move they describe, or a precise diagnostic.
//!
//! # Architecture
//!
//! ```text
//! "night takes e for check"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ NORMALIZER      │  → "knight takes e 4 check"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ TOKENIZER       │  → [Piece(knight), Takes, File(e), Rank(4)] + Check
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ RULE TABLE      │  → piece-to-square: source-piece, destination-square
//! │ DISPATCH        │     tie-break: gives-check
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ RESOLUTION      │  → Nxe4+ (or NOT FOUND / AMBIGUOUS)
//! │ ENGINE          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ OUTCOME         │  → warnings for unspoken or false assertions
//! │ VALIDATOR       │
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`normalize`] - Speech-to-text mis-transcription rewrites
//! - [`vocabulary`] - Word classification into typed tokens
//! - [`tokenizer`] - Token stream and outcome marker extraction
//! - [`condition`] - Predicates over candidate moves
//! - [`syntax`] - Shape matching with slots and a gap
//! - [`grammar`] - The ordered rule table and its plans
//! - [`engine`] - Narrowing legal moves to one
//! - [`outcome`] - Check, mate, stalemate and capture cross-checks
//! - [`observer`] - Pipeline event hooks
//! - [`resolver`] - The end-to-end pipeline

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod condition;
pub mod config;
pub mod engine;
pub mod grammar;
pub mod normalize;
pub mod observer;
pub mod outcome;
pub mod resolver;
pub mod syntax;
pub mod tokenizer;
pub mod vocabulary;

// Re-export main types for convenience
pub use condition::Condition;
pub use config::{ResolverConfig, WarningPolicy};
pub use engine::{ResolutionEngine, ResolutionOutcome};
pub use grammar::{GrammarRule, Plan, RULES};
pub use normalize::normalize;
pub use observer::{FilterStage, NullObserver, ResolutionObserver};
pub use outcome::{OutcomeValidator, SpokenFacts};
pub use resolver::{PhraseResolver, Resolution};
pub use tokenizer::{PhraseTokenizer, TokenizedPhrase};
pub use vocabulary::Token;
