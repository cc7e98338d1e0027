//! Error types for chesstalk.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::board::PieceKind;
use crate::outcome::OutcomeWarning;

/// The main error type for chesstalk operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about the phrase being resolved.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a parse error for a phrase that matches no grammar rule.
    #[must_use]
    pub fn unparsed(phrase: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unparsed {
            phrase: phrase.into(),
        })
    }

    /// Creates a parse error naming the tokens that could not be placed.
    #[must_use]
    pub fn invalid_tokens(phrase: impl Into<String>, tokens: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidTokens {
            phrase: phrase.into(),
            tokens: tokens.into(),
        })
    }

    /// Creates a not-found error.
    #[must_use]
    pub fn no_matching_move(phrase: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoMatchingMove {
            phrase: phrase.into(),
        })
    }

    /// Creates an ambiguity error.
    #[must_use]
    pub fn ambiguous(kind: AmbiguityKind, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Ambiguous {
            kind,
            message: message.into(),
        })
    }

    /// Creates an invalid-move error.
    #[must_use]
    pub fn invalid_move(kind: InvalidMoveKind, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidMove {
            kind,
            message: message.into(),
        })
    }

    /// Creates an unspecified promotion piece error.
    #[must_use]
    pub fn unspecified_promotion(phrase: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnspecifiedPromotion {
            phrase: phrase.into(),
        })
    }

    /// Creates an invalid promotion piece error.
    #[must_use]
    pub fn invalid_promotion(piece: PieceKind) -> Self {
        Self::new(ErrorKind::InvalidPromotion { piece })
    }

    /// Creates an error for notation the oracle rejected as illegal.
    #[must_use]
    pub fn illegal_notation(notation: impl Into<String>) -> Self {
        Self::new(ErrorKind::IllegalNotation {
            notation: notation.into(),
        })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns the phrase this error was raised for, if known.
    #[must_use]
    pub fn phrase(&self) -> Option<&str> {
        self.context.as_ref().and_then(|c| c.phrase.as_deref())
    }

    /// Returns true if this is an ambiguity failure.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        matches!(self.kind, ErrorKind::Ambiguous { .. })
    }

    /// Returns true if this is a not-found failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NoMatchingMove { .. })
    }

    /// Returns the ambiguity kind, if this is an ambiguity failure.
    #[must_use]
    pub fn ambiguity(&self) -> Option<AmbiguityKind> {
        match &self.kind {
            ErrorKind::Ambiguous { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The token sequence matched no grammar rule.
    #[error("could not parse phrase: \"{phrase}\"")]
    Unparsed {
        /// The phrase as spoken.
        phrase: String,
    },

    /// A shape matched but some of its tokens cannot be interpreted.
    #[error("could not parse phrase: \"{phrase}\" (invalid tokens: \"{tokens}\")")]
    InvalidTokens {
        /// The phrase as spoken.
        phrase: String,
        /// The offending tokens, space separated.
        tokens: String,
    },

    /// A shape matched but no legal move satisfies it.
    #[error("no matching move for \"{phrase}\"")]
    NoMatchingMove {
        /// The phrase as spoken.
        phrase: String,
    },

    /// More than one legal move satisfies the phrase.
    #[error("{message}")]
    Ambiguous {
        /// Which disambiguator is missing.
        kind: AmbiguityKind,
        /// Explanation naming the matched tokens.
        message: String,
    },

    /// A phrase naming a move directly does not denote a legal move.
    #[error("{message}")]
    InvalidMove {
        /// Which part of the move is wrong.
        kind: InvalidMoveKind,
        /// Explanation naming the matched tokens.
        message: String,
    },

    /// "equals" was said without a piece, or a promotion was left unnamed.
    #[error("unspecified promotion piece: \"{phrase}\"")]
    UnspecifiedPromotion {
        /// The phrase as spoken.
        phrase: String,
    },

    /// A pawn cannot promote to the named piece.
    #[error("invalid promotion piece: \"{piece}\"")]
    InvalidPromotion {
        /// The piece that was named.
        piece: PieceKind,
    },

    /// The resolved move disagrees with the phrase and warnings are denied.
    #[error("{0}")]
    OutcomeMismatch(OutcomeWarning),

    /// Notation does not denote a legal move in the current position.
    #[error("illegal move: {notation}")]
    IllegalNotation {
        /// The rejected notation.
        notation: String,
    },

    /// Notation denotes more than one legal move.
    #[error("ambiguous move: {notation}")]
    AmbiguousNotation {
        /// The rejected notation.
        notation: String,
    },

    /// A position could not be set up.
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// The disambiguator a rule reports as missing when several moves remain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AmbiguityKind {
    /// "castles" was said while both sides are legal.
    UnspecifiedCastlingDirection,
    /// Several pieces could be the one moving.
    Source,
    /// The moving piece has several destinations.
    Destination,
    /// Either the source or the destination is unclear.
    SourceOrDestination,
    /// Several pieces can make the named capture.
    CaptureSource,
    /// The capturing piece has several targets.
    CaptureDestination,
    /// Either the capturing piece or the target is unclear.
    CaptureSourceOrDestination,
    /// No finer classification applies.
    Unclassified,
}

impl AmbiguityKind {
    /// A short kebab-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UnspecifiedCastlingDirection => "unspecified-castling-direction",
            Self::Source => "ambiguous-source",
            Self::Destination => "ambiguous-destination",
            Self::SourceOrDestination => "ambiguous-source-or-destination",
            Self::CaptureSource => "ambiguous-capture-source",
            Self::CaptureDestination => "ambiguous-capture-destination",
            Self::CaptureSourceOrDestination => "ambiguous-capture-source-or-destination",
            Self::Unclassified => "ambiguous",
        }
    }
}

impl fmt::Display for AmbiguityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a directly-named move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvalidMoveKind {
    /// No piece can reach the named destination.
    Destination,
    /// The named source/destination pair is not a legal move.
    SourceOrDestination,
    /// The named pawn capture is not legal.
    PawnCapture,
    /// The phrase read as coordinates, but they are not a legal move.
    Coordinates,
}

impl InvalidMoveKind {
    /// A short kebab-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Destination => "invalid-destination",
            Self::SourceOrDestination => "invalid-source-or-destination",
            Self::PawnCapture => "invalid-pawn-capture",
            Self::Coordinates => "invalid-coordinates",
        }
    }
}

impl fmt::Display for InvalidMoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Context about the phrase an error was raised for.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The phrase as spoken.
    pub phrase: Option<String>,
    /// The grammar rule that matched, if any.
    pub rule: Option<String>,
    /// The disambiguating tokens the rule bound.
    pub tokens: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the phrase.
    #[must_use]
    pub fn with_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.phrase = Some(phrase.into());
        self
    }

    /// Sets the matched rule.
    #[must_use]
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    /// Adds a disambiguating token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.tokens.push(token.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(phrase) = &self.phrase {
            write!(f, "in \"{phrase}\"")?;
        }
        if let Some(rule) = &self.rule {
            write!(f, " (rule {rule})")?;
        }
        if !self.tokens.is_empty() {
            write!(f, " [{}]", self.tokens.join(" "))?;
        }
        Ok(())
    }
}

/// Result type alias for chesstalk operations.
pub type Result<T> = std::result::Result<T, Error>;
