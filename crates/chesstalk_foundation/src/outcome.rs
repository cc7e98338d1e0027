//! Outcome markers spoken at the end of a phrase, and the warnings raised
//! when a resolved move disagrees with what the phrase asserted.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A trailing assertion about the result of the move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OutcomeMarker {
    /// Nothing was asserted.
    #[default]
    None,
    /// The phrase ended with "check".
    Check,
    /// The phrase ended with "checkmate".
    Checkmate,
    /// The phrase ended with "stalemate".
    Stalemate,
}

impl OutcomeMarker {
    /// Recognizes a marker word.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "check" => Some(Self::Check),
            "checkmate" => Some(Self::Checkmate),
            "stalemate" => Some(Self::Stalemate),
            _ => None,
        }
    }

    /// The spoken word, or `None` when nothing was asserted.
    #[must_use]
    pub const fn word(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Check => Some("check"),
            Self::Checkmate => Some("checkmate"),
            Self::Stalemate => Some("stalemate"),
        }
    }

    /// Whether any marker was spoken.
    #[must_use]
    pub const fn is_spoken(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for OutcomeMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word().unwrap_or("none"))
    }
}

/// The kinds of outcome mismatch.
///
/// Each mismatch direction is its own kind: asserting something false and
/// leaving something true unsaid are never merged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WarningKind {
    /// The move mates but "checkmate" was not said.
    CheckmateUnspoken,
    /// "checkmate" was said but the move does not mate.
    CheckmateSpokenFalse,
    /// The move checks but "check" was not said.
    CheckUnspoken,
    /// "check" was said but the move does not check.
    CheckSpokenFalse,
    /// The move stalemates but "stalemate" was not said.
    StalemateUnspoken,
    /// "stalemate" was said but the move does not stalemate.
    StalemateSpokenFalse,
    /// The move captures but "takes" was not said.
    CaptureUnspoken,
    /// "takes" was said but the move does not capture.
    CaptureSpokenFalse,
    /// A source disambiguator was given that the position does not need.
    OverSpecified,
}

impl WarningKind {
    /// A short kebab-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CheckmateUnspoken => "checkmate-unspoken",
            Self::CheckmateSpokenFalse => "checkmate-spoken-false",
            Self::CheckUnspoken => "check-unspoken",
            Self::CheckSpokenFalse => "check-spoken-false",
            Self::StalemateUnspoken => "stalemate-unspoken",
            Self::StalemateSpokenFalse => "stalemate-spoken-false",
            Self::CaptureUnspoken => "capture-unspoken",
            Self::CaptureSpokenFalse => "capture-spoken-false",
            Self::OverSpecified => "over-specified",
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A non-fatal disagreement between a phrase and the move it resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OutcomeWarning {
    /// What kind of mismatch this is.
    pub kind: WarningKind,
    /// Human-readable explanation.
    pub message: String,
}

impl OutcomeWarning {
    /// Creates a warning.
    #[must_use]
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for OutcomeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
