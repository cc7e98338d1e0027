//! Trace event and record types.
//!
//! This module defines the events that can be traced while phrases are resolved.

use chesstalk_foundation::{OutcomeMarker, WarningKind};
use chesstalk_grammar::FilterStage;

// =============================================================================
// Trace Event
// =============================================================================

/// Events that can be traced during phrase resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// A phrase entered the pipeline.
    PhraseReceived {
        /// The phrase as given.
        phrase: String,
    },

    /// The phrase was normalized.
    PhraseNormalized {
        /// The normalized phrase.
        normalized: String,
    },

    /// The trailing outcome marker was extracted.
    MarkerExtracted {
        /// The marker (possibly none).
        marker: OutcomeMarker,
    },

    /// A grammar rule matched.
    RuleMatched {
        /// The rule name.
        rule: &'static str,
    },

    /// A filtering pass finished.
    CandidatesFiltered {
        /// Which pass.
        stage: FilterStage,
        /// Candidates left after the pass.
        remaining: usize,
    },

    /// The phrase resolved.
    Resolved {
        /// The move's notation.
        notation: String,
    },

    /// The phrase failed to resolve.
    Failed {
        /// The error message.
        message: String,
    },

    /// The resolved move disagreed with the phrase.
    Warning {
        /// The warning kind.
        kind: WarningKind,
        /// The warning message.
        message: String,
    },
}

impl TraceEvent {
    /// Returns a short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::PhraseReceived { .. } => "phrase-received",
            Self::PhraseNormalized { .. } => "phrase-normalized",
            Self::MarkerExtracted { .. } => "marker-extracted",
            Self::RuleMatched { .. } => "rule-matched",
            Self::CandidatesFiltered { .. } => "candidates-filtered",
            Self::Resolved { .. } => "resolved",
            Self::Failed { .. } => "failed",
            Self::Warning { .. } => "warning",
        }
    }

    /// Returns true if this event ends a phrase.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved { .. } | Self::Failed { .. })
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// A recorded trace event with metadata.
#[derive(Clone, Debug)]
pub struct TraceRecord {
    /// Unique record ID (monotonically increasing).
    pub id: u64,
    /// The phrase this event belongs to.
    pub phrase_seq: u64,
    /// Nanoseconds since the tracer was created.
    pub timestamp_ns: u64,
    /// The event.
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Creates a new trace record.
    #[must_use]
    pub fn new(id: u64, phrase_seq: u64, timestamp_ns: u64, event: TraceEvent) -> Self {
        Self {
            id,
            phrase_seq,
            timestamp_ns,
            event,
        }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}
