//! Hooks into the resolution pipeline.
//!
//! Every method has a no-op default so observers only implement the events
//! they care about.

use chesstalk_foundation::{Error, OutcomeMarker, OutcomeWarning};

/// Which filtering pass produced a candidate count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterStage {
    /// After the required conditions.
    Required,
    /// After the marker tie-breakers.
    TieBreak,
}

impl FilterStage {
    /// Kebab-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::TieBreak => "tie-break",
        }
    }
}

/// Receives events while a phrase is resolved.
pub trait ResolutionObserver {
    /// A phrase entered the pipeline.
    fn phrase_received(&mut self, _phrase: &str) {}

    /// The phrase was normalized.
    fn phrase_normalized(&mut self, _normalized: &str) {}

    /// The outcome marker was extracted.
    fn marker_extracted(&mut self, _marker: OutcomeMarker) {}

    /// A grammar rule matched.
    fn rule_matched(&mut self, _rule: &'static str) {}

    /// A filtering pass finished.
    fn candidates_filtered(&mut self, _stage: FilterStage, _remaining: usize) {}

    /// The phrase resolved to a move.
    fn resolved(&mut self, _notation: &str) {}

    /// The phrase failed to resolve.
    fn failed(&mut self, _error: &Error) {}

    /// The resolved move disagreed with the phrase.
    fn warning_raised(&mut self, _warning: &OutcomeWarning) {}
}

/// An observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl ResolutionObserver for NullObserver {}
