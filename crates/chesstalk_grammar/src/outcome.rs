//! The outcome validator.
//!
//! Compares what a resolved move actually does with what the phrase said
//! about it. Mismatches are warnings, not errors; the resolver's warning
//! policy decides what happens to them.

use chesstalk_foundation::{OutcomeMarker, OutcomeWarning, WarningKind};
use chesstalk_oracle::ChessOracle;

/// What the phrase asserted about the move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpokenFacts {
    /// The trailing marker.
    pub marker: OutcomeMarker,
    /// Whether "takes" was said.
    pub said_takes: bool,
    /// Whether the phrase named the moving piece's square, file or rank.
    pub source_disambiguated: bool,
}

/// Checks resolved moves against spoken facts.
pub struct OutcomeValidator;

impl OutcomeValidator {
    /// Returns every mismatch between `mv` and `spoken`, in a fixed order:
    /// checkmate, check, stalemate, capture, over-specification.
    pub fn validate<O: ChessOracle>(
        oracle: &mut O,
        mv: &O::Move,
        spoken: &SpokenFacts,
    ) -> Vec<OutcomeWarning> {
        let san = oracle.notation(mv);
        let bare = san.trim_end_matches(['+', '#']);
        let (check, mate, stalemate) = oracle.tentatively(mv, |after| {
            (after.is_check(), after.is_checkmate(), after.is_stalemate())
        });
        let marker = spoken.marker;
        let mut warnings = Vec::new();

        if mate && marker != OutcomeMarker::Checkmate {
            warnings.push(OutcomeWarning::new(
                WarningKind::CheckmateUnspoken,
                format!("{bare} gives checkmate ({san}), but you did not say \"checkmate\""),
            ));
        }
        if !mate && marker == OutcomeMarker::Checkmate {
            warnings.push(OutcomeWarning::new(
                WarningKind::CheckmateSpokenFalse,
                format!("{san} does not give checkmate, but you said \"checkmate\""),
            ));
        }
        if check
            && !mate
            && !matches!(marker, OutcomeMarker::Check | OutcomeMarker::Checkmate)
        {
            warnings.push(OutcomeWarning::new(
                WarningKind::CheckUnspoken,
                format!("{bare} gives check ({san}), but you did not say \"check\""),
            ));
        }
        if !check && marker == OutcomeMarker::Check {
            warnings.push(OutcomeWarning::new(
                WarningKind::CheckSpokenFalse,
                format!("{san} does not give check, but you said \"check\""),
            ));
        }
        if stalemate && marker != OutcomeMarker::Stalemate {
            warnings.push(OutcomeWarning::new(
                WarningKind::StalemateUnspoken,
                format!("{san} gives stalemate, but you did not say \"stalemate\""),
            ));
        }
        if !stalemate && marker == OutcomeMarker::Stalemate {
            warnings.push(OutcomeWarning::new(
                WarningKind::StalemateSpokenFalse,
                format!("{san} does not give stalemate, but you said \"stalemate\""),
            ));
        }

        let capture = oracle.is_capture(mv);
        if capture && !spoken.said_takes {
            warnings.push(OutcomeWarning::new(
                WarningKind::CaptureUnspoken,
                format!("{san} is a capture, but you did not say \"takes\""),
            ));
        }
        if !capture && spoken.said_takes {
            warnings.push(OutcomeWarning::new(
                WarningKind::CaptureSpokenFalse,
                format!("{san} is not a capture, but you said \"takes\""),
            ));
        }

        if spoken.source_disambiguated && Self::is_sole_route(oracle, mv) {
            let piece = oracle.moving_piece(mv);
            let destination = oracle.destination(mv);
            warnings.push(OutcomeWarning::new(
                WarningKind::OverSpecified,
                format!(
                    "{san} is the only {piece} move to {destination}, so naming where it starts was not needed"
                ),
            ));
        }

        warnings
    }

    /// Whether no other move of the same piece kind reaches the same square
    /// with the same promotion.
    fn is_sole_route<O: ChessOracle>(oracle: &O, mv: &O::Move) -> bool {
        let piece = oracle.moving_piece(mv);
        let destination = oracle.destination(mv);
        let promotion = oracle.promotion(mv);
        oracle
            .legal_moves()
            .iter()
            .filter(|other| {
                oracle.moving_piece(other) == piece
                    && oracle.destination(other) == destination
                    && oracle.promotion(other) == promotion
            })
            .count()
            == 1
    }
}
