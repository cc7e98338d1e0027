//! The resolution engine.
//!
//! Narrows the oracle's legal moves to exactly one. Required conditions are
//! applied first; tie-breakers only ever run on a set that is already
//! ambiguous, and only narrow it.

use chesstalk_foundation::AmbiguityKind;
use chesstalk_oracle::ChessOracle;

use crate::condition::Condition;
use crate::observer::{FilterStage, ResolutionObserver};

/// The three ways a resolution can end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolutionOutcome<M> {
    /// Exactly one move satisfies the phrase.
    Unique(M),
    /// No legal move satisfies the required conditions.
    NotFound,
    /// Several moves satisfy the phrase and the tie-breakers did not settle
    /// it.
    Ambiguous {
        /// The rule's ambiguity kind.
        kind: AmbiguityKind,
        /// Every move that satisfied the required conditions.
        candidates: Vec<M>,
    },
}

impl<M> ResolutionOutcome<M> {
    /// Returns the move if the outcome is unique.
    pub fn unique(self) -> Option<M> {
        match self {
            Self::Unique(mv) => Some(mv),
            _ => None,
        }
    }
}

/// Filters legal moves by conditions.
pub struct ResolutionEngine;

impl ResolutionEngine {
    /// Resolves against the oracle's current position.
    pub fn resolve<O: ChessOracle>(
        oracle: &mut O,
        required: &[Condition],
        optional: &[Condition],
        ambiguity: AmbiguityKind,
        observer: &mut dyn ResolutionObserver,
    ) -> ResolutionOutcome<O::Move> {
        let moves = oracle.legal_moves();
        let mut candidates = Self::filter(oracle, moves, required);
        observer.candidates_filtered(FilterStage::Required, candidates.len());

        match candidates.len() {
            0 => return ResolutionOutcome::NotFound,
            1 => return ResolutionOutcome::Unique(candidates.remove(0)),
            _ => {}
        }

        if !optional.is_empty() {
            let mut narrowed = Self::filter(oracle, candidates.clone(), optional);
            observer.candidates_filtered(FilterStage::TieBreak, narrowed.len());
            if narrowed.len() == 1 {
                return ResolutionOutcome::Unique(narrowed.remove(0));
            }
        }

        ResolutionOutcome::Ambiguous {
            kind: ambiguity,
            candidates,
        }
    }

    fn filter<O: ChessOracle>(
        oracle: &mut O,
        moves: Vec<O::Move>,
        conditions: &[Condition],
    ) -> Vec<O::Move> {
        let conditions = evaluation_order(conditions);
        moves
            .into_iter()
            .filter(|mv| conditions.iter().all(|c| c.holds(oracle, mv)))
            .collect()
    }
}

/// Conditions that apply the move go last, so a failed board query skips them.
fn evaluation_order(conditions: &[Condition]) -> Vec<Condition> {
    let (outcome, board): (Vec<Condition>, Vec<Condition>) =
        conditions.iter().partition(|c| c.is_outcome());
    board.into_iter().chain(outcome).collect()
}
