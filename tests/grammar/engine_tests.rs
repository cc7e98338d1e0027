//! Resolution engine tests.
//!
//! Tests candidate filtering against a real board.

use chesstalk_foundation::{AmbiguityKind, OutcomeMarker, PieceKind, Square};
use chesstalk_grammar::{Condition, FilterStage, ResolutionEngine, ResolutionObserver};
use chesstalk_grammar::{NullObserver, ResolutionOutcome};
use chesstalk_oracle::{Board, ChessOracle};

const SCHOLARS_MATE: &str =
    "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4";

#[derive(Default)]
struct Stages(Vec<(FilterStage, usize)>);

impl ResolutionObserver for Stages {
    fn candidates_filtered(&mut self, stage: FilterStage, remaining: usize) {
        self.0.push((stage, remaining));
    }
}

fn sq(name: &str) -> Square {
    Square::parse(name).unwrap()
}

#[test]
fn required_conditions_narrow_to_one() {
    let mut board = Board::new();
    let outcome = ResolutionEngine::resolve(
        &mut board,
        &[
            Condition::SourcePiece(PieceKind::Knight),
            Condition::DestinationSquare(sq("f3")),
        ],
        &[],
        AmbiguityKind::Destination,
        &mut NullObserver,
    );
    let mv = outcome.unique().unwrap();
    assert_eq!(board.notation(&mv), "Nf3");
}

#[test]
fn nothing_matches() {
    let mut board = Board::new();
    let outcome = ResolutionEngine::resolve(
        &mut board,
        &[Condition::IsCapture],
        &[],
        AmbiguityKind::Unclassified,
        &mut NullObserver,
    );
    assert_eq!(outcome, ResolutionOutcome::NotFound);
}

#[test]
fn ambiguity_reports_every_candidate() {
    let mut board = Board::new();
    let mut stages = Stages::default();
    let outcome = ResolutionEngine::resolve(
        &mut board,
        &[Condition::SourcePiece(PieceKind::Knight)],
        &[],
        AmbiguityKind::Source,
        &mut stages,
    );
    match outcome {
        ResolutionOutcome::Ambiguous { kind, candidates } => {
            assert_eq!(kind, AmbiguityKind::Source);
            assert_eq!(candidates.len(), 4);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    // No tie-breakers, so only the required pass is reported.
    assert_eq!(stages.0, vec![(FilterStage::Required, 4)]);
}

#[test]
fn tie_breakers_settle_ambiguity() {
    let mut board = Board::from_fen(SCHOLARS_MATE).unwrap();
    let mut stages = Stages::default();
    let outcome = ResolutionEngine::resolve(
        &mut board,
        &[
            Condition::SourcePiece(PieceKind::Queen),
            Condition::CapturedPiece(PieceKind::Pawn),
        ],
        &Condition::tie_breakers(OutcomeMarker::Checkmate),
        AmbiguityKind::CaptureSourceOrDestination,
        &mut stages,
    );
    let mv = outcome.unique().unwrap();
    assert_eq!(board.notation(&mv), "Qxf7#");
    assert_eq!(stages.0[1], (FilterStage::TieBreak, 1));
}

#[test]
fn tie_breakers_never_run_on_a_unique_set() {
    let mut board = Board::new();
    let mut stages = Stages::default();
    let outcome = ResolutionEngine::resolve(
        &mut board,
        &[Condition::DestinationSquare(sq("e4"))],
        &Condition::tie_breakers(OutcomeMarker::Check),
        AmbiguityKind::Destination,
        &mut stages,
    );
    // e4 gives no check, but it is the only candidate.
    assert!(outcome.unique().is_some());
    assert_eq!(stages.0, vec![(FilterStage::Required, 1)]);
}

#[test]
fn engine_leaves_the_board_alone() {
    let mut board = Board::from_fen(SCHOLARS_MATE).unwrap();
    let before = board.legal_moves();
    let _ = ResolutionEngine::resolve(
        &mut board,
        &[Condition::GivesCheck],
        &[Condition::GivesCheckmate],
        AmbiguityKind::Unclassified,
        &mut NullObserver,
    );
    assert_eq!(board.legal_moves(), before);
    assert_eq!(board.ply(), 0);
}
