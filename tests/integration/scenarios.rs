//! End-to-end phrase scenarios.
//!
//! Each test sets up a position, says a phrase, and checks the notation or
//! the diagnostic that comes back.

use chesstalk_foundation::{AmbiguityKind, ErrorKind, InvalidMoveKind};
use chesstalk_grammar::PhraseResolver;
use chesstalk_oracle::Board;

const TWO_KNIGHTS: &str = "4k3/8/8/3p4/8/2N1N3/8/4K3 w - - 0 1";
const KINGSIDE_ONLY: &str = "4k3/8/8/8/8/8/8/4K2R w K - 0 1";
const BOTH_SIDES: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
const TWO_ROOKS: &str = "4k3/8/8/8/8/8/4K3/R6R w - - 0 1";
const STACKED_ROOKS: &str = "4k3/8/8/8/R7/8/8/R3K3 w - - 0 1";

fn board(fen: Option<&str>) -> Board {
    fen.map_or_else(Board::new, |fen| Board::from_fen(fen).unwrap())
}

fn say(fen: Option<&str>, phrase: &str) -> chesstalk_foundation::Result<String> {
    PhraseResolver::new()
        .resolve(phrase, &mut board(fen))
        .map(|resolution| resolution.notation)
}

// =============================================================================
// Opening phrases
// =============================================================================

#[test]
fn pawn_pushes() {
    assert_eq!(say(None, "e4").unwrap(), "e4");
    assert_eq!(say(None, "e four").unwrap(), "e4");
    assert_eq!(say(None, "pawn to d four").unwrap(), "d4");
}

#[test]
fn knight_development() {
    assert_eq!(say(None, "knight f three").unwrap(), "Nf3");
    assert_eq!(say(None, "night to see three").unwrap(), "Nc3");
    assert_eq!(say(None, "knight from g one to f three").unwrap(), "Nf3");
}

#[test]
fn knight_takes_from_the_start() {
    let err = say(None, "knight takes").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "no matching move for \"knight takes\"");
}

#[test]
fn gibberish_is_unparsed() {
    let err = say(None, "banana").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Unparsed { .. }));

    let err = say(None, "knight banana f 3").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidTokens { .. }));
}

// =============================================================================
// Capture ambiguity
// =============================================================================

#[test]
fn two_knights_and_a_pawn() {
    for phrase in ["knight takes d5", "knight takes pawn"] {
        let err = say(Some(TWO_KNIGHTS), phrase).unwrap_err();
        assert!(err.is_ambiguous(), "{phrase}");
    }
    let err = say(Some(TWO_KNIGHTS), "knight takes pawn").unwrap_err();
    assert_eq!(
        err.ambiguity(),
        Some(AmbiguityKind::CaptureSourceOrDestination)
    );

    assert_eq!(say(Some(TWO_KNIGHTS), "knight c takes pawn").unwrap(), "Ncxd5");
    assert_eq!(say(Some(TWO_KNIGHTS), "knight e takes d 5").unwrap(), "Nexd5");
}

#[test]
fn bare_takes_with_one_capture() {
    let fen = "4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1";
    assert_eq!(say(Some(fen), "takes").unwrap(), "exd5");
    assert_eq!(say(Some(fen), "takes pawn").unwrap(), "exd5");
    assert_eq!(say(Some(fen), "e takes d").unwrap(), "exd5");
    assert_eq!(say(Some(fen), "e takes d 5").unwrap(), "exd5");
}

#[test]
fn pawn_capture_that_does_not_exist() {
    let err = say(None, "e takes d 5").unwrap_err();
    match err.kind {
        ErrorKind::InvalidMove { kind, .. } => assert_eq!(kind, InvalidMoveKind::PawnCapture),
        other => panic!("unexpected error: {other:?}"),
    }
}

// =============================================================================
// Castling
// =============================================================================

#[test]
fn castles_when_only_kingside_is_legal() {
    assert_eq!(say(Some(KINGSIDE_ONLY), "castles").unwrap(), "O-O");
    assert_eq!(say(Some(KINGSIDE_ONLY), "castle kingside").unwrap(), "O-O");

    let err = say(Some(KINGSIDE_ONLY), "castles queenside").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn castles_when_both_sides_are_legal() {
    let err = say(Some(BOTH_SIDES), "castles").unwrap_err();
    assert_eq!(
        err.ambiguity(),
        Some(AmbiguityKind::UnspecifiedCastlingDirection)
    );
    assert_eq!(say(Some(BOTH_SIDES), "queenside castles").unwrap(), "O-O-O");
}

// =============================================================================
// Source disambiguation
// =============================================================================

#[test]
fn rooks_on_the_same_rank() {
    let err = say(Some(TWO_ROOKS), "rook d 1").unwrap_err();
    assert!(err.is_ambiguous());
    assert_eq!(say(Some(TWO_ROOKS), "rook a d 1").unwrap(), "Rad1");
    assert_eq!(say(Some(TWO_ROOKS), "rook h d one").unwrap(), "Rhd1");
}

#[test]
fn rooks_on_the_same_file() {
    let err = say(Some(STACKED_ROOKS), "rook a 2").unwrap_err();
    assert!(err.is_ambiguous());
    assert_eq!(say(Some(STACKED_ROOKS), "rook 1 a 2").unwrap(), "R1a2");
    assert_eq!(say(Some(STACKED_ROOKS), "rook 4 a 2").unwrap(), "R4a2");
}

#[test]
fn coordinates() {
    assert_eq!(say(None, "e2e4").unwrap(), "e4");
    assert_eq!(say(None, "g 1 f 3").unwrap(), "Nf3");

    let err = say(None, "e2e5").unwrap_err();
    match err.kind {
        ErrorKind::InvalidMove { kind, .. } => assert_eq!(kind, InvalidMoveKind::Coordinates),
        other => panic!("unexpected error: {other:?}"),
    }
}

// =============================================================================
// Promotion
// =============================================================================

#[test]
fn promotion_needs_a_piece() {
    let fen = "8/4P2k/8/8/8/8/8/4K3 w - - 0 1";
    assert_eq!(say(Some(fen), "e 8 equals queen").unwrap(), "e8=Q");
    assert_eq!(say(Some(fen), "e eight promote to knight").unwrap(), "e8=N");

    let err = say(Some(fen), "e 8").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnspecifiedPromotion { .. }));
    let err = say(Some(fen), "e 8 equals").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnspecifiedPromotion { .. }));
    let err = say(Some(fen), "e 8 equals pawn").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidPromotion { .. }));
}

// =============================================================================
// Markers as tie-breakers
// =============================================================================

#[test]
fn check_picks_the_discovering_rook() {
    // Both rooks reach d5; only the one leaving the bishop's diagonal checks.
    let fen = "8/7k/8/R7/8/3R4/8/KB6 w - - 0 1";
    let err = say(Some(fen), "rook d 5").unwrap_err();
    assert!(err.is_ambiguous());
    assert_eq!(say(Some(fen), "rook d 5 check").unwrap(), "Rdd5+");
}

#[test]
fn pieces_alone_are_not_phrases() {
    let err = say(None, "rook").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Unparsed { .. }));
    assert_eq!(err.phrase(), Some("rook"));
}
