//! Outcome warning tests.
//!
//! A resolved move is cross-checked against what the phrase asserted; each
//! mismatch direction is reported on its own.

use chesstalk_foundation::{ErrorKind, WarningKind};
use chesstalk_grammar::{PhraseResolver, ResolverConfig, WarningPolicy};
use chesstalk_oracle::Board;

const BACK_RANK: &str = "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1";
const STALEMATE: &str = "7k/4Q3/6K1/8/8/8/8/8 w - - 0 1";
const TWO_KNIGHTS: &str = "4k3/8/8/3p4/8/2N1N3/8/4K3 w - - 0 1";

fn warnings(fen: Option<&str>, phrase: &str) -> (String, Vec<WarningKind>) {
    let mut board = fen.map_or_else(Board::new, |fen| Board::from_fen(fen).unwrap());
    let resolution = PhraseResolver::new().resolve(phrase, &mut board).unwrap();
    let kinds = resolution.warnings.iter().map(|w| w.kind).collect();
    (resolution.notation, kinds)
}

// =============================================================================
// Check and mate
// =============================================================================

#[test]
fn mate_without_saying_checkmate() {
    let (notation, kinds) = warnings(Some(BACK_RANK), "rook a 8");
    assert_eq!(notation, "Ra8#");
    assert_eq!(kinds, vec![WarningKind::CheckmateUnspoken]);
}

#[test]
fn mate_said_as_check_is_one_warning() {
    let (_, kinds) = warnings(Some(BACK_RANK), "rook a 8 check");
    assert_eq!(kinds, vec![WarningKind::CheckmateUnspoken]);
}

#[test]
fn mate_said_correctly() {
    let (_, kinds) = warnings(Some(BACK_RANK), "rook a eight checkmate");
    assert!(kinds.is_empty());
    let (_, kinds) = warnings(Some(BACK_RANK), "rook a 8 mate");
    assert!(kinds.is_empty());
}

#[test]
fn false_checkmate() {
    let (notation, kinds) = warnings(None, "knight f 3 checkmate");
    assert_eq!(notation, "Nf3");
    assert_eq!(kinds, vec![WarningKind::CheckmateSpokenFalse]);
}

#[test]
fn check_left_unsaid_and_said_falsely() {
    let fen = "4k3/8/8/8/8/8/8/R3K3 w - - 0 1";
    let (notation, kinds) = warnings(Some(fen), "rook a 8");
    assert_eq!(notation, "Ra8+");
    assert_eq!(kinds, vec![WarningKind::CheckUnspoken]);

    let (_, kinds) = warnings(Some(fen), "rook a 7 check");
    assert_eq!(kinds, vec![WarningKind::CheckSpokenFalse]);
}

// =============================================================================
// Stalemate
// =============================================================================

#[test]
fn stalemate_warnings() {
    let (notation, kinds) = warnings(Some(STALEMATE), "queen f 7");
    assert_eq!(notation, "Qf7");
    assert_eq!(kinds, vec![WarningKind::StalemateUnspoken]);

    let (_, kinds) = warnings(Some(STALEMATE), "queen f 7 stalemate");
    assert!(kinds.is_empty());

    let (_, kinds) = warnings(Some(STALEMATE), "queen f 7 check");
    assert_eq!(
        kinds,
        vec![WarningKind::CheckSpokenFalse, WarningKind::StalemateUnspoken]
    );

    let (_, kinds) = warnings(None, "e 4 stalemate");
    assert_eq!(kinds, vec![WarningKind::StalemateSpokenFalse]);
}

// =============================================================================
// Captures and over-specification
// =============================================================================

#[test]
fn capture_warnings() {
    let (notation, kinds) = warnings(Some(TWO_KNIGHTS), "knight c d 5");
    assert_eq!(notation, "Ncxd5");
    assert_eq!(kinds, vec![WarningKind::CaptureUnspoken]);

    let (notation, kinds) = warnings(None, "knight takes f 3");
    assert_eq!(notation, "Nf3");
    assert_eq!(kinds, vec![WarningKind::CaptureSpokenFalse]);
}

#[test]
fn naming_the_only_rook_is_over_specified() {
    let fen = "4k3/8/8/8/8/8/4K3/R7 w - - 0 1";
    let (notation, kinds) = warnings(Some(fen), "rook a d 1");
    assert_eq!(notation, "Rd1");
    assert_eq!(kinds, vec![WarningKind::OverSpecified]);
}

// =============================================================================
// Warning policy
// =============================================================================

#[test]
fn deny_turns_the_first_warning_into_an_error() {
    let mut board = Board::from_fen(STALEMATE).unwrap();
    let resolver = PhraseResolver::with_config(ResolverConfig::strict());

    let err = resolver.resolve("queen f 7 check", &mut board).unwrap_err();
    match err.kind {
        ErrorKind::OutcomeMismatch(warning) => {
            assert_eq!(warning.kind, WarningKind::CheckSpokenFalse);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(resolver.resolve("queen f 7 stalemate", &mut board).is_ok());
}

#[test]
fn ignore_drops_warnings() {
    let mut board = Board::from_fen(BACK_RANK).unwrap();
    let resolver =
        PhraseResolver::with_config(ResolverConfig::new().with_warnings(WarningPolicy::Ignore));
    let resolution = resolver.resolve("rook a 8", &mut board).unwrap();
    assert_eq!(resolution.notation, "Ra8#");
    assert!(resolution.warnings.is_empty());
}
