//! Integration tests for Layer 1: Oracle
//!
//! Tests the `shakmaty`-backed board through the `ChessOracle` contract.

use chesstalk_foundation::{ErrorKind, File, PieceKind, Rank, Side, Square};
use chesstalk_oracle::{Board, ChessOracle, Tentative};

const STALEMATE: &str = "7k/4Q3/6K1/8/8/8/8/8 w - - 0 1";
const BACK_RANK: &str = "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1";

fn sq(name: &str) -> Square {
    Square::parse(name).unwrap()
}

// =============================================================================
// Move facts
// =============================================================================

#[test]
fn knight_move_facts() {
    let board = Board::new();
    let mv = board.parse_notation("Nf3").unwrap();

    assert_eq!(board.source(&mv), sq("g1"));
    assert_eq!(board.destination(&mv), sq("f3"));
    assert_eq!(board.moving_piece(&mv), PieceKind::Knight);
    assert_eq!(board.captured_piece(&mv), None);
    assert!(!board.is_capture(&mv));
    assert!(!board.is_castling(&mv));
    assert_eq!(board.promotion(&mv), None);
}

#[test]
fn capture_facts() {
    let mut board = Board::new();
    for notation in ["e4", "d5"] {
        board.play(notation).unwrap();
    }
    let mv = board.parse_notation("exd5").unwrap();

    assert!(board.is_capture(&mv));
    assert_eq!(board.captured_piece(&mv), Some(PieceKind::Pawn));
    assert_eq!(board.destination(&mv), Square::new(File::D, Rank::Fifth));
}

#[test]
fn parse_notation_accepts_suffixes() {
    let board = Board::from_fen(BACK_RANK).unwrap();
    let plain = board.parse_notation("Ra8").unwrap();
    let suffixed = board.parse_notation("Ra8#").unwrap();
    assert_eq!(plain, suffixed);
    assert_eq!(board.notation(&plain), "Ra8#");
}

#[test]
fn parse_notation_errors() {
    let board = Board::new();

    let err = board.parse_notation("Ke2").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IllegalNotation { .. }));

    let err = board.parse_notation("hello").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IllegalNotation { .. }));

    let two_rooks = Board::from_fen("4k3/8/8/8/8/8/4K3/R6R w - - 0 1").unwrap();
    let err = two_rooks.parse_notation("Rd1").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::AmbiguousNotation { .. }));
}

#[test]
fn parse_coordinates() {
    let board = Board::new();
    let mv = board.parse_coordinates(sq("b1"), sq("c3"), None).unwrap();
    assert_eq!(board.notation(&mv), "Nc3");

    let err = board.parse_coordinates(sq("b1"), sq("b3"), None).unwrap_err();
    assert_eq!(err.to_string(), "illegal move: b1b3");
}

// =============================================================================
// Position state
// =============================================================================

#[test]
fn outcome_queries_after_moves() {
    let mut board = Board::from_fen(BACK_RANK).unwrap();
    let mv = board.parse_notation("Ra8").unwrap();
    board.push(&mv);
    assert!(board.is_check());
    assert!(board.is_checkmate());
    assert!(!board.is_stalemate());

    let mut board = Board::from_fen(STALEMATE).unwrap();
    let mv = board.parse_notation("Qf7").unwrap();
    board.push(&mv);
    assert!(!board.is_check());
    assert!(board.is_stalemate());
    assert!(board.legal_moves().is_empty());
}

#[test]
fn tentative_guard_rolls_back() {
    let mut board = Board::new();
    let mv = board.parse_notation("e4").unwrap();

    {
        let applied = Tentative::apply(&mut board, &mv);
        assert_eq!(applied.turn(), Side::Black);
        assert_eq!(applied.ply(), 1);
    }

    assert_eq!(board.turn(), Side::White);
    assert_eq!(board.ply(), 0);
}

#[test]
fn tentatively_returns_the_query_result() {
    let mut board = Board::from_fen(BACK_RANK).unwrap();
    let moves = board.legal_moves();
    let mates: Vec<String> = moves
        .iter()
        .filter(|mv| board.clone().tentatively(mv, |after| after.is_checkmate()))
        .map(|mv| board.notation(mv))
        .collect();
    assert_eq!(mates, vec!["Ra8#".to_string()]);
    assert_eq!(board.legal_moves(), moves);
}

#[test]
fn history_play_and_pop() {
    let mut board = Board::new();
    assert_eq!(board.play("e4").unwrap(), "e4");
    assert_eq!(board.play("e5").unwrap(), "e5");
    assert_eq!(board.play("Qh5").unwrap(), "Qh5");
    assert_eq!(board.notation_history(), vec!["e4", "e5", "Qh5"]);

    let popped = board.pop().unwrap();
    assert_eq!(board.moving_piece(&popped), PieceKind::Queen);
    assert_eq!(board.notation_history(), vec!["e4", "e5"]);

    board.reset();
    assert_eq!(board.ply(), 0);
    assert!(board.pop().is_none());
}

#[test]
fn fen_boards_reset_to_their_start() {
    let mut board = Board::from_fen(BACK_RANK).unwrap();
    assert_eq!(board.start_fen(), Some(BACK_RANK));
    board.play("Kf1").unwrap();
    board.reset();
    assert_eq!(board.legal_moves(), Board::from_fen(BACK_RANK).unwrap().legal_moves());
}

#[test]
fn invalid_fens() {
    for fen in ["not a fen", "8/8/8/8/8/8/8/8 w - - 0 1"] {
        let err = Board::from_fen(fen).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidPosition(_)), "{fen}");
    }
}

// =============================================================================
// Diagrams
// =============================================================================

#[test]
fn diagram_from_each_side() {
    let board = Board::new();

    let white = board.diagram(Side::White);
    let lines: Vec<&str> = white.lines().collect();
    assert_eq!(lines[0], "8  r n b q k b n r");
    assert_eq!(lines[7], "1  R N B Q K B N R");
    assert_eq!(lines[8], "   a b c d e f g h");

    let black = board.diagram(Side::Black);
    let lines: Vec<&str> = black.lines().collect();
    assert_eq!(lines[0], "1  R N B K Q B N R");
    assert_eq!(lines[8], "   h g f e d c b a");
}
