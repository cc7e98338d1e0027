//! Session tests.
//!
//! Tests playing games through a session, and saving and restoring them.

use chesstalk_foundation::{ErrorKind, Side, WarningKind};
use chesstalk_runtime::serialize;
use chesstalk_runtime::{SavedGame, Session, SessionConfig};
use std::path::PathBuf;

const BACK_RANK: &str = "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1";

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("chesstalk-{}-{name}", std::process::id()))
}

fn notations(session: &mut Session, line: &str) -> Vec<String> {
    session
        .submit(line)
        .unwrap()
        .into_iter()
        .map(|played| played.notation)
        .collect()
}

// =============================================================================
// Playing
// =============================================================================

#[test]
fn phrases_and_notation_mix() {
    let mut session = Session::new();

    assert_eq!(notations(&mut session, "e four"), vec!["e4"]);
    assert_eq!(notations(&mut session, "e5 Nf3"), vec!["e5", "Nf3"]);
    assert_eq!(notations(&mut session, "night c six"), vec!["Nc6"]);
    assert_eq!(
        session.board().notation_history(),
        vec!["e4", "e5", "Nf3", "Nc6"]
    );
}

#[test]
fn a_bad_line_changes_nothing() {
    let mut session = Session::new();
    assert!(session.submit("e4 Ke2").is_err());
    assert!(session.submit("banana").is_err());
    assert_eq!(session.board().ply(), 0);
}

#[test]
fn undo_and_reset() {
    let mut session = Session::new();
    session.submit("e4 e5").unwrap();

    assert_eq!(session.undo(), Some("e5".to_string()));
    assert_eq!(session.board().ply(), 1);

    session.reset();
    assert_eq!(session.board().ply(), 0);
    assert_eq!(session.undo(), None);
}

#[test]
fn notation_can_be_turned_off() {
    let config = SessionConfig::new().without_notation();
    let mut session = Session::with_config(config).unwrap();

    assert!(session.submit("Nf3").is_err());
    assert_eq!(notations(&mut session, "knight f 3"), vec!["Nf3"]);
}

#[test]
fn strict_sessions_refuse_mismatched_phrases() {
    let config = SessionConfig::new().strict().with_start_fen(BACK_RANK);
    let mut session = Session::with_config(config).unwrap();

    let err = session.submit("rook a 8").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::OutcomeMismatch(_)));
    assert_eq!(session.board().ply(), 0);

    assert_eq!(notations(&mut session, "rook a 8 checkmate"), vec!["Ra8#"]);
}

#[test]
fn lenient_sessions_report_warnings() {
    let config = SessionConfig::new().with_start_fen(BACK_RANK);
    let mut session = Session::with_config(config).unwrap();

    let played = session.submit("rook a 8").unwrap();
    assert_eq!(played[0].warnings[0].kind, WarningKind::CheckmateUnspoken);
}

#[test]
fn bad_start_positions_are_rejected() {
    let config = SessionConfig::new().with_start_fen("not a fen");
    let err = Session::with_config(config).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidPosition(_)));
}

// =============================================================================
// Saving and loading
// =============================================================================

#[test]
fn saved_games_survive_a_round_trip_through_a_file() {
    let path = temp_path("round-trip.msgpack");
    let mut session = Session::new();
    session.submit("e4 e5").unwrap();
    session.submit("knight f three").unwrap();
    session.flip();
    session.save(&path).unwrap();

    let mut restored = Session::new();
    restored.load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(
        restored.board().notation_history(),
        vec!["e4", "e5", "Nf3"]
    );
    assert_eq!(restored.orientation(), Side::Black);
    assert_eq!(restored.diagram(), session.diagram());
}

#[test]
fn saved_games_keep_their_start_position() {
    let config = SessionConfig::new().with_start_fen(BACK_RANK);
    let mut session = Session::with_config(config).unwrap();
    session.submit("Kf1").unwrap();

    let bytes = serialize::to_bytes(&session.saved_game()).unwrap();
    let game = serialize::from_bytes(&bytes).unwrap();
    assert_eq!(game.start_fen.as_deref(), Some(BACK_RANK));

    let board = game.replay().unwrap();
    assert_eq!(board.notation_history(), vec!["Kf1"]);
}

#[test]
fn a_failed_load_keeps_the_current_game() {
    let mut session = Session::new();
    session.submit("d4").unwrap();

    assert!(session.load(temp_path("missing.msgpack")).is_err());

    let bad = SavedGame {
        moves: vec!["e4".to_string(), "Ke7".to_string(), "Ke3".to_string()],
        ..SavedGame::default()
    };
    assert!(session.restore(&bad).is_err());
    assert_eq!(session.board().notation_history(), vec!["d4"]);
}

#[test]
fn corrupt_files_are_serialization_errors() {
    let path = temp_path("corrupt.msgpack");
    std::fs::write(&path, b"not msgpack at all").unwrap();

    let mut session = Session::new();
    let err = session.load(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(err.kind, ErrorKind::Serialization(_)));
}
