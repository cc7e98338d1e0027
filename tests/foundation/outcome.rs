//! Integration tests for outcome markers and warnings

use chesstalk_foundation::{OutcomeMarker, OutcomeWarning, WarningKind};

#[test]
fn markers_from_words() {
    assert_eq!(OutcomeMarker::from_word("check"), Some(OutcomeMarker::Check));
    assert_eq!(
        OutcomeMarker::from_word("checkmate"),
        Some(OutcomeMarker::Checkmate)
    );
    assert_eq!(
        OutcomeMarker::from_word("stalemate"),
        Some(OutcomeMarker::Stalemate)
    );
    assert_eq!(OutcomeMarker::from_word("mate"), None);
}

#[test]
fn marker_words_round_trip() {
    for marker in [
        OutcomeMarker::Check,
        OutcomeMarker::Checkmate,
        OutcomeMarker::Stalemate,
    ] {
        assert!(marker.is_spoken());
        assert_eq!(OutcomeMarker::from_word(marker.word().unwrap()), Some(marker));
    }
}

#[test]
fn no_marker_by_default() {
    let marker = OutcomeMarker::default();
    assert_eq!(marker, OutcomeMarker::None);
    assert!(!marker.is_spoken());
    assert_eq!(marker.word(), None);
    assert_eq!(marker.to_string(), "none");
}

#[test]
fn warning_kinds_have_distinct_names() {
    let kinds = [
        WarningKind::CheckmateUnspoken,
        WarningKind::CheckmateSpokenFalse,
        WarningKind::CheckUnspoken,
        WarningKind::CheckSpokenFalse,
        WarningKind::StalemateUnspoken,
        WarningKind::StalemateSpokenFalse,
        WarningKind::CaptureUnspoken,
        WarningKind::CaptureSpokenFalse,
        WarningKind::OverSpecified,
    ];
    let mut names: Vec<_> = kinds.iter().map(|k| k.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), kinds.len());
}

#[test]
fn warnings_display_their_message() {
    let warning = OutcomeWarning::new(WarningKind::StalemateUnspoken, "that is stalemate");
    assert_eq!(warning.kind, WarningKind::StalemateUnspoken);
    assert_eq!(warning.to_string(), "that is stalemate");
}
