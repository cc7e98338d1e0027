//! Tokenizer tests.
//!
//! Tests for turning normalized phrases into tokens and markers.

use chesstalk_foundation::{CastlingSide, File, OutcomeMarker, PieceKind, Rank};
use chesstalk_grammar::{PhraseTokenizer, Token};

#[test]
fn tokenize_piece_to_square() {
    let phrase = PhraseTokenizer::tokenize("knight f 3");
    assert_eq!(
        phrase.tokens,
        vec![
            Token::Piece(PieceKind::Knight),
            Token::File(File::F),
            Token::Rank(Rank::Third),
        ]
    );
    assert_eq!(phrase.marker, OutcomeMarker::None);
}

#[test]
fn compact_squares_and_coordinates_split() {
    let phrase = PhraseTokenizer::tokenize("e2e4");
    assert_eq!(
        phrase.tokens,
        vec![
            Token::File(File::E),
            Token::Rank(Rank::Second),
            Token::File(File::E),
            Token::Rank(Rank::Fourth),
        ]
    );

    let phrase = PhraseTokenizer::tokenize("rook d1");
    assert_eq!(phrase.tokens.len(), 3);
}

#[test]
fn trailing_marker_is_removed() {
    let phrase = PhraseTokenizer::tokenize("queen takes f 7 checkmate");
    assert_eq!(phrase.marker, OutcomeMarker::Checkmate);
    assert_eq!(phrase.tokens.len(), 4);
    assert!(phrase.said_takes());
}

#[test]
fn only_the_last_word_is_a_marker() {
    let phrase = PhraseTokenizer::tokenize("check knight f 3");
    assert_eq!(phrase.marker, OutcomeMarker::None);
    assert_eq!(phrase.tokens[0], Token::Word("check".to_string()));
}

#[test]
fn marker_alone() {
    let phrase = PhraseTokenizer::tokenize("stalemate");
    assert_eq!(phrase.marker, OutcomeMarker::Stalemate);
    assert!(phrase.tokens.is_empty());
}

#[test]
fn punctuation_and_case() {
    let phrase = PhraseTokenizer::tokenize("Castles, Kingside!");
    assert_eq!(
        phrase.tokens,
        vec![Token::Castles, Token::Side(CastlingSide::Kingside)]
    );
}

#[test]
fn unknown_words_survive() {
    let phrase = PhraseTokenizer::tokenize("knight banana");
    assert_eq!(phrase.tokens[1], Token::Word("banana".to_string()));
    assert!(!phrase.said_takes());
}
