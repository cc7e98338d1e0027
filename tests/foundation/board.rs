//! Integration tests for board vocabulary types

use chesstalk_foundation::{CastlingSide, File, PieceKind, Rank, Side, Square};

// =============================================================================
// Squares
// =============================================================================

#[test]
fn square_parse_and_display() {
    let sq = Square::parse("e4").unwrap();
    assert_eq!(sq, Square::new(File::E, Rank::Fourth));
    assert_eq!(sq.to_string(), "e4");
}

#[test]
fn square_parse_rejects_garbage() {
    assert!(Square::parse("").is_none());
    assert!(Square::parse("e").is_none());
    assert!(Square::parse("i4").is_none());
    assert!(Square::parse("e9").is_none());
    assert!(Square::parse("e44").is_none());
}

#[test]
fn every_square_round_trips() {
    for file in File::ALL {
        for rank in Rank::ALL {
            let sq = Square::new(file, rank);
            assert_eq!(Square::parse(&sq.to_string()), Some(sq));
        }
    }
}

#[test]
fn file_and_rank_indices() {
    assert_eq!(File::A.index(), 0);
    assert_eq!(File::H.index(), 7);
    assert_eq!(File::from_index(4), Some(File::E));
    assert_eq!(File::from_index(8), None);
    assert_eq!(Rank::First.index(), 0);
    assert_eq!(Rank::from_index(7), Some(Rank::Eighth));
    assert_eq!(Rank::from_char('3'), Some(Rank::Third));
    assert_eq!(Rank::from_char('0'), None);
}

// =============================================================================
// Pieces
// =============================================================================

#[test]
fn piece_names_round_trip() {
    for piece in PieceKind::ALL {
        assert_eq!(PieceKind::from_name(piece.name()), Some(piece));
    }
    assert_eq!(PieceKind::from_name("night"), None);
}

#[test]
fn piece_letters() {
    assert_eq!(PieceKind::Pawn.letter(), None);
    assert_eq!(PieceKind::Knight.letter(), Some('N'));
    assert_eq!(PieceKind::King.letter(), Some('K'));
}

#[test]
fn piece_capabilities() {
    let promotable: Vec<_> = PieceKind::ALL
        .into_iter()
        .filter(|p| p.is_promotable())
        .collect();
    assert_eq!(
        promotable,
        vec![
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen
        ]
    );
    assert!(!PieceKind::King.is_capturable());
    assert!(PieceKind::Pawn.is_capturable());
    assert!(!PieceKind::King.can_give_check());
    assert!(PieceKind::Pawn.can_give_check());
}

// =============================================================================
// Castling and sides
// =============================================================================

#[test]
fn castling_notation() {
    assert_eq!(CastlingSide::Kingside.notation(), "O-O");
    assert_eq!(CastlingSide::Queenside.notation(), "O-O-O");
    assert!(CastlingSide::Kingside.matches_notation("O-O+"));
    assert!(!CastlingSide::Kingside.matches_notation("O-O-O"));
    assert!(CastlingSide::Queenside.matches_notation("O-O-O#"));
}

#[test]
fn sides_flip() {
    assert_eq!(Side::default(), Side::White);
    assert_eq!(Side::White.flipped(), Side::Black);
    assert_eq!(Side::Black.flipped().flipped(), Side::Black);
    assert_eq!(Side::Black.to_string(), "black");
}
