//! The phrase vocabulary.
//!
//! Maps spoken words onto typed tokens. Anything the vocabulary does not
//! know survives as [`Token::Word`] so diagnostics can echo it back.

use std::fmt;

use chesstalk_foundation::{CastlingSide, File, PieceKind, Rank, Square};

/// A classified word of a phrase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A file letter.
    File(File),
    /// A rank digit.
    Rank(Rank),
    /// A piece name.
    Piece(PieceKind),
    /// "takes" and its synonyms.
    Takes,
    /// "castles".
    Castles,
    /// "kingside" or "queenside".
    Side(CastlingSide),
    /// "equals", introducing a promotion piece.
    Equals,
    /// Any other word.
    Word(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(file) => write!(f, "{file}"),
            Self::Rank(rank) => write!(f, "{rank}"),
            Self::Piece(piece) => write!(f, "{piece}"),
            Self::Takes => f.write_str("takes"),
            Self::Castles => f.write_str("castles"),
            Self::Side(side) => write!(f, "{side}"),
            Self::Equals => f.write_str("equals"),
            Self::Word(word) => f.write_str(word),
        }
    }
}

/// Words that mean "takes".
pub const TAKES_WORDS: &[&str] = &["takes", "captures", "x"];

/// Words that mean "castles".
pub const CASTLES_WORDS: &[&str] = &["castles", "castle"];

/// Words that introduce a promotion piece.
pub const EQUALS_WORDS: &[&str] = &["equals", "promote", "promotes", "="];

/// Words that end a phrase with an outcome assertion.
pub const MARKER_WORDS: &[&str] = &["check", "checkmate", "stalemate"];

/// Classifies one lowercase word into one or more tokens.
///
/// Compact squares such as `e4` become a file and a rank; compact
/// coordinates such as `e2e4` become two of each.
#[must_use]
pub fn classify(word: &str) -> Vec<Token> {
    if TAKES_WORDS.contains(&word) {
        return vec![Token::Takes];
    }
    if CASTLES_WORDS.contains(&word) {
        return vec![Token::Castles];
    }
    if EQUALS_WORDS.contains(&word) {
        return vec![Token::Equals];
    }
    match word {
        "kingside" => return vec![Token::Side(CastlingSide::Kingside)],
        "queenside" => return vec![Token::Side(CastlingSide::Queenside)],
        _ => {}
    }
    if let Some(piece) = PieceKind::from_name(word) {
        return vec![Token::Piece(piece)];
    }

    let mut chars = word.chars();
    match (chars.next(), chars.next(), word.len()) {
        (Some(c), None, _) => {
            if let Some(file) = File::from_char(c) {
                return vec![Token::File(file)];
            }
            if let Some(rank) = Rank::from_char(c) {
                return vec![Token::Rank(rank)];
            }
        }
        (Some(_), Some(_), 2) => {
            if let Some(sq) = Square::parse(word) {
                return vec![Token::File(sq.file), Token::Rank(sq.rank)];
            }
        }
        (Some(_), Some(_), 4) => {
            if let (Some(from), Some(to)) = (
                word.get(..2).and_then(Square::parse),
                word.get(2..).and_then(Square::parse),
            ) {
                return vec![
                    Token::File(from.file),
                    Token::Rank(from.rank),
                    Token::File(to.file),
                    Token::Rank(to.rank),
                ];
            }
        }
        _ => {}
    }

    vec![Token::Word(word.to_string())]
}

/// Words offered for completion in interactive front ends.
#[must_use]
pub fn completion_words() -> Vec<&'static str> {
    let mut words: Vec<&'static str> = PieceKind::ALL.iter().map(|p| p.name()).collect();
    words.extend(["takes", "castles", "kingside", "queenside", "equals"]);
    words.extend(MARKER_WORDS);
    words
}
