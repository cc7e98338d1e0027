//! Board vocabulary: files, ranks, squares, pieces, and castling sides.
//!
//! These are the closed sets a spoken phrase can name. Every token the
//! tokenizer recognizes maps onto one of these types, so the grammar works
//! with typed values rather than raw words.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// File
// =============================================================================

/// A board file, `a` through `h`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum File {
    /// The a-file.
    A,
    /// The b-file.
    B,
    /// The c-file.
    C,
    /// The d-file.
    D,
    /// The e-file.
    E,
    /// The f-file.
    F,
    /// The g-file.
    G,
    /// The h-file.
    H,
}

impl File {
    /// All files, a to h.
    pub const ALL: [Self; 8] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
    ];

    /// Parses a file letter (lowercase or uppercase).
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(Self::A),
            'b' => Some(Self::B),
            'c' => Some(Self::C),
            'd' => Some(Self::D),
            'e' => Some(Self::E),
            'f' => Some(Self::F),
            'g' => Some(Self::G),
            'h' => Some(Self::H),
            _ => None,
        }
    }

    /// Returns the file at the given zero-based index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based index (a = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The lowercase file letter.
    #[must_use]
    pub const fn char(self) -> char {
        match self {
            Self::A => 'a',
            Self::B => 'b',
            Self::C => 'c',
            Self::D => 'd',
            Self::E => 'e',
            Self::F => 'f',
            Self::G => 'g',
            Self::H => 'h',
        }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

// =============================================================================
// Rank
// =============================================================================

/// A board rank, `1` through `8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rank {
    /// The first rank.
    First,
    /// The second rank.
    Second,
    /// The third rank.
    Third,
    /// The fourth rank.
    Fourth,
    /// The fifth rank.
    Fifth,
    /// The sixth rank.
    Sixth,
    /// The seventh rank.
    Seventh,
    /// The eighth rank.
    Eighth,
}

impl Rank {
    /// All ranks, 1 to 8.
    pub const ALL: [Self; 8] = [
        Self::First,
        Self::Second,
        Self::Third,
        Self::Fourth,
        Self::Fifth,
        Self::Sixth,
        Self::Seventh,
        Self::Eighth,
    ];

    /// Parses a rank digit.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let digit = c.to_digit(10)?;
        let index = usize::try_from(digit).ok()?.checked_sub(1)?;
        Self::from_index(index)
    }

    /// Returns the rank at the given zero-based index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based index (rank 1 = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The rank digit.
    #[must_use]
    pub const fn char(self) -> char {
        match self {
            Self::First => '1',
            Self::Second => '2',
            Self::Third => '3',
            Self::Fourth => '4',
            Self::Fifth => '5',
            Self::Sixth => '6',
            Self::Seventh => '7',
            Self::Eighth => '8',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

// =============================================================================
// Square
// =============================================================================

/// A board square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    /// The square's file.
    pub file: File,
    /// The square's rank.
    pub rank: Rank,
}

impl Square {
    /// Creates a square from its coordinates.
    #[must_use]
    pub const fn new(file: File, rank: Rank) -> Self {
        Self { file, rank }
    }

    /// Parses a square name such as `e4`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        let file = File::from_char(chars.next()?)?;
        let rank = Rank::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Self::new(file, rank))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

// =============================================================================
// Pieces
// =============================================================================

/// The kind of a chess piece, independent of colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    /// Pawn.
    Pawn,
    /// Knight.
    Knight,
    /// Bishop.
    Bishop,
    /// Rook.
    Rook,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl PieceKind {
    /// All piece kinds.
    pub const ALL: [Self; 6] = [
        Self::Pawn,
        Self::Knight,
        Self::Bishop,
        Self::Rook,
        Self::Queen,
        Self::King,
    ];

    /// Looks up a piece by its spoken name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pawn" => Some(Self::Pawn),
            "knight" => Some(Self::Knight),
            "bishop" => Some(Self::Bishop),
            "rook" => Some(Self::Rook),
            "queen" => Some(Self::Queen),
            "king" => Some(Self::King),
            _ => None,
        }
    }

    /// The spoken name of this piece.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pawn => "pawn",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Rook => "rook",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }

    /// The uppercase notation letter, or `None` for a pawn.
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Pawn => None,
            Self::Knight => Some('N'),
            Self::Bishop => Some('B'),
            Self::Rook => Some('R'),
            Self::Queen => Some('Q'),
            Self::King => Some('K'),
        }
    }

    /// Whether a pawn may promote to this piece.
    #[must_use]
    pub const fn is_promotable(self) -> bool {
        matches!(self, Self::Knight | Self::Bishop | Self::Rook | Self::Queen)
    }

    /// Whether this piece can be captured (every piece but the king).
    #[must_use]
    pub const fn is_capturable(self) -> bool {
        !matches!(self, Self::King)
    }

    /// Whether this piece can itself deliver check (every piece but the king).
    #[must_use]
    pub const fn can_give_check(self) -> bool {
        !matches!(self, Self::King)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which wing the king castles toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastlingSide {
    /// Short castling, `O-O`.
    Kingside,
    /// Long castling, `O-O-O`.
    Queenside,
}

impl CastlingSide {
    /// The spoken name of the side.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kingside => "kingside",
            Self::Queenside => "queenside",
        }
    }

    /// The notation for castling toward this side.
    #[must_use]
    pub const fn notation(self) -> &'static str {
        match self {
            Self::Kingside => "O-O",
            Self::Queenside => "O-O-O",
        }
    }

    /// Whether a rendered notation string castles toward this side.
    #[must_use]
    pub fn matches_notation(self, notation: &str) -> bool {
        match self {
            Self::Kingside => notation.starts_with("O-O") && !notation.contains("O-O-O"),
            Self::Queenside => notation.starts_with("O-O-O"),
        }
    }
}

impl fmt::Display for CastlingSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A player colour, also used as the board orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    /// White, drawn at the bottom by default.
    #[default]
    White,
    /// Black.
    Black,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::White => f.write_str("white"),
            Self::Black => f.write_str("black"),
        }
    }
}
