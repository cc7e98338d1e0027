//! Phrase shape matching.
//!
//! A shape is a sequence of slots. Every slot but [`Slot::Gap`] consumes
//! exactly one token; a shape holds at most one gap, which absorbs whatever
//! lies between its fixed prefix and suffix.

use chesstalk_foundation::{CastlingSide, Error, File, PieceKind, Rank, Result};

use crate::vocabulary::Token;

/// Which pieces a piece slot admits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceClass {
    /// Any piece.
    Any,
    /// Pieces that can be captured.
    Capturable,
    /// Pieces that can give check.
    Checking,
}

impl PieceClass {
    /// Whether `piece` belongs to this class.
    #[must_use]
    pub const fn admits(self, piece: PieceKind) -> bool {
        match self {
            Self::Any => true,
            Self::Capturable => piece.is_capturable(),
            Self::Checking => piece.can_give_check(),
        }
    }
}

/// One position of a shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// The word "takes".
    Takes,
    /// The word "castles".
    Castles,
    /// A specific castling side.
    Side(CastlingSide),
    /// Any file, bound.
    File,
    /// Any rank, bound.
    Rank,
    /// A piece of the given class, bound.
    Piece(PieceClass),
    /// Zero or more tokens.
    Gap,
}

/// Bindings produced by a successful shape match.
///
/// Files, ranks and pieces are bound in left-to-right order, so the n-th
/// file slot of the shape is `file(n)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Captures<'t> {
    files: Vec<File>,
    ranks: Vec<Rank>,
    pieces: Vec<PieceKind>,
    gap: &'t [Token],
    bound: Vec<&'t Token>,
}

impl<'t> Captures<'t> {
    /// The n-th bound file.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the shape bound fewer files.
    pub fn file(&self, n: usize) -> Result<File> {
        self.files
            .get(n)
            .copied()
            .ok_or_else(|| Error::internal(format!("shape binds no file #{n}")))
    }

    /// The n-th bound rank.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the shape bound fewer ranks.
    pub fn rank(&self, n: usize) -> Result<Rank> {
        self.ranks
            .get(n)
            .copied()
            .ok_or_else(|| Error::internal(format!("shape binds no rank #{n}")))
    }

    /// The n-th bound piece.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the shape bound fewer pieces.
    pub fn piece(&self, n: usize) -> Result<PieceKind> {
        self.pieces
            .get(n)
            .copied()
            .ok_or_else(|| Error::internal(format!("shape binds no piece #{n}")))
    }

    /// The tokens absorbed by the gap; empty when the shape has none.
    #[must_use]
    pub fn gap(&self) -> &'t [Token] {
        self.gap
    }

    /// Every bound file, rank and piece token, in phrase order.
    #[must_use]
    pub fn bound(&self) -> &[&'t Token] {
        &self.bound
    }

    fn bind(&mut self, slot: Slot, token: &'t Token) -> bool {
        match (slot, token) {
            (Slot::Takes, Token::Takes) | (Slot::Castles, Token::Castles) => true,
            (Slot::Side(want), Token::Side(side)) => want == *side,
            (Slot::File, Token::File(file)) => {
                self.files.push(*file);
                self.bound.push(token);
                true
            }
            (Slot::Rank, Token::Rank(rank)) => {
                self.ranks.push(*rank);
                self.bound.push(token);
                true
            }
            (Slot::Piece(class), Token::Piece(piece)) if class.admits(*piece) => {
                self.pieces.push(*piece);
                self.bound.push(token);
                true
            }
            _ => false,
        }
    }

    fn bind_all(&mut self, slots: &[Slot], tokens: &'t [Token]) -> bool {
        slots.len() == tokens.len()
            && slots
                .iter()
                .zip(tokens)
                .all(|(slot, token)| self.bind(*slot, token))
    }
}

/// Matches `tokens` against `shape`.
///
/// Returns `None` when the shape does not fit. Only the first gap in a shape
/// is treated as variable length.
#[must_use]
pub fn match_shape<'t>(shape: &[Slot], tokens: &'t [Token]) -> Option<Captures<'t>> {
    let mut captures = Captures::default();

    let Some(gap_at) = shape.iter().position(|slot| *slot == Slot::Gap) else {
        return captures.bind_all(shape, tokens).then_some(captures);
    };

    let prefix = &shape[..gap_at];
    let suffix = &shape[gap_at + 1..];
    if tokens.len() < prefix.len() + suffix.len() {
        return None;
    }
    let suffix_at = tokens.len() - suffix.len();

    if !captures.bind_all(prefix, &tokens[..prefix.len()]) {
        return None;
    }
    captures.gap = &tokens[prefix.len()..suffix_at];
    captures
        .bind_all(suffix, &tokens[suffix_at..])
        .then_some(captures)
}
