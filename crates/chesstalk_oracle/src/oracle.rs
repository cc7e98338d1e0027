//! The oracle contract consumed by the resolver.
//!
//! The resolver never derives chess rules itself. Everything it knows about a
//! move comes through [`ChessOracle`], and every tentative application of a
//! move goes through a [`Tentative`] guard so the position is always restored.

use std::fmt;
use std::ops::Deref;

use chesstalk_foundation::{Error, PieceKind, Result, Square};

/// Capabilities the resolver needs from a chess position.
pub trait ChessOracle {
    /// An opaque legal-move handle.
    type Move: Clone + fmt::Debug + PartialEq;

    /// Enumerates every legal move in the current position.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// The square the moving piece starts on.
    fn source(&self, mv: &Self::Move) -> Square;

    /// The square the moving piece lands on. For castling this is the
    /// king's destination.
    fn destination(&self, mv: &Self::Move) -> Square;

    /// The kind of the moving piece.
    fn moving_piece(&self, mv: &Self::Move) -> PieceKind;

    /// The kind of the captured piece, if the move captures.
    fn captured_piece(&self, mv: &Self::Move) -> Option<PieceKind>;

    /// Whether the move captures.
    fn is_capture(&self, mv: &Self::Move) -> bool {
        self.captured_piece(mv).is_some()
    }

    /// Whether the move castles.
    fn is_castling(&self, mv: &Self::Move) -> bool;

    /// The promotion piece, if the move promotes.
    fn promotion(&self, mv: &Self::Move) -> Option<PieceKind>;

    /// Renders the move in standard notation, including any check or mate
    /// suffix.
    fn notation(&self, mv: &Self::Move) -> String;

    /// Parses standard notation into a legal move.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not notation for exactly one legal move.
    fn parse_notation(&self, text: &str) -> Result<Self::Move>;

    /// Finds the legal move with the given coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if no legal move has these coordinates.
    fn parse_coordinates(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Self::Move> {
        self.legal_moves()
            .into_iter()
            .find(|mv| {
                self.source(mv) == from
                    && self.destination(mv) == to
                    && self.promotion(mv) == promotion
            })
            .ok_or_else(|| {
                let suffix = promotion
                    .and_then(PieceKind::letter)
                    .map(|c| c.to_ascii_lowercase().to_string())
                    .unwrap_or_default();
                Error::illegal_notation(format!("{from}{to}{suffix}"))
            })
    }

    /// Applies a legal move.
    fn push(&mut self, mv: &Self::Move);

    /// Undoes the most recent move, returning it.
    fn pop(&mut self) -> Option<Self::Move>;

    /// Whether the side to move is in check.
    fn is_check(&self) -> bool;

    /// Whether the side to move is checkmated.
    fn is_checkmate(&self) -> bool;

    /// Whether the side to move is stalemated.
    fn is_stalemate(&self) -> bool;

    /// Applies `mv`, runs `query` against the resulting position, and rolls
    /// the move back.
    fn tentatively<R>(&mut self, mv: &Self::Move, query: impl FnOnce(&Self) -> R) -> R
    where
        Self: Sized,
    {
        let applied = Tentative::apply(self, mv);
        query(&applied)
    }
}

/// A move applied to an oracle for the lifetime of the guard.
///
/// The guard holds the oracle's exclusive borrow and only hands out shared
/// access, so nothing else can mutate or observe the position until it is
/// dropped. Dropping pops the move on every exit path, including unwinding.
pub struct Tentative<'a, O: ChessOracle> {
    oracle: &'a mut O,
}

impl<'a, O: ChessOracle> Tentative<'a, O> {
    /// Pushes `mv` and returns the guard that will undo it.
    pub fn apply(oracle: &'a mut O, mv: &O::Move) -> Self {
        oracle.push(mv);
        Self { oracle }
    }
}

impl<O: ChessOracle> Deref for Tentative<'_, O> {
    type Target = O;

    fn deref(&self) -> &O {
        self.oracle
    }
}

impl<O: ChessOracle> Drop for Tentative<'_, O> {
    fn drop(&mut self) {
        self.oracle.pop();
    }
}
