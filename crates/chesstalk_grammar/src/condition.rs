//! The condition library.
//!
//! A condition is a predicate over one candidate move. Conditions are plain
//! values: the oracle and the move are passed in explicitly when a condition
//! is evaluated, so nothing captures shared board state.

use std::fmt;

use chesstalk_foundation::{CastlingSide, File, OutcomeMarker, PieceKind, Rank, Square};
use chesstalk_oracle::ChessOracle;

/// A predicate over a legal move in the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    /// The move captures something.
    IsCapture,
    /// The moving piece is of this kind.
    SourcePiece(PieceKind),
    /// The captured piece is of this kind.
    CapturedPiece(PieceKind),
    /// The move starts on this square.
    SourceSquare(Square),
    /// The move lands on this square.
    DestinationSquare(Square),
    /// The move starts on this file.
    SourceFile(File),
    /// The move starts on this rank.
    SourceRank(Rank),
    /// The move lands on this file.
    DestinationFile(File),
    /// The move castles.
    IsCastling,
    /// The move's notation castles toward this side.
    CastlesToward(CastlingSide),
    /// The move promotes to this piece.
    PromotesTo(PieceKind),
    /// The move gives check.
    GivesCheck,
    /// The move gives checkmate.
    GivesCheckmate,
    /// The move gives stalemate.
    GivesStalemate,
}

impl Condition {
    /// Evaluates the condition for `mv`.
    ///
    /// Outcome conditions tentatively apply the move; the oracle is back in
    /// its prior state when this returns.
    pub fn holds<O: ChessOracle>(&self, oracle: &mut O, mv: &O::Move) -> bool {
        match *self {
            Self::IsCapture => oracle.is_capture(mv),
            Self::SourcePiece(piece) => oracle.moving_piece(mv) == piece,
            Self::CapturedPiece(piece) => oracle.captured_piece(mv) == Some(piece),
            Self::SourceSquare(sq) => oracle.source(mv) == sq,
            Self::DestinationSquare(sq) => oracle.destination(mv) == sq,
            Self::SourceFile(file) => oracle.source(mv).file == file,
            Self::SourceRank(rank) => oracle.source(mv).rank == rank,
            Self::DestinationFile(file) => oracle.destination(mv).file == file,
            Self::IsCastling => oracle.is_castling(mv),
            Self::CastlesToward(side) => side.matches_notation(&oracle.notation(mv)),
            Self::PromotesTo(piece) => oracle.promotion(mv) == Some(piece),
            Self::GivesCheck => oracle.tentatively(mv, |after| after.is_check()),
            Self::GivesCheckmate => oracle.tentatively(mv, |after| after.is_checkmate()),
            Self::GivesStalemate => oracle.tentatively(mv, |after| after.is_stalemate()),
        }
    }

    /// Whether evaluating this condition applies the move.
    #[must_use]
    pub fn is_outcome(&self) -> bool {
        matches!(
            self,
            Self::GivesCheck | Self::GivesCheckmate | Self::GivesStalemate
        )
    }

    /// The outcome condition a spoken marker asserts.
    #[must_use]
    pub fn for_marker(marker: OutcomeMarker) -> Option<Self> {
        match marker {
            OutcomeMarker::None => None,
            OutcomeMarker::Check => Some(Self::GivesCheck),
            OutcomeMarker::Checkmate => Some(Self::GivesCheckmate),
            OutcomeMarker::Stalemate => Some(Self::GivesStalemate),
        }
    }

    /// The tie-breakers derived from a marker.
    #[must_use]
    pub fn tie_breakers(marker: OutcomeMarker) -> Vec<Self> {
        Self::for_marker(marker).into_iter().collect()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IsCapture => f.write_str("is-capture"),
            Self::SourcePiece(p) => write!(f, "source-piece={p}"),
            Self::CapturedPiece(p) => write!(f, "captured-piece={p}"),
            Self::SourceSquare(sq) => write!(f, "source-square={sq}"),
            Self::DestinationSquare(sq) => write!(f, "destination-square={sq}"),
            Self::SourceFile(file) => write!(f, "source-file={file}"),
            Self::SourceRank(rank) => write!(f, "source-rank={rank}"),
            Self::DestinationFile(file) => write!(f, "destination-file={file}"),
            Self::IsCastling => f.write_str("is-castling"),
            Self::CastlesToward(side) => write!(f, "castles-toward={side}"),
            Self::PromotesTo(p) => write!(f, "promotes-to={p}"),
            Self::GivesCheck => f.write_str("gives-check"),
            Self::GivesCheckmate => f.write_str("gives-checkmate"),
            Self::GivesStalemate => f.write_str("gives-stalemate"),
        }
    }
}
