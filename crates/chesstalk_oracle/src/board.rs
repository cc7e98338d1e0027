//! A [`ChessOracle`] backed by `shakmaty`.

use std::fmt::Write;

use chesstalk_foundation::{Error, ErrorKind, File, PieceKind, Rank, Result, Side, Square};
use shakmaty::fen::Fen;
use shakmaty::san::{SanError, SanPlus};
use shakmaty::{CastlingMode, Chess, Color, Move, Position, Role};

use crate::oracle::ChessOracle;

/// A chess position with a move history that can be rolled back.
///
/// Each pushed move stores the position it was played from, so popping
/// restores the exact prior state. Boards are cheap to clone; independent
/// resolutions can each work on their own copy.
#[derive(Clone, Debug)]
pub struct Board {
    start: Chess,
    start_fen: Option<String>,
    position: Chess,
    history: Vec<(Chess, Move)>,
}

impl Board {
    /// Creates a board at the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Chess::default(),
            start_fen: None,
            position: Chess::default(),
            history: Vec::new(),
        }
    }

    /// Creates a board from a FEN string.
    ///
    /// # Errors
    ///
    /// Returns an error if the FEN is malformed or describes an illegal position.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let parsed: Fen = fen
            .trim()
            .parse()
            .map_err(|e| Error::new(ErrorKind::InvalidPosition(format!("{e}: {fen}"))))?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| Error::new(ErrorKind::InvalidPosition(format!("{e}: {fen}"))))?;
        Ok(Self {
            start: position.clone(),
            start_fen: Some(fen.trim().to_string()),
            position,
            history: Vec::new(),
        })
    }

    /// The FEN this board was set up from, or `None` for the standard start.
    #[must_use]
    pub fn start_fen(&self) -> Option<&str> {
        self.start_fen.as_deref()
    }

    /// Returns to the starting position, discarding history.
    pub fn reset(&mut self) {
        self.position = self.start.clone();
        self.history.clear();
    }

    /// Number of moves played since the start.
    #[must_use]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// The side to move.
    #[must_use]
    pub fn turn(&self) -> Side {
        match self.position.turn() {
            Color::White => Side::White,
            Color::Black => Side::Black,
        }
    }

    /// The notation of every move played so far, in order.
    #[must_use]
    pub fn notation_history(&self) -> Vec<String> {
        self.history
            .iter()
            .map(|(before, mv)| SanPlus::from_move(before.clone(), mv).to_string())
            .collect()
    }

    /// Parses notation and plays it, returning the rendered notation.
    ///
    /// # Errors
    ///
    /// Returns an error if the notation is not a legal move.
    pub fn play(&mut self, notation: &str) -> Result<String> {
        let mv = self.parse_notation(notation)?;
        let rendered = self.notation(&mv);
        self.push(&mv);
        Ok(rendered)
    }

    /// Draws the position as text, from `orientation`'s point of view.
    #[must_use]
    pub fn diagram(&self, orientation: Side) -> String {
        let board = self.position.board();
        let mut ranks: Vec<Rank> = Rank::ALL.to_vec();
        let mut files: Vec<File> = File::ALL.to_vec();
        match orientation {
            Side::White => ranks.reverse(),
            Side::Black => files.reverse(),
        }

        let mut out = String::new();
        for rank in &ranks {
            let _ = write!(out, "{rank} ");
            for file in &files {
                let sq = to_shakmaty_square(Square::new(*file, *rank));
                let c = board.piece_at(sq).map_or('.', |piece| {
                    let c = piece.role.char();
                    if piece.color == Color::White {
                        c.to_ascii_uppercase()
                    } else {
                        c
                    }
                });
                let _ = write!(out, " {c}");
            }
            out.push('\n');
        }
        out.push_str("  ");
        for file in &files {
            let _ = write!(out, " {file}");
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessOracle for Board {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        self.position.legal_moves().into_iter().collect()
    }

    fn source(&self, mv: &Move) -> Square {
        from_shakmaty_square(mv.from().unwrap_or_else(|| mv.to()))
    }

    fn destination(&self, mv: &Move) -> Square {
        match mv {
            Move::Castle { king, rook } => {
                let king = from_shakmaty_square(*king);
                let rook = from_shakmaty_square(*rook);
                let file = if rook.file > king.file { File::G } else { File::C };
                Square::new(file, king.rank)
            }
            _ => from_shakmaty_square(mv.to()),
        }
    }

    fn moving_piece(&self, mv: &Move) -> PieceKind {
        from_role(mv.role())
    }

    fn captured_piece(&self, mv: &Move) -> Option<PieceKind> {
        mv.capture().map(from_role)
    }

    fn is_castling(&self, mv: &Move) -> bool {
        mv.is_castle()
    }

    fn promotion(&self, mv: &Move) -> Option<PieceKind> {
        mv.promotion().map(from_role)
    }

    fn notation(&self, mv: &Move) -> String {
        SanPlus::from_move(self.position.clone(), mv).to_string()
    }

    fn parse_notation(&self, text: &str) -> Result<Move> {
        let san: SanPlus = text
            .parse()
            .map_err(|_| Error::illegal_notation(text))?;
        san.san.to_move(&self.position).map_err(|e| match e {
            SanError::AmbiguousSan => Error::new(ErrorKind::AmbiguousNotation {
                notation: text.to_string(),
            }),
            _ => Error::illegal_notation(text),
        })
    }

    fn push(&mut self, mv: &Move) {
        let before = self.position.clone();
        self.position.play_unchecked(mv);
        self.history.push((before, mv.clone()));
    }

    fn pop(&mut self) -> Option<Move> {
        let (before, mv) = self.history.pop()?;
        self.position = before;
        Some(mv)
    }

    fn is_check(&self) -> bool {
        self.position.is_check()
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }
}

// =============================================================================
// Conversions
// =============================================================================

fn from_role(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

fn from_shakmaty_square(sq: shakmaty::Square) -> Square {
    let file = match sq.file() {
        shakmaty::File::A => File::A,
        shakmaty::File::B => File::B,
        shakmaty::File::C => File::C,
        shakmaty::File::D => File::D,
        shakmaty::File::E => File::E,
        shakmaty::File::F => File::F,
        shakmaty::File::G => File::G,
        shakmaty::File::H => File::H,
    };
    let rank = match sq.rank() {
        shakmaty::Rank::First => Rank::First,
        shakmaty::Rank::Second => Rank::Second,
        shakmaty::Rank::Third => Rank::Third,
        shakmaty::Rank::Fourth => Rank::Fourth,
        shakmaty::Rank::Fifth => Rank::Fifth,
        shakmaty::Rank::Sixth => Rank::Sixth,
        shakmaty::Rank::Seventh => Rank::Seventh,
        shakmaty::Rank::Eighth => Rank::Eighth,
    };
    Square::new(file, rank)
}

fn to_shakmaty_square(sq: Square) -> shakmaty::Square {
    let file = match sq.file {
        File::A => shakmaty::File::A,
        File::B => shakmaty::File::B,
        File::C => shakmaty::File::C,
        File::D => shakmaty::File::D,
        File::E => shakmaty::File::E,
        File::F => shakmaty::File::F,
        File::G => shakmaty::File::G,
        File::H => shakmaty::File::H,
    };
    let rank = match sq.rank {
        Rank::First => shakmaty::Rank::First,
        Rank::Second => shakmaty::Rank::Second,
        Rank::Third => shakmaty::Rank::Third,
        Rank::Fourth => shakmaty::Rank::Fourth,
        Rank::Fifth => shakmaty::Rank::Fifth,
        Rank::Sixth => shakmaty::Rank::Sixth,
        Rank::Seventh => shakmaty::Rank::Seventh,
        Rank::Eighth => shakmaty::Rank::Eighth,
    };
    shakmaty::Square::from_coords(file, rank)
}
