//! Saved game serialization and deserialization using `MessagePack`.
//!
//! A saved game is the starting position plus the notation of every move
//! played since. Loading replays the moves, so a file can never describe a
//! position the rules would not reach.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use chesstalk_foundation::{Error, ErrorKind, Result, Side};
use chesstalk_oracle::Board;
use serde::{Deserialize, Serialize};

/// A game as written to disk.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    /// FEN of the starting position, or `None` for the standard start.
    pub start_fen: Option<String>,
    /// Notation of every move played, in order.
    pub moves: Vec<String>,
    /// Which side the board is drawn from.
    pub orientation: Side,
}

impl SavedGame {
    /// Captures a board's start and history.
    #[must_use]
    pub fn from_board(board: &Board, orientation: Side) -> Self {
        Self {
            start_fen: board.start_fen().map(str::to_string),
            moves: board.notation_history(),
            orientation,
        }
    }

    /// Rebuilds the board by replaying every move from the start.
    ///
    /// # Errors
    ///
    /// Returns an error if the starting FEN is invalid or a move is illegal.
    pub fn replay(&self) -> Result<Board> {
        let mut board = match &self.start_fen {
            Some(fen) => Board::from_fen(fen)?,
            None => Board::new(),
        };
        for notation in &self.moves {
            board.play(notation)?;
        }
        Ok(board)
    }
}

/// Serializes a game to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(game: &SavedGame) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(game).map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Deserializes a game from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<SavedGame> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Saves a game to a file using `MessagePack` format.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(game: &SavedGame, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to create file '{}': {e}",
            path.display()
        )))
    })?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(game)?;

    writer.write_all(&bytes).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to write to file '{}': {e}",
            path.display()
        )))
    })?;

    writer.flush().map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to flush file '{}': {e}",
            path.display()
        )))
    })?;

    Ok(())
}

/// Loads a game from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<SavedGame> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to open file '{}': {e}",
            path.display()
        )))
    })?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();

    reader.read_to_end(&mut bytes).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to read file '{}': {e}",
            path.display()
        )))
    })?;

    from_bytes(&bytes)
}
