//! Session state for the REPL and the CLI.
//!
//! A session holds the board being played, the resolver that turns phrases
//! into moves, the tracer observing it, and the orientation the board is
//! drawn from.

use std::path::Path;

use chesstalk_debug::Tracer;
use chesstalk_foundation::{OutcomeWarning, Result, Side};
use chesstalk_grammar::{PhraseResolver, ResolverConfig, WarningPolicy};
use chesstalk_oracle::{Board, ChessOracle};

use crate::serialize::{self, SavedGame};

// =============================================================================
// Session Configuration
// =============================================================================

/// Configuration for a session.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Whether a line of raw notation moves is accepted before phrase parsing.
    pub allow_notation: bool,
    /// Whether outcome warnings become errors.
    pub strict: bool,
    /// Whether phrases are run through the speech normalizer.
    pub normalize: bool,
    /// FEN of the starting position, or `None` for the standard start.
    pub start_fen: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            allow_notation: true,
            strict: false,
            normalize: true,
            start_fen: None,
        }
    }
}

impl SessionConfig {
    /// Creates a new session configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to turn warnings into errors.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Builder method to reject raw notation input.
    #[must_use]
    pub fn without_notation(mut self) -> Self {
        self.allow_notation = false;
        self
    }

    /// Builder method to skip speech normalization.
    #[must_use]
    pub fn without_normalization(mut self) -> Self {
        self.normalize = false;
        self
    }

    /// Builder method to start from a FEN position.
    #[must_use]
    pub fn with_start_fen(mut self, fen: impl Into<String>) -> Self {
        self.start_fen = Some(fen.into());
        self
    }

    fn resolver_config(&self) -> ResolverConfig {
        let warnings = if self.strict {
            WarningPolicy::Deny
        } else {
            WarningPolicy::Collect
        };
        ResolverConfig::new()
            .with_warnings(warnings)
            .with_normalize(self.normalize)
    }
}

// =============================================================================
// Session
// =============================================================================

/// A move played on the session board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Played {
    /// The move's notation.
    pub notation: String,
    /// Outcome warnings raised while resolving it.
    pub warnings: Vec<OutcomeWarning>,
}

/// Session state for an interactive or batch session.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    board: Board,
    resolver: PhraseResolver,
    tracer: Tracer,
    orientation: Side,
}

impl Session {
    /// Creates a session at the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let config = SessionConfig::default();
        Self {
            resolver: PhraseResolver::with_config(config.resolver_config()),
            config,
            board: Board::new(),
            tracer: Tracer::disabled(),
            orientation: Side::White,
        }
    }

    /// Creates a session from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the starting FEN is invalid.
    pub fn with_config(config: SessionConfig) -> Result<Self> {
        let board = match &config.start_fen {
            Some(fen) => Board::from_fen(fen)?,
            None => Board::new(),
        };
        Ok(Self {
            resolver: PhraseResolver::with_config(config.resolver_config()),
            config,
            board,
            tracer: Tracer::disabled(),
            orientation: Side::White,
        })
    }

    /// Replaces the session tracer.
    #[must_use]
    pub fn with_tracer(mut self, tracer: Tracer) -> Self {
        self.tracer = tracer;
        self
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the current board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the tracer.
    #[must_use]
    pub const fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// Returns a mutable reference to the tracer.
    pub fn tracer_mut(&mut self) -> &mut Tracer {
        &mut self.tracer
    }

    /// Returns the side the board is drawn from.
    #[must_use]
    pub const fn orientation(&self) -> Side {
        self.orientation
    }

    /// Draws the board from the other side.
    pub fn flip(&mut self) {
        self.orientation = self.orientation.flipped();
    }

    /// Returns to the starting position.
    pub fn reset(&mut self) {
        self.board.reset();
    }

    /// Takes back the last move, returning its notation.
    pub fn undo(&mut self) -> Option<String> {
        let notation = self.board.notation_history().pop()?;
        self.board.pop()?;
        Some(notation)
    }

    /// Draws the board from the current orientation.
    #[must_use]
    pub fn diagram(&self) -> String {
        self.board.diagram(self.orientation)
    }

    /// Plays a line of input.
    ///
    /// When notation input is allowed, the line is first read as
    /// space-separated notation moves; they are played only if every one is
    /// legal in turn. Otherwise the whole line is resolved as a phrase and
    /// the resolved move is played.
    ///
    /// # Errors
    ///
    /// Returns the resolver's error when the phrase does not denote exactly
    /// one legal move. The board is unchanged on error.
    pub fn submit(&mut self, line: &str) -> Result<Vec<Played>> {
        if self.config.allow_notation {
            if let Some(played) = self.try_notation(line) {
                return Ok(played);
            }
        }
        self.resolve(line).map(|played| vec![played])
    }

    /// Resolves a phrase and plays the move.
    ///
    /// # Errors
    ///
    /// Returns the resolver's error when the phrase does not denote exactly
    /// one legal move.
    pub fn resolve(&mut self, phrase: &str) -> Result<Played> {
        let resolution =
            self.resolver
                .resolve_observed(phrase, &mut self.board, &mut self.tracer)?;
        self.board.push(&resolution.mv);
        Ok(Played {
            notation: resolution.notation,
            warnings: resolution.warnings,
        })
    }

    /// Plays every word of `line` as notation, or nothing at all.
    fn try_notation(&mut self, line: &str) -> Option<Vec<Played>> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return None;
        }

        let mut scratch = self.board.clone();
        let mut played = Vec::with_capacity(words.len());
        for word in words {
            let notation = scratch.play(word).ok()?;
            played.push(Played {
                notation,
                warnings: Vec::new(),
            });
        }
        self.board = scratch;
        Some(played)
    }

    /// Captures the game for saving.
    #[must_use]
    pub fn saved_game(&self) -> SavedGame {
        SavedGame::from_board(&self.board, self.orientation)
    }

    /// Replaces the board and orientation with a saved game.
    ///
    /// # Errors
    ///
    /// Returns an error if the saved moves cannot be replayed.
    pub fn restore(&mut self, game: &SavedGame) -> Result<()> {
        self.board = game.replay()?;
        self.orientation = game.orientation;
        Ok(())
    }

    /// Saves the game to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        serialize::save_to_file(&self.saved_game(), path)
    }

    /// Loads a game from a file, replacing the current one.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or replayed. The current
    /// game is unchanged on error.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let game = serialize::load_from_file(path)?;
        self.restore(&game)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================


// =============================================================================
// Property Tests
// =============================================================================
