//! The main REPL implementation.

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;
use chesstalk_debug::TraceOutput;
use chesstalk_foundation::{Error, ErrorKind, Result};
use std::io::{self, Write};

/// Words that end the session.
pub const SENTINELS: &[&str] = &["stop", "done", "exit", "quit", "break"];

/// Every word that starts a REPL command, sentinels included.
pub const COMMAND_WORDS: &[&str] = &[
    "stop", "done", "exit", "quit", "break", "reset", "flip", "pop", "undo", "board", "moves",
    "trace", "save", "load", "help",
];

// =============================================================================
// Commands
// =============================================================================

/// A REPL command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// End the session.
    Exit,
    /// Return to the starting position.
    Reset,
    /// Draw the board from the other side.
    Flip,
    /// Take back the last move.
    Undo,
    /// Draw the board.
    Board,
    /// List the moves played.
    Moves,
    /// Turn tracing on.
    TraceOn,
    /// Turn tracing on and print each event as it happens.
    TraceLive,
    /// Turn tracing off.
    TraceOff,
    /// Show the trace of the last phrase.
    TraceShow,
    /// Save the game to a file.
    Save(String),
    /// Load a game from a file.
    Load(String),
    /// Show the command summary.
    Help,
}

impl Command {
    /// Parses a line as a command.
    ///
    /// Returns `Ok(None)` when the line is not a command, so it can be
    /// resolved as a phrase.
    ///
    /// # Errors
    ///
    /// Returns an error when a command word has missing or unknown arguments.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let head = head.to_lowercase();
        let rest: Vec<&str> = words.collect();

        if SENTINELS.contains(&head.as_str()) && rest.is_empty() {
            return Ok(Some(Self::Exit));
        }

        let command = match (head.as_str(), rest.as_slice()) {
            ("reset", []) => Self::Reset,
            ("flip", []) => Self::Flip,
            ("pop" | "undo", []) => Self::Undo,
            ("board", []) => Self::Board,
            ("moves", []) => Self::Moves,
            ("help", []) => Self::Help,
            ("trace", ["on"]) => Self::TraceOn,
            ("trace", ["live"]) => Self::TraceLive,
            ("trace", ["off"]) => Self::TraceOff,
            ("trace", ["show"] | []) => Self::TraceShow,
            ("trace", _) => return Err(usage("trace on|live|off|show")),
            ("save", [path]) => Self::Save((*path).to_string()),
            ("load", [path]) => Self::Load((*path).to_string()),
            ("save", _) => return Err(usage("save <path>")),
            ("load", _) => return Err(usage("load <path>")),
            _ => return Ok(None),
        };
        Ok(Some(command))
    }
}

fn usage(text: &str) -> Error {
    Error::new(ErrorKind::Internal(format!("usage: {text}")))
}

/// What the REPL should do after evaluating a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// Print these lines and read the next one.
    Output(Vec<String>),
    /// End the session.
    Exit,
}

// =============================================================================
// REPL
// =============================================================================

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (board, resolver, tracer).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: "♞> ".to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }

        self.editor.add_history(trimmed);

        match self.eval(trimmed) {
            Ok(Response::Output(lines)) => {
                for line in lines {
                    println!("{line}");
                }
                Ok(true)
            }
            Ok(Response::Exit) => Ok(false),
            Err(e) => {
                Self::print_error(&e);
                Ok(true)
            }
        }
    }

    /// Evaluates one line: a command, raw notation, or a spoken phrase.
    ///
    /// # Errors
    ///
    /// Returns an error if a command fails or the phrase does not resolve.
    pub fn eval(&mut self, input: &str) -> Result<Response> {
        if let Some(command) = Command::parse(input)? {
            return self.execute(command);
        }

        let mut lines = Vec::new();
        for played in self.session.submit(input)? {
            lines.push(format!("SAN: {}", played.notation));
            for warning in played.warnings {
                lines.push(format!("Warning: {warning}"));
            }
        }
        Ok(Response::Output(lines))
    }

    /// Executes a command against the session.
    fn execute(&mut self, command: Command) -> Result<Response> {
        let lines = match command {
            Command::Exit => return Ok(Response::Exit),
            Command::Reset => {
                self.session.reset();
                vec!["Board reset.".to_string()]
            }
            Command::Flip => {
                self.session.flip();
                vec![self.session.diagram()]
            }
            Command::Undo => match self.session.undo() {
                Some(notation) => vec![format!("Took back {notation}.")],
                None => vec!["No moves to take back.".to_string()],
            },
            Command::Board => vec![self.session.diagram()],
            Command::Moves => vec![Self::format_moves(&self.session.board().notation_history())],
            Command::TraceOn => {
                self.session.tracer_mut().enable();
                vec!["Tracing on.".to_string()]
            }
            Command::TraceLive => {
                let tracer = self.session.tracer_mut();
                tracer.enable();
                tracer.set_output(TraceOutput::Stderr);
                vec!["Tracing on, printing to stderr.".to_string()]
            }
            Command::TraceOff => {
                let tracer = self.session.tracer_mut();
                tracer.disable();
                tracer.set_output(TraceOutput::None);
                vec!["Tracing off.".to_string()]
            }
            Command::TraceShow => {
                let trace = self.session.tracer().format_last_phrase();
                if trace.is_empty() {
                    vec!["No trace recorded.".to_string()]
                } else {
                    vec![trace]
                }
            }
            Command::Save(path) => {
                self.session.save(&path)?;
                vec![format!("Saved to {path}.")]
            }
            Command::Load(path) => {
                self.session.load(&path)?;
                vec![format!("Loaded {path}."), self.session.diagram()]
            }
            Command::Help => vec![HELP.to_string()],
        };
        Ok(Response::Output(lines))
    }

    /// Formats move history as numbered pairs.
    fn format_moves(history: &[String]) -> String {
        if history.is_empty() {
            return "No moves played.".to_string();
        }
        history
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| format!("{}. {}", i + 1, pair.join(" ")))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Prints an error to stderr.
    fn print_error(error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36m");
        println!("       _                   _        _ _    ");
        println!("   ___| |__   ___  ___ ___| |_ __ _| | | __");
        println!("  / __| '_ \\ / _ \\/ __/ __| __/ _` | | |/ /");
        println!(" | (__| | | |  __/\\__ \\__ \\ || (_| | |   < ");
        println!("  \\___|_| |_|\\___||___/___/\\__\\__,_|_|_|\\_\\");
        println!("\x1b[0m");
        println!("Welcome to chesstalk v{}", env!("CARGO_PKG_VERSION"));
        println!("Say a move. Type 'help' for commands, Ctrl+D to exit.\n");

        let _ = io::stdout().flush();
    }
}

const HELP: &str = "\
Say a move, e.g. \"knight takes bishop\", \"e four\", \"castles kingside\".
Raw notation is accepted too: \"e4 e5 Nf3\" plays all three or none.

Commands:
    board              Draw the board
    flip               Draw the board from the other side
    moves              List the moves played
    pop, undo          Take back the last move
    reset              Return to the starting position
    trace on|off|show  Control resolution tracing
    trace live         Trace and print each event to stderr
    save <path>        Save the game
    load <path>        Load a saved game
    help               Show this text
    stop, done, exit, quit, break
                       End the session";
