//! chesstalk CLI entry point.

use chesstalk_debug::{Tracer, TracerConfig};
use chesstalk_runtime::{Repl, Session, SessionConfig};
use std::env;
use std::io::{self, BufRead};
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
#[allow(clippy::struct_excessive_bools)]
struct CliConfig {
    phrases: Vec<String>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    strict: bool,
    fen: Option<String>,
    no_normalize: bool,
    // Debug flags
    trace: bool,
    json: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--strict" => config.strict = true,
            "--no-normalize" => config.no_normalize = true,
            "--trace" => config.trace = true,
            "--json" => config.json = true,
            "--fen" => {
                let fen = args.next().ok_or("--fen requires a value")?;
                config.fen = Some(fen);
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("unknown option: {flag}").into());
            }
            phrase => config.phrases.push(phrase.to_string()),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("chesstalk {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut session = Session::with_config(session_config(&config))?;
    if config.trace {
        let mut tracer_config = TracerConfig::new().enabled().to_stderr();
        if config.json {
            tracer_config = tracer_config.json();
        }
        session = session.with_tracer(Tracer::new(tracer_config));
    }

    if config.batch_mode {
        if config.phrases.is_empty() {
            for line in io::stdin().lock().lines() {
                let line = line?;
                if !line.trim().is_empty() {
                    play(&mut session, line.trim())?;
                }
            }
        } else {
            for phrase in &config.phrases {
                play(&mut session, phrase)?;
            }
        }
        return Ok(());
    }

    for phrase in &config.phrases {
        play(&mut session, phrase)?;
    }

    // Phrases given on the command line set the position; skip the banner
    let mut repl = Repl::new()?.with_session(session);
    if !config.phrases.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn session_config(config: &CliConfig) -> SessionConfig {
    let mut session = SessionConfig::new();
    if config.strict {
        session = session.strict();
    }
    if config.no_normalize {
        session = session.without_normalization();
    }
    if let Some(fen) = &config.fen {
        session = session.with_start_fen(fen.clone());
    }
    session
}

/// Resolves one phrase, printing its notation and any warnings.
fn play(session: &mut Session, phrase: &str) -> chesstalk_foundation::Result<()> {
    for played in session.submit(phrase)? {
        println!("{}", played.notation);
        for warning in played.warnings {
            eprintln!("\x1b[33mWarning: {warning}\x1b[0m");
        }
    }
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mchesstalk\x1b[0m - Spoken chess phrases to standard notation

\x1b[1mUSAGE:\x1b[0m
    chesstalk [OPTIONS] [PHRASE...]

\x1b[1mARGUMENTS:\x1b[0m
    [PHRASE...]   Phrases to play before starting the REPL (quote each one)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -b, --batch        Play the phrases (or stdin lines), print notation, and exit
    --strict           Treat outcome warnings as errors
    --fen FEN          Start from a FEN position
    --no-normalize     Do not rewrite speech-to-text mistakes

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --trace            Print resolution traces to stderr
    --json             Print traces as JSON

\x1b[1mEXAMPLES:\x1b[0m
    chesstalk                                   Start interactive REPL
    chesstalk -b \"e four\" \"e five\" \"night f three\"
    chesstalk --fen \"4k3/8/8/8/8/8/4K3/R6R w - - 0 1\" -b \"rook a d one\"
    echo \"castles kingside\" | chesstalk -b --trace

\x1b[1mREPL COMMANDS:\x1b[0m
    board, flip, moves   Show the position and history
    pop, undo, reset     Take moves back
    trace on|live|off|show   Control resolution tracing
    save PATH, load PATH Save or load the game
    stop, quit, exit     End the session
    Ctrl+D               Exit REPL
    Ctrl+C               Cancel current input"
    );
}
