//! Syntax highlighting for the REPL.

use std::borrow::Cow;

use chesstalk_grammar::Token;
use chesstalk_grammar::vocabulary::{self, MARKER_WORDS};

use crate::repl::COMMAND_WORDS;

const RESET: &str = "\x1b[0m";

/// Highlighter for spoken phrases and REPL commands.
pub struct PhraseHighlighter {}

impl PhraseHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim().is_empty() {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut first = true;
        let mut rest = line;

        while !rest.is_empty() {
            let space_len = rest.len() - rest.trim_start().len();
            result.push_str(&rest[..space_len]);
            rest = &rest[space_len..];

            let word_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
            if word_len == 0 {
                break;
            }
            let word = &rest[..word_len];
            rest = &rest[word_len..];

            let color = Self::word_color(word, first);
            first = false;
            if color.is_empty() {
                result.push_str(word);
            } else {
                result.push_str(color);
                result.push_str(word);
                result.push_str(RESET);
            }
        }

        Cow::Owned(result)
    }

    fn word_color(word: &str, first: bool) -> &'static str {
        let lower = word.to_lowercase();

        if first && COMMAND_WORDS.contains(&lower.as_str()) {
            return "\x1b[1m"; // bold
        }
        if MARKER_WORDS.contains(&lower.as_str()) || lower == "mate" {
            return "\x1b[33m"; // yellow
        }

        match vocabulary::classify(&lower).first() {
            Some(Token::Piece(_)) => "\x1b[32m", // green
            Some(Token::File(_) | Token::Rank(_)) => "\x1b[35m", // magenta
            Some(Token::Takes) => "\x1b[31m", // red
            Some(Token::Castles | Token::Side(_)) => "\x1b[36m", // cyan
            Some(Token::Equals) => "\x1b[34m", // blue
            Some(Token::Word(_)) | None => "",
        }
    }
}

impl Default for PhraseHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
