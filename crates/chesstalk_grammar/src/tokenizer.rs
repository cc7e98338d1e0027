//! Phrase tokenization and outcome marker extraction.

use chesstalk_foundation::OutcomeMarker;

use crate::vocabulary::{self, Token};

/// A phrase split into tokens, with its trailing marker removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenizedPhrase {
    /// Tokens in spoken order, marker excluded.
    pub tokens: Vec<Token>,
    /// The outcome the phrase asserted.
    pub marker: OutcomeMarker,
}

impl TokenizedPhrase {
    /// Whether the phrase said "takes" anywhere.
    #[must_use]
    pub fn said_takes(&self) -> bool {
        self.tokens.contains(&Token::Takes)
    }
}

/// Tokenizes normalized phrases.
pub struct PhraseTokenizer;

impl PhraseTokenizer {
    /// Tokenizes a phrase.
    ///
    /// - Converts words to lowercase
    /// - Strips punctuation
    /// - Removes a trailing "check", "checkmate", or "stalemate" as the marker
    /// - Classifies the remaining words
    #[must_use]
    pub fn tokenize(input: &str) -> TokenizedPhrase {
        let cleaned: String = input
            .chars()
            .filter(|c| !matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '\''))
            .collect::<String>()
            .to_lowercase();

        let mut words: Vec<&str> = cleaned.split_whitespace().collect();
        let marker = words
            .last()
            .and_then(|w| OutcomeMarker::from_word(w))
            .unwrap_or_default();
        if marker.is_spoken() {
            words.pop();
        }

        let tokens = words.into_iter().flat_map(vocabulary::classify).collect();
        TokenizedPhrase { tokens, marker }
    }
}
