//! Speech normalization.
//!
//! Speech-to-text engines hear "e four" as "e for" and "knight" as "night".
//! Before a phrase is tokenized, a fixed table of whole-word rewrites maps
//! the common mis-transcriptions back onto the phrase vocabulary.

use std::sync::LazyLock;

use regex::Regex;

/// Rewrites in application order. Multi-word phrases come before the single
/// words they contain ("pawn to" must be removed before "to" becomes "2"),
/// and letters are settled before "to" so that "to" ahead of a file is
/// dropped rather than read as a rank.
const REWRITES: &[(&str, &str)] = &[
    (r"\bcastle\b", "castles"),
    (r"\bkingside castles\b", "castles kingside"),
    (r"\bqueenside castles\b", "castles queenside"),
    (r"\bpromotes\b", "promote"),
    (r"\bpromote to\b", "equals"),
    (r"\bpawn to\b", ""),
    (r"\bdo you want\b", "d 1"),
    (r"\bbefore\b", "b 4"),
    (r"\bcaptures\b", "takes"),
    (r"\bmate\b", "checkmate"),
    (r"\b(?:ninety|90)\b", "knight d"),
    (r"\b9([1-8])\b", "knight d $1"),
    (r"\b(?:be|bee)\b", "b"),
    (r"\b(?:see|sea)\b", "c"),
    (r"\bat\b", "f"),
    (r"\bgee\b", "g"),
    (r"\b(?:age|each|beach)\b", "h"),
    (r"\bto ([a-h])\b", "$1"),
    (r"\b(?:one|won|wand)\b", "1"),
    (r"\b(?:two|to|too)\b", "2"),
    (r"\b(?:three|free)\b", "3"),
    (r"\b(?:four|for|fore)\b", "4"),
    (r"\bfive\b", "5"),
    (r"\b(?:six|sex)\b", "6"),
    (r"\bseven\b", "7"),
    (r"\b(?:eight|ate|hate)\b", "8"),
    (r"\bnight\b", "knight"),
    (r"\b(?:from|on)\b", ""),
];

static TABLE: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    REWRITES
        .iter()
        .map(|(pattern, replacement)| {
            (
                Regex::new(pattern).expect("rewrite patterns are valid"),
                *replacement,
            )
        })
        .collect()
});

/// Normalizes a transcribed phrase onto the phrase vocabulary.
///
/// Lowercases, applies every rewrite in order, and collapses whitespace.
#[must_use]
pub fn normalize(phrase: &str) -> String {
    let mut text = phrase.to_lowercase();
    for (pattern, replacement) in TABLE.iter() {
        if pattern.is_match(&text) {
            text = pattern.replace_all(&text, *replacement).into_owned();
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
