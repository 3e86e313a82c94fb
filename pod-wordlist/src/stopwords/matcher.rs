//! Deciding how much of an extracted word survives the wordlist.
use itertools::Itertools;

use crate::constants::HYPHEN;
use crate::wordlist::Wordlist;

/// What remains of a word after matching it against a wordlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The word is known and is dropped entirely.
    Dropped,
    /// Some parts of a hyphenated compound were known; the rest, rejoined with hyphens.
    Partial(String),
    /// The word is unknown and passes through unchanged.
    Kept(&'a str),
}

impl Resolution<'_> {
    /// The text to hand to the spell-checker; empty when dropped.
    pub fn remainder(&self) -> &str {
        match self {
            Resolution::Dropped => "",
            Resolution::Partial(rest) => rest.as_str(),
            Resolution::Kept(word) => *word,
        }
    }
}

/// Matches `word` against `wordlist`.
///
/// An exact (or lowercase) hit drops the word. Otherwise a hyphenated word is
/// split and only its unknown parts are kept, and a word ending in periods is
/// dropped when the word without them is known.
pub fn resolve<'a>(wordlist: &Wordlist, word: &'a str) -> Resolution<'a> {
    if wordlist.contains(word) {
        return Resolution::Dropped;
    }

    if word.contains(HYPHEN) {
        return resolve_compound(wordlist, word);
    }

    let stripped = word.trim_end_matches('.');
    if stripped.len() != word.len() && !stripped.is_empty() && wordlist.contains(stripped) {
        return Resolution::Dropped;
    }

    Resolution::Kept(word)
}

fn resolve_compound<'a>(wordlist: &Wordlist, word: &'a str) -> Resolution<'a> {
    let rest = word
        .split(HYPHEN)
        .filter(|part| part.is_empty() || !wordlist.contains(part))
        .join("-");

    if rest.is_empty() {
        Resolution::Dropped
    } else if rest == word {
        Resolution::Kept(word)
    } else {
        Resolution::Partial(rest)
    }
}
