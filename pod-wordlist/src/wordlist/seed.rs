//! The wordlist bundled with the library.
//!
//! `share/wordlist` is compiled into the crate: one word per line, sorted,
//! mostly Perl and Unix vocabulary that ordinary English dictionaries lack.
//! [`default_seed`] parses it the first time it is asked for and hands out
//! the same immutable table afterwards.
use once_cell::sync::Lazy;

use super::Wordlist;

static BUNDLED_WORDLIST: &str = include_str!("../../share/wordlist");

static DEFAULT_SEED: Lazy<Wordlist> = Lazy::new(|| {
    let wordlist: Wordlist = bundled_words().collect();
    log::debug!("Built default seed with {} entries", wordlist.len());
    wordlist
});

/// Words of the bundled list, blank lines skipped.
pub fn bundled_words() -> impl Iterator<Item = &'static str> {
    BUNDLED_WORDLIST
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
}

/// The shared seed table, built from the bundled list with English plurals.
///
/// Take a [`Wordlist::snapshot`] before mutating.
pub fn default_seed() -> &'static Wordlist {
    &DEFAULT_SEED
}
