use std::borrow::Cow;
use std::str::SplitWhitespace;

use crate::constants::{NO_BREAK_SPACE, SOFT_HYPHEN};

pub mod case_handling;
pub mod sigil;
pub mod word;

pub use self::sigil::is_sigil_or_strange;
pub use self::word::extract_word;

/// Splitting of prose into whitespace-delimited tokens.
pub trait Tokenize {
    /// Every run of non-whitespace characters, in order.
    fn tokens(&self) -> SplitWhitespace<'_>;

    /// The text with no-break spaces turned into spaces and soft hyphens removed.
    fn normalize_spaces(&self) -> Cow<'_, str>;
}

impl Tokenize for str {
    #[inline]
    fn tokens(&self) -> SplitWhitespace<'_> {
        self.split_whitespace()
    }

    fn normalize_spaces(&self) -> Cow<'_, str> {
        if !self.contains(|c: char| c == NO_BREAK_SPACE || c == SOFT_HYPHEN) {
            return Cow::Borrowed(self);
        }

        Cow::Owned(
            self.chars()
                .filter(|&c| c != SOFT_HYPHEN)
                .map(|c| if c == NO_BREAK_SPACE { ' ' } else { c })
                .collect(),
        )
    }
}
