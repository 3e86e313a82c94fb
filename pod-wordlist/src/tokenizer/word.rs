//! Extraction of a candidate word from a raw token.
use crate::constants::{LEADING_PUNCTUATION, TRAILING_PUNCTUATION};
use crate::tokenizer::case_handling::strip_possessive;

/// Strips edge punctuation and a possessive suffix from `token`.
///
/// The passes run in a fixed order: trailing punctuation, then a trailing
/// `'s`, then leading punctuation. Trailing periods are left alone. The result
/// borrows from `token` and may be empty, meaning there is no word to check.
///
/// ```
/// use pod_wordlist::tokenizer::extract_word;
///
/// assert_eq!(extract_word("(widget's);"), "widget");
/// assert_eq!(extract_word("Ph.D.,"), "Ph.D.");
/// assert_eq!(extract_word("\"?!"), "");
/// ```
pub fn extract_word(token: &str) -> &str {
    let word = token.trim_end_matches(TRAILING_PUNCTUATION);
    let word = strip_possessive(word);
    word.trim_start_matches(LEADING_PUNCTUATION)
}
