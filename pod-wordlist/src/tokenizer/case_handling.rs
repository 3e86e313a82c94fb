//! Case folding and suffix helpers shared by lookups and pluralization.
use smol_str::SmolStr;

use crate::constants::POSSESSIVE_SUFFIX;

/// Lowercases every character of `s`.
#[inline(always)]
pub fn lower_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_lowercase().collect::<String>())
        .collect::<SmolStr>()
}

/// Uppercases the first character of `s`.
#[inline(always)]
pub fn upper_first(s: &str) -> SmolStr {
    let mut c = s.chars();
    match c.next() {
        None => SmolStr::new(""),
        Some(f) => SmolStr::from(f.to_uppercase().collect::<String>() + c.as_str()),
    }
}

/// The lowercase form of `word`, if it differs from `word`.
pub fn lower_variant(word: &str) -> Option<SmolStr> {
    if word.chars().any(|c| c.is_uppercase()) {
        let lower = lower_case(word);
        if lower.as_str() != word {
            return Some(lower);
        }
    }

    None
}

/// Strips one trailing `'s`, matching the `s` case-insensitively.
pub fn strip_possessive(word: &str) -> &str {
    let split = match word.len().checked_sub(POSSESSIVE_SUFFIX.len()) {
        Some(v) => v,
        None => return word,
    };

    match word.get(split..) {
        Some(suffix) if suffix.eq_ignore_ascii_case(POSSESSIVE_SUFFIX) => &word[..split],
        _ => word,
    }
}
