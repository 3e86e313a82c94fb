use crate::constants::{SIGIL_START, STRANGE_CHARS};

/// Whether `word` looks like code or markup rather than prose.
///
/// True when the word starts with a sigil such as `$` or `@`, or contains any
/// character that does not occur in spellable English (`::`, `/`, `=`, braces
/// and so on).
pub fn is_sigil_or_strange(word: &str) -> bool {
    match word.chars().next() {
        Some(ch) if SIGIL_START.contains(&ch) => true,
        _ => word.contains(STRANGE_CHARS),
    }
}
