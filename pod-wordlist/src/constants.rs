pub const MAX_WORD_LENGTH: usize = 50;

pub const NO_BREAK_SPACE: char = '\u{a0}';
pub const SOFT_HYPHEN: char = '\u{ad}';

/// Highest code point a Latin-1-only spell-checker can handle.
pub const LATIN1_MAX: char = '\u{ff}';

pub const POSSESSIVE_SUFFIX: &str = "'s";

pub const UNLEARN_PREFIX: char = '!';

pub const HYPHEN: char = '-';

// Never contains '.', so abbreviations like "Ph.D." keep their periods.
pub const TRAILING_PUNCTUATION: &[char] = &[')', '}', '{', ']', '\'', '"', ':', ';', ',', '?', '!'];

pub const LEADING_PUNCTUATION: &[char] = &['`', '"', '\'', '(', '['];

pub const SIGIL_START: &[char] = &['&', '%', '$', '@', ':', '<', '*', '\\', '_'];

pub const STRANGE_CHARS: &[char] = &[
    '%', '^', '&', '#', '$', '@', '_', '<', '>', '(', ')', '[', ']', '{', '}', '\\', '*', ':',
    '+', '/', '=', '|', '`', '~',
];
