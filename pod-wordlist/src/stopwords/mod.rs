//! Filtering known jargon out of documentation text.
//!
//! A [`Stopwords`] session owns its own [`Wordlist`], usually a snapshot of
//! the bundled seed. Text handed to [`Stopwords::strip_stopwords`] comes back
//! with every known word and every piece of code-like noise removed, so that
//! only words worth spell-checking remain. [`Stopwords::learn_stopwords`]
//! grows or shrinks the session's list from `word` and `!word` directives.
use serde::{Deserialize, Serialize};

use self::matcher::Resolution;
use crate::constants::{LATIN1_MAX, MAX_WORD_LENGTH};
use crate::tokenizer::{extract_word, is_sigil_or_strange, Tokenize};
use crate::wordlist::seed::default_seed;
use crate::wordlist::Wordlist;

pub mod learn;
pub mod matcher;

/// Tunables for [`Stopwords`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default = "StopwordsConfig::default")]
pub struct StopwordsConfig {
    /// Tokens with more characters than this are skipped without inspection.
    pub max_word_length: usize,
    /// Skip tokens containing characters outside Latin-1.
    pub no_wide_chars: bool,
}

impl StopwordsConfig {
    /// The configuration used by [`Stopwords::new`].
    pub const fn default() -> StopwordsConfig {
        StopwordsConfig {
            max_word_length: MAX_WORD_LENGTH,
            no_wide_chars: false,
        }
    }
}

/// How a single whitespace-delimited token was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenClass<'a> {
    /// Longer than `max_word_length`; never looked at.
    TooLong,
    /// Contains characters outside Latin-1 while `no_wide_chars` is set.
    Wide,
    /// Nothing was left after stripping punctuation.
    Empty,
    /// The extracted word looks like code or markup.
    Sigil(&'a str),
    /// The extracted word went through the wordlist.
    Word(Resolution<'a>),
}

impl TokenClass<'_> {
    /// The text this token contributes to the filtered output, if any.
    pub fn remainder(&self) -> Option<&str> {
        match self {
            TokenClass::Word(resolution) => match resolution.remainder() {
                "" => None,
                rest => Some(rest),
            },
            _ => None,
        }
    }
}

/// A filtering session over its own wordlist.
#[derive(Debug, Clone)]
pub struct Stopwords {
    wordlist: Wordlist,
    config: StopwordsConfig,
}

impl Stopwords {
    /// A session seeded with the bundled wordlist.
    pub fn new() -> Stopwords {
        Stopwords::with_config(StopwordsConfig::default())
    }

    /// A session seeded with the bundled wordlist and custom tunables.
    pub fn with_config(config: StopwordsConfig) -> Stopwords {
        Stopwords::with_wordlist(default_seed().snapshot(), config)
    }

    /// A session over an arbitrary wordlist.
    pub fn with_wordlist(wordlist: Wordlist, config: StopwordsConfig) -> Stopwords {
        Stopwords { wordlist, config }
    }

    /// The session's tunables.
    pub fn config(&self) -> &StopwordsConfig {
        &self.config
    }

    /// The session's wordlist.
    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    /// Direct access to the session's wordlist.
    pub fn wordlist_mut(&mut self) -> &mut Wordlist {
        &mut self.wordlist
    }

    /// Whether `word` is in the session's wordlist, as given or lowercased.
    #[inline]
    pub fn is_stopword(&self, word: &str) -> bool {
        self.wordlist.contains(word)
    }

    /// Applies the `word` / `!word` directives in `text` to this session.
    pub fn learn_stopwords(&mut self, text: &str) {
        log::debug!("Learning stopwords: <{}>", text);
        learn::learn(&mut self.wordlist, text);
    }

    /// Classifies one whitespace-delimited token.
    pub fn classify<'a>(&self, token: &'a str) -> TokenClass<'a> {
        if token.chars().count() > self.config.max_word_length {
            return TokenClass::TooLong;
        }

        if self.config.no_wide_chars && token.chars().any(|c| c > LATIN1_MAX) {
            return TokenClass::Wide;
        }

        let word = extract_word(token);
        if word.is_empty() {
            return TokenClass::Empty;
        }

        if is_sigil_or_strange(word) {
            return TokenClass::Sigil(word);
        }

        TokenClass::Word(matcher::resolve(&self.wordlist, word))
    }

    /// Removes known words and code-like tokens from `text`.
    ///
    /// Every surviving word is followed by a single space.
    pub fn strip_stopwords(&self, text: &str) -> String {
        let text = text.normalize_spaces();
        log::debug!("Content: <{}>", text);

        let mut out = String::with_capacity(text.len());

        for token in text.tokens() {
            let class = self.classify(token);
            log::trace!("Token <{}>: {:?}", token, class);

            if let Some(rest) = class.remainder() {
                out.push_str(rest);
                out.push(' ');
            }
        }

        out
    }
}

impl Default for Stopwords {
    fn default() -> Self {
        Stopwords::new()
    }
}
