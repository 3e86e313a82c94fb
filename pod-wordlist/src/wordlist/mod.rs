//! The set of words that should never be flagged.
//!
//! A [`Wordlist`] keeps every word together with its plural, so looking up
//! "chroots" succeeds once "chroot" has been added, and removing "chroot"
//! removes both again. Lookups are exact first, then lowercase, so a list
//! containing "chroot" also accepts "Chroot" at the start of a sentence.
//!
//! The library ships a seed list (see [`seed`]). It is built once per process
//! and never mutated; every filtering session works on its own
//! [`Wordlist::snapshot`].
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use hashbrown::HashSet;
use smol_str::SmolStr;

use self::error::WordlistError;
use crate::inflect::{EnglishPlural, Pluralize};
use crate::tokenizer::case_handling::lower_variant;

pub mod error;
pub mod seed;

/// A mutable set of known words, closed under pluralization.
#[derive(Clone)]
pub struct Wordlist {
    words: HashSet<SmolStr>,
    pluralizer: Arc<dyn Pluralize + Send + Sync>,
}

impl Wordlist {
    /// Creates an empty wordlist using [`EnglishPlural`].
    pub fn new() -> Wordlist {
        Wordlist::with_pluralizer(EnglishPlural)
    }

    /// Creates an empty wordlist using a custom pluralizer.
    pub fn with_pluralizer<P>(pluralizer: P) -> Wordlist
    where
        P: Pluralize + Send + Sync + 'static,
    {
        Wordlist {
            words: HashSet::new(),
            pluralizer: Arc::new(pluralizer),
        }
    }

    /// Builds a wordlist holding every word of `words` and its plural.
    pub fn from_words<I, S, P>(words: I, pluralizer: P) -> Wordlist
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        P: Pluralize + Send + Sync + 'static,
    {
        let mut wordlist = Wordlist::with_pluralizer(pluralizer);
        wordlist.extend(words);
        wordlist
    }

    /// Builds a wordlist from newline-separated words read from `reader`.
    pub fn from_reader<R, P>(reader: R, pluralizer: P) -> Result<Wordlist, WordlistError>
    where
        R: BufRead,
        P: Pluralize + Send + Sync + 'static,
    {
        let mut wordlist = Wordlist::with_pluralizer(pluralizer);
        wordlist.load(reader)?;
        Ok(wordlist)
    }

    /// Builds a wordlist from a file of newline-separated words.
    pub fn from_path<T, P>(path: T, pluralizer: P) -> Result<Wordlist, WordlistError>
    where
        T: AsRef<Path>,
        P: Pluralize + Send + Sync + 'static,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| WordlistError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("Loading wordlist from {}", path.display());
        Wordlist::from_reader(BufReader::new(file), pluralizer)
    }

    /// Adds every word of a newline-separated list, skipping blank lines.
    pub fn load<R: BufRead>(&mut self, reader: R) -> Result<(), WordlistError> {
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                self.add(word);
            }
        }

        Ok(())
    }

    /// Whether `word` is present as given or in lowercase.
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }

        match lower_variant(word) {
            Some(lower) => self.words.contains(&lower),
            None => false,
        }
    }

    /// Adds `word` and its plural.
    pub fn add(&mut self, word: &str) {
        let plural = self.pluralizer.plural(word);
        self.words.insert(SmolStr::new(word));
        self.words.insert(plural);
    }

    /// Removes `word` and its plural. Absent words are ignored.
    pub fn remove(&mut self, word: &str) {
        let plural = self.pluralizer.plural(word);
        self.words.remove(word);
        self.words.remove(&plural);
    }

    /// An independent copy; changes to either side are not seen by the other.
    pub fn snapshot(&self) -> Wordlist {
        self.clone()
    }

    /// Number of stored entries, plurals included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no words are stored.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the stored entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(SmolStr::as_str)
    }
}

impl Default for Wordlist {
    fn default() -> Self {
        Wordlist::new()
    }
}

impl fmt::Debug for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wordlist")
            .field("len", &self.words.len())
            .finish()
    }
}

impl<S: AsRef<str>> Extend<S> for Wordlist {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.add(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Wordlist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut wordlist = Wordlist::new();
        wordlist.extend(iter);
        wordlist
    }
}
