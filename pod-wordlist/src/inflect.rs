//! Pluralization of English nouns.
//!
//! Every word entering a [`Wordlist`](crate::wordlist::Wordlist) is stored
//! alongside its plural, so the store needs a way to produce one. That is
//! what [`Pluralize`] provides. [`EnglishPlural`] handles the regular
//! suffix rules and a short table of irregular and uninflected nouns, which
//! is enough for the technical vocabulary found in documentation. Anything
//! implementing `Fn(&str) -> SmolStr` is also a pluralizer, which keeps tests
//! free of the English rules.
use smol_str::SmolStr;

use crate::tokenizer::case_handling::{lower_case, upper_first};

/// Turns a singular word into its plural form.
pub trait Pluralize {
    /// Returns the plural of `word`.
    fn plural(&self, word: &str) -> SmolStr;
}

impl<F> Pluralize for F
where
    F: Fn(&str) -> SmolStr,
{
    #[inline]
    fn plural(&self, word: &str) -> SmolStr {
        self(word)
    }
}

/// Rule-based English pluralizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishPlural;

static UNINFLECTED: &[&str] = &[
    "aircraft", "deer", "fish", "hardware", "information", "metadata", "moose", "news", "series",
    "sheep", "software", "species", "swine",
];

static IRREGULAR: &[(&str, &str)] = &[
    ("analysis", "analyses"),
    ("axis", "axes"),
    ("basis", "bases"),
    ("calf", "calves"),
    ("child", "children"),
    ("crisis", "crises"),
    ("criterion", "criteria"),
    ("elf", "elves"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("half", "halves"),
    ("knife", "knives"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("loaf", "loaves"),
    ("louse", "lice"),
    ("man", "men"),
    ("matrix", "matrices"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("person", "people"),
    ("phenomenon", "phenomena"),
    ("self", "selves"),
    ("shelf", "shelves"),
    ("thesis", "theses"),
    ("thief", "thieves"),
    ("tooth", "teeth"),
    ("vertex", "vertices"),
    ("wife", "wives"),
    ("wolf", "wolves"),
    ("woman", "women"),
];

static O_TAKES_ES: &[&str] = &["echo", "hero", "potato", "tomato", "torpedo", "veto"];

#[inline(always)]
fn is_vowel(ch: char) -> bool {
    matches!(ch.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Applies the capitalisation of the first letter of `original` to `plural`.
fn match_case(original: &str, plural: &str) -> SmolStr {
    match original.chars().next() {
        Some(ch) if ch.is_uppercase() => upper_first(plural),
        _ => SmolStr::new(plural),
    }
}

impl Pluralize for EnglishPlural {
    fn plural(&self, word: &str) -> SmolStr {
        let last = match word.chars().last() {
            Some(ch) if ch.is_alphabetic() => ch,
            _ => return SmolStr::new(word),
        };

        let lower = lower_case(word);

        if UNINFLECTED.contains(&lower.as_str()) {
            return SmolStr::new(word);
        }

        if let Some((_, plural)) = IRREGULAR
            .iter()
            .find(|(singular, _)| *singular == lower.as_str())
        {
            return match_case(word, plural);
        }

        if ["s", "x", "z", "ch", "sh"]
            .iter()
            .any(|suffix| lower.ends_with(suffix))
        {
            return SmolStr::from(format!("{}es", word));
        }

        let stem = &word[..word.len() - last.len_utf8()];
        let before_last = stem.chars().last();

        match (last.to_ascii_lowercase(), before_last) {
            ('y', Some(prev)) if prev.is_alphabetic() && !is_vowel(prev) => {
                SmolStr::from(format!("{}ies", stem))
            }
            ('o', _) if O_TAKES_ES.contains(&lower.as_str()) => {
                SmolStr::from(format!("{}es", word))
            }
            _ => SmolStr::from(format!("{}s", word)),
        }
    }
}
