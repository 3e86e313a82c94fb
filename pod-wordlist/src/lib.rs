/*! Jargon filtering for documentation spell-checking.

Technical documentation is full of words an ordinary dictionary has never
heard of: `chroot`, `autovivify`, `CPAN`. This library strips such known
words, and anything that looks like code rather than prose, out of a block of
text so that only the words worth spell-checking are left.

The set of known words is a [`Wordlist`](wordlist::Wordlist). A bundled seed
list is built once per process and every [`Stopwords`](stopwords::Stopwords)
session works on its own copy, which documents can extend (`word`) or shrink
(`!word`) as they go. Every word is stored together with its plural.

# Usage examples

```
use pod_wordlist::stopwords::Stopwords;

let mut stopwords = Stopwords::new();
stopwords.learn_stopwords("frobnicate");

let rest = stopwords.strip_stopwords("Frobnicates the chroot via $ENV{PATH}.");
assert_eq!(rest, "the via ");
```

*/

#![warn(missing_docs)]
pub mod inflect;
pub mod stopwords;
pub mod tokenizer;
pub mod wordlist;

pub(crate) mod constants;

/// Sends `log` output to stderr, filtered by `RUST_LOG`.
#[cfg(feature = "logging")]
pub fn init_logging() {
    let _ = env_logger::try_init();
}
