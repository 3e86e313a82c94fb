use crate::constants::UNLEARN_PREFIX;
use crate::tokenizer::case_handling::strip_possessive;
use crate::tokenizer::Tokenize;
use crate::wordlist::Wordlist;

/// Applies every directive in `text` to `wordlist`, in order.
///
/// `!word` removes `word` (and its plural); any other token, with a trailing
/// `'s` stripped, is added (with its plural).
pub fn learn(wordlist: &mut Wordlist, text: &str) {
    for token in text.tokens() {
        match token.strip_prefix(UNLEARN_PREFIX) {
            Some(word) if !word.is_empty() => {
                log::trace!("Unlearning <{}>", word);
                wordlist.remove(word);
            }
            _ => {
                let word = strip_possessive(token);
                if word.is_empty() {
                    continue;
                }

                log::trace!("Learning <{}>", word);
                wordlist.add(word);
            }
        }
    }
}
