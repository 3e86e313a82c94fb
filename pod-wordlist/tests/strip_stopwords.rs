use std::io::Write;

use smol_str::SmolStr;

use pod_wordlist::inflect::{EnglishPlural, Pluralize};
use pod_wordlist::stopwords::{Stopwords, StopwordsConfig};
use pod_wordlist::wordlist::error::WordlistError;
use pod_wordlist::wordlist::seed::default_seed;
use pod_wordlist::wordlist::Wordlist;

fn session(words: &[&str]) -> Stopwords {
    let wordlist: Wordlist = words.iter().collect();
    Stopwords::with_wordlist(wordlist, StopwordsConfig::default())
}

#[test]
fn plural_symmetry() {
    let mut stopwords = session(&[]);

    for word in &["chroot", "dependency", "hash", "child"] {
        stopwords.learn_stopwords(word);
        assert!(stopwords.is_stopword(word));
        assert!(stopwords.is_stopword(&EnglishPlural.plural(word)));
    }

    stopwords.learn_stopwords("!dependency");
    assert!(!stopwords.is_stopword("dependencies"));
    assert!(stopwords.is_stopword("hashes"));
}

#[test]
fn negation_round_trip() {
    let mut stopwords = session(&[]);
    stopwords.learn_stopwords("foo");
    stopwords.learn_stopwords("!foo");

    assert!(!stopwords.is_stopword("foo"));
    assert!(!stopwords.is_stopword("foos"));
}

#[test]
fn possessive_normalization() {
    let mut stopwords = session(&[]);
    stopwords.learn_stopwords("widget's");

    assert!(stopwords.is_stopword("widget"));
    assert!(stopwords.is_stopword("widgets"));
    assert_eq!(stopwords.strip_stopwords("the widget's handle"), "the handle ");
}

#[test]
fn seeded_word_case_and_plural() {
    let stopwords = Stopwords::new();

    assert!(stopwords.is_stopword("chroot"));
    assert!(stopwords.is_stopword("Chroot"));
    assert!(stopwords.is_stopword("chroots"));
    assert!(!stopwords.is_stopword("jail"));
}

#[test]
fn code_and_list_sentence() {
    let stopwords = session(&["wantarray", "returns", "a", "list"]);
    assert_eq!(stopwords.strip_stopwords("wantarray() returns a list."), "");
}

#[test]
fn hyphen_compound_fully_known() {
    let stopwords = session(&["auto", "vivify", "the"]);
    assert_eq!(stopwords.strip_stopwords("auto-vivify the hash"), "hash ");
}

#[test]
fn hyphen_compound_middle_part_known() {
    // Only the known middle part goes, the neighbours are glued back together.
    let stopwords = session(&["stop"]);
    assert_eq!(stopwords.strip_stopwords("a-stop-b"), "a-b ");
}

#[test]
fn sentence_final_jargon() {
    let stopwords = session(&["sentence"]);
    assert_eq!(stopwords.strip_stopwords("end of sentence."), "end of ");
    assert_eq!(stopwords.strip_stopwords("end of story."), "end of story. ");
}

#[test]
fn sigils_are_never_output() {
    let mut stopwords = session(&[]);
    stopwords.learn_stopwords("user@example");

    let text = "user@example $scalar @array %hash C# a<b a>b ~home path/to x=1 Foo::Bar";
    assert_eq!(stopwords.strip_stopwords(text), "");
}

#[test]
fn length_cap() {
    let long = "x".repeat(51);
    let mut stopwords = session(&[]);

    assert_eq!(stopwords.strip_stopwords(&long), "");
    assert_eq!(stopwords.strip_stopwords(&long[..50]), format!("{} ", &long[..50]));

    stopwords.learn_stopwords(&long);
    assert!(stopwords.is_stopword(&long));
    assert_eq!(stopwords.strip_stopwords(&format!("{} word", long)), "word ");
}

#[test]
fn punctuation_is_stripped_from_output() {
    let stopwords = session(&[]);
    assert_eq!(
        stopwords.strip_stopwords("(\"Hello,\" she said; 'really?') Ph.D."),
        "Hello she said really Ph.D. "
    );
}

#[test]
fn no_break_space_and_soft_hyphen() {
    let stopwords = session(&["software"]);

    assert_eq!(stopwords.strip_stopwords("soft\u{ad}ware"), "");
    assert_eq!(stopwords.strip_stopwords("free\u{a0}software"), "free ");
}

#[test]
fn empty_and_blank_text() {
    let stopwords = Stopwords::new();

    assert_eq!(stopwords.strip_stopwords(""), "");
    assert_eq!(stopwords.strip_stopwords(" \n\t "), "");
    assert_eq!(stopwords.strip_stopwords("... !!! ,"), "... ");
}

#[test]
fn filtering_is_idempotent() {
    let mut stopwords = Stopwords::new();
    stopwords.learn_stopwords("frobnicate widget's !chroot auto");

    let texts = [
        "The chroot(2) call, see L<perlfunc/chroot>, frobnicates widgets.",
        "auto-vivify the hash; it's (\"really\") state-of-the-art Ph.D. work...",
        "Use CPAN's Makefile.PL with $ENV{PERL5LIB} and @INC, or perldoc -f wantarray.",
        "non\u{a0}breaking soft\u{ad}hyphen naïve café 日本語",
        "foo--auto auto- foo- -auto word} {word}",
    ];

    for text in &texts {
        let once = stopwords.strip_stopwords(text);
        let twice = stopwords.strip_stopwords(&once);
        assert_eq!(once, twice, "not a fixed point for {:?}", text);
    }
}

#[test]
fn sessions_do_not_share_mutations() {
    let before = default_seed().len();

    let handles = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let mut stopwords = Stopwords::new();
                stopwords.learn_stopwords(&format!("thread{} !chroot", i));
                (
                    stopwords.is_stopword(&format!("thread{}", i)),
                    stopwords.is_stopword("chroot"),
                )
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), (true, false));
    }

    assert_eq!(default_seed().len(), before);
    assert!(default_seed().contains("chroot"));
    assert!(Stopwords::new().is_stopword("chroot"));
}

#[test]
fn seed_from_file() -> Result<(), WordlistError> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "jail\r\n\nchroot\nchroot\n")?;

    let wordlist = Wordlist::from_path(file.path(), EnglishPlural)?;
    assert!(wordlist.contains("jails"));
    assert!(wordlist.contains("Chroot"));

    let stopwords = Stopwords::with_wordlist(wordlist, StopwordsConfig::default());
    assert_eq!(stopwords.strip_stopwords("escape the jail"), "escape the ");
    Ok(())
}

#[test]
fn seed_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing");

    match Wordlist::from_path(&path, EnglishPlural) {
        Err(WordlistError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn custom_pluralizer() {
    let mut wordlist = Wordlist::with_pluralizer(|word: &str| SmolStr::from(format!("{}en", word)));
    wordlist.add("box");

    let mut stopwords = Stopwords::with_wordlist(wordlist, StopwordsConfig::default());
    assert!(stopwords.is_stopword("boxen"));
    assert!(!stopwords.is_stopword("boxes"));

    stopwords.learn_stopwords("!box");
    assert!(!stopwords.is_stopword("boxen"));
}

fn suffix_s(word: &str) -> SmolStr {
    SmolStr::from(format!("{}s", word))
}

#[test]
fn wordlist_from_words_with_pluralizer() {
    let wordlist = Wordlist::from_words(["box", "ox"], suffix_s);

    assert!(wordlist.contains("boxs"));
    assert!(wordlist.contains("oxs"));
    assert!(!wordlist.contains("boxes"));
    assert_eq!(wordlist.len(), 4);
}

#[test]
fn wordlist_from_reader_with_pluralizer() -> Result<(), WordlistError> {
    let wordlist = Wordlist::from_reader("box\n\n ox \n".as_bytes(), suffix_s)?;

    assert!(wordlist.contains("boxs"));
    assert!(wordlist.contains("oxs"));
    assert!(!wordlist.contains("oxen"));
    Ok(())
}

#[test]
fn wordlist_from_path_with_pluralizer() -> Result<(), WordlistError> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "box\nox\n")?;

    let wordlist = Wordlist::from_path(file.path(), suffix_s)?;
    assert!(wordlist.contains("boxs"));
    assert!(!wordlist.contains("boxes"));

    let mut stopwords = Stopwords::with_wordlist(wordlist, StopwordsConfig::default());
    stopwords.learn_stopwords("!box");
    assert!(!stopwords.is_stopword("boxs"));
    assert!(stopwords.is_stopword("oxs"));
    Ok(())
}

#[test]
fn hyphen_compound_keeps_trailing_hyphen() {
    let stopwords = session(&["auto"]);

    assert_eq!(stopwords.strip_stopwords("foo-"), "foo- ");
    assert_eq!(stopwords.strip_stopwords("auto-"), "");

    let once = stopwords.strip_stopwords("foo--auto");
    assert_eq!(once, "foo- ");
    assert_eq!(stopwords.strip_stopwords(&once), once);
}

#[test]
fn closing_brace_is_trailing_punctuation() {
    let stopwords = session(&["chroot"]);

    assert_eq!(stopwords.strip_stopwords("word}"), "word ");
    assert_eq!(stopwords.strip_stopwords("chroot}"), "");
    assert_eq!(stopwords.strip_stopwords("{word}"), "");
}
