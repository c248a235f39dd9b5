//! Word and sentence tokenization.
//!
//! Words are maximal runs of ASCII letters after lowercasing. Everything else
//! (digits, apostrophes, accented letters) separates words, so `don't` yields
//! `don` and `t`, and `café` yields `caf`.
//!
//! Sentences are split on runs of `.`, `!` and `?`. Abbreviations, decimal
//! numbers and quoted punctuation are not special-cased, so boundaries are
//! approximate.

use std::sync::LazyLock;

use regex::Regex;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]+").expect("word pattern is valid"));

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence pattern is valid"));

///Splits text into lowercase alphabetic words, in document order.
/// # Example
/// ```
/// use distant_reading::tokenize_words;
/// let words = tokenize_words("It's 1905, Mr. Wells!");
/// assert_eq!(words, vec!["it", "s", "mr", "wells"]);
/// ```
pub fn tokenize_words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

///Splits text into trimmed, non-empty sentences, in document order.
/// # Example
/// ```
/// use distant_reading::tokenize_sentences;
/// let sentences = tokenize_sentences("Hello there!! How are you? Fine...");
/// assert_eq!(sentences, vec!["Hello there", "How are you", "Fine"]);
/// ```
pub fn tokenize_sentences(text: &str) -> Vec<String> {
    SENTENCE_END
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
