//! Thematic keyword detection.
//!
//! A word belongs to a theme when it contains one of the theme's keywords as a
//! substring, so `collectiv` matches both `collective` and `collectivism`.
//! This is deliberately cruder than stemming.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::lexicon::{Lexicon, Theme};
use crate::round_to;
use crate::tokenize::tokenize_words;

const ELLIPSIS: &str = "...";

/// Bounds on how many example sentences are collected per theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleLimits {
    /// Only this many leading sentences are searched for examples.
    pub sentences_scanned: usize,
    pub examples_per_theme: usize,
    /// Example text longer than this many characters is cut and gets `...`.
    pub sentence_chars: usize,
}

impl Default for ExampleLimits {
    fn default() -> Self {
        ExampleLimits {
            sentences_scanned: 200,
            examples_per_theme: 5,
            sentence_chars: 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeExample {
    pub keyword: String,
    pub sentence: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeResult {
    pub count: usize,
    /// Matches per 1000 words.
    pub density: f64,
    pub examples: Vec<ThemeExample>,
}

///Detects every lexicon theme in `text`, using `sentences` for examples.
pub fn detect_themes(
    text: &str,
    sentences: &[String],
    lexicon: &Lexicon,
) -> BTreeMap<String, ThemeResult> {
    detect_themes_with(
        &tokenize_words(text),
        sentences,
        lexicon,
        &ExampleLimits::default(),
    )
}

pub fn detect_themes_with<S: AsRef<str>>(
    words: &[S],
    sentences: &[String],
    lexicon: &Lexicon,
    limits: &ExampleLimits,
) -> BTreeMap<String, ThemeResult> {
    lexicon
        .themes()
        .iter()
        .map(|theme| {
            let count = count_theme_words(words, theme);
            let result = ThemeResult {
                count,
                density: density(count, words.len()),
                examples: collect_examples(sentences, theme, limits),
            };
            (theme.name.clone(), result)
        })
        .collect()
}

///Number of words containing at least one of the theme's keywords.
pub fn count_theme_words<S: AsRef<str>>(words: &[S], theme: &Theme) -> usize {
    words.iter().filter(|w| theme.matches(w.as_ref())).count()
}

///Occurrences per 1000 words, rounded to two places. Zero for an empty text.
pub fn density(count: usize, total_words: usize) -> f64 {
    if total_words == 0 {
        return 0.0;
    }
    round_to(count as f64 / total_words as f64 * 1000.0, 2)
}

fn collect_examples(sentences: &[String], theme: &Theme, limits: &ExampleLimits) -> Vec<ThemeExample> {
    sentences
        .iter()
        .take(limits.sentences_scanned)
        .filter_map(|sentence| {
            theme
                .first_match(&sentence.to_lowercase())
                .map(|keyword| ThemeExample {
                    keyword: keyword.to_string(),
                    sentence: truncate_chars(sentence, limits.sentence_chars),
                })
        })
        .take(limits.examples_per_theme)
        .collect()
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}{}", &s[..cut], ELLIPSIS),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize_sentences;

    fn lexicon() -> Lexicon {
        Lexicon::default()
    }

    #[test]
    fn substring_matching_counts_each_word_once() {
        let theme = Theme::new("socialism", ["collective", "collectiv"]);
        let words = tokenize_words("collective collectivism college collectives");
        // "collective" matches both keywords but is counted once
        assert_eq!(count_theme_words(&words, &theme), 3);
    }

    #[test]
    fn density_per_thousand_words() {
        let mut words = vec!["state"; 5];
        words.extend(std::iter::repeat_n("river", 995));
        let themes = detect_themes_with(&words, &[], &lexicon(), &ExampleLimits::default());
        assert_eq!(themes["state"].count, 5);
        assert_eq!(themes["state"].density, 5.0);
        assert_eq!(themes["utopia"].density, 0.0);
    }

    #[test]
    fn density_ties_round_to_even() {
        // 1 in 8000 words is exactly 0.125 per thousand
        assert_eq!(density(1, 8000), 0.12);
        assert_eq!(density(3, 8000), 0.38);
    }

    #[test]
    fn empty_text_has_zero_density() {
        let themes = detect_themes("", &[], &lexicon());
        assert_eq!(themes.len(), 3);
        for result in themes.values() {
            assert_eq!(result.count, 0);
            assert_eq!(result.density, 0.0);
            assert!(result.examples.is_empty());
        }
    }

    #[test]
    fn examples_record_first_keyword_in_list_order() {
        let text = "The Government made a new Law.";
        let sentences = tokenize_sentences(text);
        let themes = detect_themes(text, &sentences, &lexicon());
        // "govern" also matches but "government" comes first in the list
        assert_eq!(
            themes["state"].examples,
            vec![ThemeExample {
                keyword: "government".into(),
                sentence: "The Government made a new Law".into(),
            }]
        );
    }

    #[test]
    fn results_are_keyed_by_theme_name_in_sorted_order() {
        let themes = detect_themes("", &[], &lexicon());
        let names: Vec<&str> = themes.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["socialism", "state", "utopia"]);
    }

    #[test]
    fn examples_are_capped() {
        let text = "The state. ".repeat(10);
        let sentences = tokenize_sentences(&text);
        let themes = detect_themes(&text, &sentences, &lexicon());
        assert_eq!(themes["state"].count, 10);
        assert_eq!(themes["state"].examples.len(), 5);
    }

    #[test]
    fn only_leading_sentences_are_scanned() {
        let mut sentences = vec!["Nothing here".to_string(); 200];
        sentences.push("The state".to_string());
        let limits = ExampleLimits::default();
        let themes = detect_themes_with(&["state"], &sentences, &lexicon(), &limits);
        assert_eq!(themes["state"].count, 1);
        assert!(themes["state"].examples.is_empty());
    }

    #[test]
    fn long_example_sentences_are_truncated() {
        let long = format!("The state {}", "é".repeat(300));
        let themes = detect_themes_with(
            &["state"],
            std::slice::from_ref(&long),
            &lexicon(),
            &ExampleLimits::default(),
        );
        let example = &themes["state"].examples[0].sentence;
        assert_eq!(example.chars().count(), 203);
        assert!(example.ends_with("é..."));

        assert_eq!(truncate_chars("short", 200), "short");
        assert_eq!(truncate_chars("abcdef", 6), "abcdef");
        assert_eq!(truncate_chars("abcdefg", 6), "abcdef...");
    }
}
