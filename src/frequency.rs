use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::round_to;

/// Words of this length or shorter never appear in frequency rankings.
pub const MIN_RANKED_WORD_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyRichness {
    pub total_words: usize,
    pub unique_words: usize,
    pub type_token_ratio: f64,
    pub lexical_diversity: f64,
    pub average_word_length: f64,
}

///Counts each word and returns (word, count) pairs in order of first occurrence.
/// # Example
/// ```
/// use distant_reading::count_words;
/// let words: Vec<String> = ["two", "one", "two"].iter().map(|s| s.to_string()).collect();
/// assert_eq!(
///     count_words(&words),
///     vec![("two".to_string(), 2), ("one".to_string(), 1)]
/// );
/// ```
pub fn count_words<S: AsRef<str>>(words: &[S]) -> Vec<(String, u32)> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counted: Vec<(String, u32)> = Vec::new();
    for word in words {
        let word = word.as_ref();
        match slots.get(word) {
            Some(&i) => counted[i].1 += 1,
            None => {
                slots.insert(word, counted.len());
                counted.push((word.to_string(), 1));
            }
        }
    }
    counted
}

///Sorts (word, count) pairs by descending count. The sort is stable, so equal
///counts keep their incoming order.
pub fn sort_by_count(mut counted: Vec<(String, u32)>) -> Vec<(String, u32)> {
    counted.sort_by(|a, b| b.1.cmp(&a.1));
    counted
}

///Ranks the `top_n` most frequent content words. Stop words and words of two
///letters or fewer are skipped; ties rank by first occurrence.
pub fn word_frequencies<S: AsRef<str>>(
    words: &[S],
    lexicon: &Lexicon,
    top_n: usize,
) -> Vec<WordFrequency> {
    let filtered: Vec<&str> = words
        .iter()
        .map(|w| w.as_ref())
        .filter(|w| w.len() >= MIN_RANKED_WORD_LEN && !lexicon.is_stopword(w))
        .collect();
    sort_by_count(count_words(&filtered))
        .into_iter()
        .take(top_n)
        .map(|(word, count)| WordFrequency { word, count })
        .collect()
}

pub fn vocabulary_richness<S: AsRef<str>>(words: &[S]) -> VocabularyRichness {
    let total_words = words.len();
    let unique_words = words
        .iter()
        .map(|w| w.as_ref())
        .collect::<HashSet<&str>>()
        .len();
    if total_words == 0 {
        return VocabularyRichness {
            total_words: 0,
            unique_words: 0,
            type_token_ratio: 0.0,
            lexical_diversity: 0.0,
            average_word_length: 0.0,
        };
    }

    let ttr = unique_words as f64 / total_words as f64;
    let letters: usize = words.iter().map(|w| w.as_ref().len()).sum();
    VocabularyRichness {
        total_words,
        unique_words,
        type_token_ratio: round_to(ttr, 4),
        lexical_diversity: round_to(ttr * 100.0, 2),
        average_word_length: round_to(letters as f64 / total_words as f64, 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize_words;

    #[test]
    fn test_count() {
        let words = vec!["one", "two", "two", "three", "three", "three"];
        let counted = count_words(&words);
        assert_eq!(
            counted,
            vec![
                ("one".to_string(), 1),
                ("two".to_string(), 2),
                ("three".to_string(), 3)
            ]
        );
    }

    #[test]
    fn ranking_is_stable_for_ties() {
        let words = tokenize_words("zebra apple zebra apple mango mango mango");
        let ranked = word_frequencies(&words, &Lexicon::default(), 10);
        let order: Vec<&str> = ranked.iter().map(|f| f.word.as_str()).collect();
        assert_eq!(order, vec!["mango", "zebra", "apple"]);
    }

    #[test]
    fn filters_stopwords_and_short_words() {
        let words = tokenize_words("The ox is in the state of an ideal state");
        let ranked = word_frequencies(&words, &Lexicon::default(), 50);
        assert_eq!(
            ranked,
            vec![
                WordFrequency {
                    word: "state".into(),
                    count: 2
                },
                WordFrequency {
                    word: "ideal".into(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn respects_top_n() {
        let words = tokenize_words("alpha beta gamma delta alpha");
        let ranked = word_frequencies(&words, &Lexicon::default(), 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].word, "alpha");
        assert_eq!(ranked[1].word, "beta");
        assert!(word_frequencies(&words, &Lexicon::default(), 0).is_empty());
    }

    #[test]
    fn richness_metrics() {
        let words = tokenize_words("good good bad tea");
        let v = vocabulary_richness(&words);
        assert_eq!(v.total_words, 4);
        assert_eq!(v.unique_words, 3);
        assert_eq!(v.type_token_ratio, 0.75);
        assert_eq!(v.lexical_diversity, 75.0);
        assert_eq!(v.average_word_length, 3.5);
    }

    #[test]
    fn empty_input_is_all_zero() {
        let empty: Vec<String> = Vec::new();
        assert!(word_frequencies(&empty, &Lexicon::default(), 50).is_empty());
        let v = vocabulary_richness(&empty);
        assert_eq!(v.total_words, 0);
        assert_eq!(v.unique_words, 0);
        assert_eq!(v.type_token_ratio, 0.0);
        assert_eq!(v.lexical_diversity, 0.0);
        assert_eq!(v.average_word_length, 0.0);
    }
}
