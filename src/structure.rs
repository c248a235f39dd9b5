//! Sentence-length statistics and Flesch readability scores.

use serde::{Deserialize, Serialize};

use crate::round_to;

const VOWELS: &[u8] = b"aeiouy";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceComplexity {
    pub total_sentences: usize,
    pub average_sentence_length: f64,
    pub sentence_length_variance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortest_sentence: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longest_sentence: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Readability {
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
}

///Mean, population variance and extremes of sentence length, where length is
///the number of whitespace-separated tokens in a sentence.
pub fn sentence_complexity<S: AsRef<str>>(sentences: &[S]) -> SentenceComplexity {
    let lengths: Vec<usize> = sentences
        .iter()
        .map(|s| s.as_ref().split_whitespace().count())
        .collect();

    if lengths.is_empty() {
        return SentenceComplexity {
            total_sentences: 0,
            average_sentence_length: 0.0,
            sentence_length_variance: 0.0,
            shortest_sentence: None,
            longest_sentence: None,
        };
    }

    let n = lengths.len() as f64;
    let avg = lengths.iter().sum::<usize>() as f64 / n;
    let variance = lengths
        .iter()
        .map(|&l| (l as f64 - avg).powi(2))
        .sum::<f64>()
        / n;

    SentenceComplexity {
        total_sentences: lengths.len(),
        average_sentence_length: round_to(avg, 2),
        sentence_length_variance: round_to(variance, 2),
        shortest_sentence: lengths.iter().copied().min(),
        longest_sentence: lengths.iter().copied().max(),
    }
}

///Flesch Reading Ease and Flesch-Kincaid Grade. Both are zero when there are
///no words or no sentences.
pub fn readability<W: AsRef<str>, S: AsRef<str>>(words: &[W], sentences: &[S]) -> Readability {
    if words.is_empty() || sentences.is_empty() {
        return Readability {
            flesch_reading_ease: 0.0,
            flesch_kincaid_grade: 0.0,
        };
    }

    let syllables: usize = words.iter().map(|w| estimate_syllables(w.as_ref())).sum();
    let words_per_sentence = words.len() as f64 / sentences.len() as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;

    let fre = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    let fkg = 0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59;
    Readability {
        flesch_reading_ease: round_to(fre, 2),
        flesch_kincaid_grade: round_to(fkg, 2),
    }
}

///Heuristic syllable count: the number of vowel groups (`aeiouy`), minus one
///for a trailing silent `e`, never less than one.
/// # Example
/// ```
/// use distant_reading::estimate_syllables;
/// assert_eq!(estimate_syllables("love"), 1);
/// assert_eq!(estimate_syllables("beautiful"), 3);
/// ```
pub fn estimate_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let mut count = 0usize;
    let mut previous_was_vowel = false;
    for b in word.bytes() {
        let is_vowel = VOWELS.contains(&b);
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }
    if word.ends_with('e') {
        count = count.saturating_sub(1);
    }
    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syllable_heuristic() {
        assert_eq!(estimate_syllables("love"), 1);
        assert_eq!(estimate_syllables("beautiful"), 3);
        assert_eq!(estimate_syllables("the"), 1);
        assert_eq!(estimate_syllables("rhythm"), 1);
        assert_eq!(estimate_syllables("utopia"), 3);
        assert_eq!(estimate_syllables("State"), 1);
        assert_eq!(estimate_syllables("x"), 1);
        assert_eq!(estimate_syllables(""), 1);
    }

    #[test]
    fn complexity_of_three_sentences() {
        let sentences = ["The state is good", "The state is bad", "Socialism is an ideal"];
        let c = sentence_complexity(&sentences);
        assert_eq!(c.total_sentences, 3);
        assert_eq!(c.average_sentence_length, 4.0);
        assert_eq!(c.sentence_length_variance, 0.0);
        assert_eq!(c.shortest_sentence, Some(4));
        assert_eq!(c.longest_sentence, Some(4));
    }

    #[test]
    fn complexity_uses_whitespace_tokens() {
        // "well-known" and "1905" each count as one token
        let sentences = ["A well-known book of 1905", "Short"];
        let c = sentence_complexity(&sentences);
        assert_eq!(c.average_sentence_length, 3.0);
        assert_eq!(c.sentence_length_variance, 4.0);
        assert_eq!(c.shortest_sentence, Some(1));
        assert_eq!(c.longest_sentence, Some(5));
    }

    #[test]
    fn empty_sentences_have_no_extremes() {
        let empty: [&str; 0] = [];
        let c = sentence_complexity(&empty);
        assert_eq!(c.total_sentences, 0);
        assert_eq!(c.average_sentence_length, 0.0);
        assert_eq!(c.sentence_length_variance, 0.0);
        assert_eq!(c.shortest_sentence, None);
        assert_eq!(c.longest_sentence, None);

        let json = serde_json::to_value(&c).unwrap();
        assert!(json.get("shortest_sentence").is_none());
        assert!(json.get("longest_sentence").is_none());
    }

    #[test]
    fn readability_formulas() {
        // 4 one-syllable words in 1 sentence
        let words = ["the", "cat", "sat", "down"];
        let r = readability(&words, &["The cat sat down"]);
        // 206.835 - 1.015*4 - 84.6*1 = 118.175
        assert_eq!(r.flesch_reading_ease, 118.18);
        // 0.39*4 + 11.8*1 - 15.59 = -2.23
        assert_eq!(r.flesch_kincaid_grade, -2.23);
    }

    #[test]
    fn readability_is_zero_without_words_or_sentences() {
        let none: [&str; 0] = [];
        let zero = Readability {
            flesch_reading_ease: 0.0,
            flesch_kincaid_grade: 0.0,
        };
        assert_eq!(readability(&none, &["A sentence"]), zero);
        assert_eq!(readability(&["word"], &none), zero);
    }
}
