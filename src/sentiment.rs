//! Lexicon-based sentiment scoring.
//!
//! Each word is looked up in the positive and negative word sets of the
//! [`Lexicon`]. This is a rough approximation of tone, not a trained model.

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::round_to;
use crate::tokenize::tokenize_words;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub compound: f64,
    pub polarity: f64,
    pub subjectivity: f64,
}

impl SentimentResult {
    /// Returned when a text contains no sentiment words at all.
    pub const NEUTRAL: SentimentResult = SentimentResult {
        positive: 0.33,
        negative: 0.33,
        neutral: 0.34,
        compound: 0.0,
        polarity: 0.0,
        subjectivity: 0.5,
    };
}

///Tokenizes `text` and scores it. See [`score_words`].
pub fn score_sentiment(text: &str, lexicon: &Lexicon) -> SentimentResult {
    score_words(&tokenize_words(text), lexicon)
}

///Scores already tokenized words.
///
///A word counts as positive when it is in the positive set, otherwise as
///negative when it is in the negative set. With no sentiment words at all the
///result is [`SentimentResult::NEUTRAL`].
/// # Example
/// ```
/// use distant_reading::{Lexicon, score_sentiment};
/// let s = score_sentiment("good good bad", &Lexicon::default());
/// assert_eq!(s.polarity, 0.333);
/// ```
pub fn score_words<S: AsRef<str>>(words: &[S], lexicon: &Lexicon) -> SentimentResult {
    let (mut pos, mut neg) = (0usize, 0usize);
    for word in words {
        let word = word.as_ref();
        if lexicon.is_positive(word) {
            pos += 1;
        } else if lexicon.is_negative(word) {
            neg += 1;
        }
    }

    let total = pos + neg;
    if total == 0 {
        return SentimentResult::NEUTRAL;
    }

    let total = total as f64;
    let word_count = words.len() as f64;
    let net = pos as f64 - neg as f64;
    let pos_ratio = pos as f64 / total;
    let neg_ratio = neg as f64 / total;

    SentimentResult {
        positive: round_to(pos_ratio, 3),
        negative: round_to(neg_ratio, 3),
        neutral: round_to(1.0 - pos_ratio - neg_ratio, 3),
        compound: round_to(net / word_count, 4),
        polarity: round_to(net / total, 3),
        subjectivity: round_to(total / word_count, 3),
    }
}
