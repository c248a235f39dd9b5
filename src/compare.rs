//! Side-by-side comparison of two analyzed texts.

use serde::{Deserialize, Serialize};

use crate::{AnalysisRecord, round_to};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub first_id: String,
    pub second_id: String,
    /// First word count divided by second; 0 when the second text is empty.
    pub word_count_ratio: f64,
    pub vocabulary_richness_comparison: VocabularyComparison,
    pub sentence_complexity_comparison: SentenceLengthComparison,
    pub sentiment_comparison: SentimentComparison,
    pub readability_comparison: ReadabilityComparison,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyComparison {
    pub first_ttr: f64,
    pub second_ttr: f64,
    pub difference: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceLengthComparison {
    pub first_avg: f64,
    pub second_avg: f64,
    pub difference: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentComparison {
    pub first_compound: f64,
    pub second_compound: f64,
    pub first_polarity: f64,
    pub second_polarity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityComparison {
    pub first_fre: f64,
    pub second_fre: f64,
    /// Id of the text with the higher Flesch Reading Ease. Equal scores name
    /// the second text.
    pub easier_to_read: String,
}

///Compares two analysis records. Differences are `first - second`.
pub fn compare_texts(first: &AnalysisRecord, second: &AnalysisRecord) -> ComparisonRecord {
    let first_words = first.basic_stats.word_count;
    let second_words = second.basic_stats.word_count;
    let word_count_ratio = if second_words == 0 {
        0.0
    } else {
        round_to(first_words as f64 / second_words as f64, 2)
    };

    let first_ttr = first.vocabulary_richness.type_token_ratio;
    let second_ttr = second.vocabulary_richness.type_token_ratio;
    let first_avg = first.sentence_complexity.average_sentence_length;
    let second_avg = second.sentence_complexity.average_sentence_length;
    let first_fre = first.readability.flesch_reading_ease;
    let second_fre = second.readability.flesch_reading_ease;

    let easier_to_read = if first_fre > second_fre {
        first.id.clone()
    } else {
        second.id.clone()
    };

    ComparisonRecord {
        first_id: first.id.clone(),
        second_id: second.id.clone(),
        word_count_ratio,
        vocabulary_richness_comparison: VocabularyComparison {
            first_ttr,
            second_ttr,
            difference: round_to(first_ttr - second_ttr, 4),
        },
        sentence_complexity_comparison: SentenceLengthComparison {
            first_avg,
            second_avg,
            difference: round_to(first_avg - second_avg, 2),
        },
        sentiment_comparison: SentimentComparison {
            first_compound: first.sentiment.compound,
            second_compound: second.sentiment.compound,
            first_polarity: first.sentiment.polarity,
            second_polarity: second.sentiment.polarity,
        },
        readability_comparison: ReadabilityComparison {
            first_fre,
            second_fre,
            easier_to_read,
        },
    }
}
