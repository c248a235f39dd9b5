//! # distant_reading
//!
//! Distant reading of literary texts. A raw text is tokenized into words and
//! sentences, from which word frequencies, vocabulary richness, a lexicon
//! based sentiment score, thematic keyword densities, sentence complexity and
//! Flesch readability are derived. Two analyzed texts can then be compared.
//!
//! ```
//! use distant_reading::{Lexicon, analyze_text, compare_texts};
//!
//! let lexicon = Lexicon::default();
//! let a = analyze_text("The state is good. The state is bad.", "a", &lexicon);
//! let b = analyze_text("Socialism is an ideal.", "b", &lexicon);
//! assert_eq!(a.basic_stats.sentence_count, 2);
//! assert_eq!(compare_texts(&a, &b).word_count_ratio, 2.0);
//! ```
//!
//! The analysis functions do no I/O and cannot fail. Reading documents and
//! writing reports live in [`extract`] and [`report`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod compare;
pub mod error;
pub mod extract;
pub mod frequency;
pub mod lexicon;
pub mod report;
pub mod sentiment;
pub mod structure;
pub mod themes;
pub mod tokenize;

pub use compare::{ComparisonRecord, compare_texts};
pub use error::{DistantReadingError, Result};
pub use extract::{extract_marked_text, extract_text_from_file};
pub use frequency::{
    VocabularyRichness, WordFrequency, count_words, sort_by_count, vocabulary_richness,
    word_frequencies,
};
pub use lexicon::{Lexicon, Theme, load_stopword_file, write_stopwords};
pub use report::{
    AnalysisReport, ExportFormat, TextSource, build_report, csv_safe_cell, export_report,
};
pub use sentiment::{SentimentResult, score_sentiment, score_words};
pub use structure::{
    Readability, SentenceComplexity, estimate_syllables, readability, sentence_complexity,
};
pub use themes::{ExampleLimits, ThemeExample, ThemeResult, detect_themes, detect_themes_with};
pub use tokenize::{tokenize_sentences, tokenize_words};

/// Tunables for [`analyze_text_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Length of the word frequency ranking.
    pub top_n: usize,
    pub examples: ExampleLimits,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            top_n: 50,
            examples: ExampleLimits::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicStats {
    pub word_count: usize,
    pub sentence_count: usize,
    /// Unicode scalar values in the raw text.
    pub character_count: usize,
}

/// Everything derived from one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: String,
    pub basic_stats: BasicStats,
    pub word_frequencies: Vec<WordFrequency>,
    pub sentiment: SentimentResult,
    /// Keyed by theme name and sorted by it, not by lexicon order.
    pub thematic_analysis: BTreeMap<String, ThemeResult>,
    pub vocabulary_richness: VocabularyRichness,
    pub sentence_complexity: SentenceComplexity,
    pub readability: Readability,
}

/// Two records and their comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct PairAnalysis {
    pub first: AnalysisRecord,
    pub second: AnalysisRecord,
    pub comparison: ComparisonRecord,
}

///Analyzes `text` with the default [`AnalysisOptions`].
pub fn analyze_text(text: &str, id: &str, lexicon: &Lexicon) -> AnalysisRecord {
    analyze_text_with(text, id, lexicon, &AnalysisOptions::default())
}

///Runs every analyzer over `text` and collects the results under `id`.
pub fn analyze_text_with(
    text: &str,
    id: &str,
    lexicon: &Lexicon,
    options: &AnalysisOptions,
) -> AnalysisRecord {
    let words = tokenize_words(text);
    let sentences = tokenize_sentences(text);

    AnalysisRecord {
        id: id.to_string(),
        basic_stats: BasicStats {
            word_count: words.len(),
            sentence_count: sentences.len(),
            character_count: text.chars().count(),
        },
        word_frequencies: word_frequencies(&words, lexicon, options.top_n),
        sentiment: score_words(&words, lexicon),
        thematic_analysis: detect_themes_with(&words, &sentences, lexicon, &options.examples),
        vocabulary_richness: vocabulary_richness(&words),
        sentence_complexity: sentence_complexity(&sentences),
        readability: readability(&words, &sentences),
    }
}

///Analyzes two texts in parallel and compares them.
///
///Fails when an id is empty, both ids are equal, or an id contains a path
///separator or `..`, since ids key the texts in reports and name export files.
pub fn analyze_pair(
    first: (&str, &str),
    second: (&str, &str),
    lexicon: &Lexicon,
    options: &AnalysisOptions,
) -> Result<PairAnalysis> {
    let ((first_id, first_text), (second_id, second_text)) = (first, second);
    if first_id.is_empty() || second_id.is_empty() {
        return Err(DistantReadingError::invalid_argument(
            "text identifiers must not be empty",
        ));
    }
    for id in [first_id, second_id] {
        if id.contains(['/', '\\']) || id.contains("..") {
            return Err(DistantReadingError::invalid_argument(format!(
                "text identifier {id:?} must not contain path separators or \"..\""
            )));
        }
    }
    if first_id == second_id {
        return Err(DistantReadingError::invalid_argument(format!(
            "both texts use the identifier {first_id:?}"
        )));
    }

    let (first, second) = rayon::join(
        || analyze_text_with(first_text, first_id, lexicon, options),
        || analyze_text_with(second_text, second_id, lexicon, options),
    );
    let comparison = compare_texts(&first, &second);
    Ok(PairAnalysis {
        first,
        second,
        comparison,
    })
}

/// Rounds to `places` decimal places. Exact ties go to the even digit, judged
/// on the exact binary value, so 0.125 becomes 0.12 but 0.375 becomes 0.38.
pub(crate) fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}
