//! Word lists used by the analyzers: stop words, sentiment words and theme
//! keyword groups.
//!
//! A [`Lexicon`] is built once and passed by reference into every analysis
//! call. It is never mutated after construction, so one value can be shared
//! across threads.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::Result;

const BASIC_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "might", "more", "most", "must", "my", "myself", "no", "nor", "not", "now", "of", "off",
    "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same",
    "she", "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

// Frequent in narrative and philosophical prose without carrying content.
const LITERARY_STOPWORDS: &[&str] = &[
    "said", "says", "one", "two", "upon", "shall", "may", "might", "must", "even", "yet", "also",
    "much", "many", "every", "well", "still", "however", "therefore", "thus", "indeed", "perhaps",
    "though", "without", "within", "another", "whether", "such", "like", "seem", "seemed",
    "seems", "rather", "quite", "almost", "make", "made", "go", "come", "came", "see", "saw",
    "know", "knew", "think", "thought", "get", "got", "give", "given", "took", "take", "us", "mr",
    "chapter",
];

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "wonderful", "beautiful", "happy", "joy", "love", "pleasure",
    "delight", "perfect", "harmony", "peace", "hope", "success", "better", "best", "brilliant",
    "amazing", "fantastic", "splendid", "magnificent", "glorious", "divine", "blessed",
    "fortunate", "prosperous", "noble", "admirable", "wise", "freedom", "liberty", "justice",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "sad", "pain", "suffer", "suffering", "misery",
    "unhappy", "poor", "worse", "worst", "evil", "wrong", "death", "fear", "anxiety", "despair",
    "failure", "fail", "lost", "dark", "cruel", "hate", "hatred", "anger", "bitter", "dreadful",
    "wretched", "miserable", "unfortunate", "foolish", "stupid", "ignorant", "tyranny",
];

const SOCIALISM_KEYWORDS: &[&str] = &[
    "socialist", "socialism", "collective", "collectiv", "labor", "labour", "worker", "workers",
    "class", "classes", "equality", "equal", "common", "communal", "property", "ownership",
    "wealth", "distribution", "capital", "capitalist", "capitalism", "proletariat", "bourgeois",
    "marx", "revolution",
];

const UTOPIA_KEYWORDS: &[&str] = &[
    "utopia", "utopian", "ideal", "perfect", "perfection", "paradise", "eden", "vision", "dream",
    "imaginary", "future", "progress", "progressive", "reform", "improvement", "civilization",
    "civilized", "enlighten", "enlightenment", "rational", "reason",
];

const STATE_KEYWORDS: &[&str] = &[
    "state", "government", "govern", "law", "laws", "authority", "authorities", "power",
    "citizen", "citizens", "nation", "national", "public", "administration", "rule", "ruler",
    "political", "politics", "policy", "police", "order", "control", "regulation", "republic",
];

/// A named group of keywords. A word belongs to the theme when it contains
/// any keyword as a substring. Keywords are trimmed and lowercased, and blank
/// ones are dropped since they would match every word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub keywords: Vec<String>,
}

impl Theme {
    pub fn new<I, S>(name: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Theme {
            name: name.into(),
            keywords: keywords
                .into_iter()
                .map(|k| k.into().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// First keyword (in list order) contained in `haystack`.
    pub fn first_match(&self, haystack: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| haystack.contains(k.as_str()))
            .map(String::as_str)
    }

    pub fn matches(&self, haystack: &str) -> bool {
        self.first_match(haystack).is_some()
    }
}

/// Immutable word lists shared by all analyzers.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stopwords: HashSet<String>,
    positive_words: HashSet<String>,
    negative_words: HashSet<String>,
    themes: Vec<Theme>,
}

impl Lexicon {
    /// Builds a lexicon from custom lists. All words are lowercased.
    pub fn new<S, P, N>(stopwords: S, positive: P, negative: N, themes: Vec<Theme>) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        Lexicon {
            stopwords: lowercase_set(stopwords),
            positive_words: lowercase_set(positive),
            negative_words: lowercase_set(negative),
            themes,
        }
    }

    /// Returns a copy with additional stop words.
    pub fn with_extra_stopwords<I>(mut self, extra: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.stopwords.extend(lowercase_set(extra));
        self
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive_words.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative_words.contains(word)
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    /// Stop words in lexicographic order.
    pub fn sorted_stopwords(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.stopwords.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

impl Default for Lexicon {
    /// English stop words extended for literary prose, a small sentiment
    /// vocabulary and the `socialism`, `utopia` and `state` themes.
    fn default() -> Self {
        Lexicon::new(
            BASIC_STOPWORDS.iter().chain(LITERARY_STOPWORDS),
            POSITIVE_WORDS,
            NEGATIVE_WORDS,
            vec![
                Theme::new("socialism", SOCIALISM_KEYWORDS.iter().copied()),
                Theme::new("utopia", UTOPIA_KEYWORDS.iter().copied()),
                Theme::new("state", STATE_KEYWORDS.iter().copied()),
            ],
        )
    }
}

fn lowercase_set<I>(words: I) -> HashSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

///Reads a stop word file (one word per line). Blank lines are ignored.
pub fn load_stopword_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect())
}

///Writes the lexicon's stop words to `path`, sorted, one per line.
pub fn write_stopwords(path: &Path, lexicon: &Lexicon) -> Result<()> {
    fs::write(path, lexicon.sorted_stopwords().join("\n"))?;
    log::info!(
        "Saved {} stop words to {}",
        lexicon.stopword_count(),
        path.display()
    );
    Ok(())
}
