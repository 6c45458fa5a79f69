//! Keyword extraction from entry text.

use crate::entry::Entry;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Tokens shorter than this never count as topics.
pub const MIN_TOKEN_LEN: usize = 5;

/// Default number of topics returned.
pub const DEFAULT_TOP_N: usize = 10;

static MARKUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>|&[a-zA-Z]+;|&#\d+;").unwrap());

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
        "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
        "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
        "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
        "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
        "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
        "for", "with", "about", "against", "between", "into", "through", "during", "before",
        "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
        "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
        "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
        "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
        "just", "don", "should", "now",
    ]
    .into_iter()
    .collect()
});

/// A topic word and how often it appeared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct TopicOptions {
    /// How many topics to return.
    pub top_n: usize,
    /// Stopwords on top of the built-in set (lowercased on use).
    pub extra_stopwords: Vec<String>,
}

impl Default for TopicOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            extra_stopwords: Vec::new(),
        }
    }
}

/// Removes HTML tags and entities, leaving plain text.
pub fn strip_markup(text: &str) -> String {
    MARKUP_RE.replace_all(text, " ").into_owned()
}

/// Word count of the markup-stripped text.
pub fn word_count(text: &str) -> usize {
    strip_markup(text).split_whitespace().count()
}

/// The most frequent topic words across the bodies of `entries`.
///
/// Text is stripped of markup, lowercased, and split on non-letter
/// boundaries. Tokens shorter than [`MIN_TOKEN_LEN`] and stopwords are
/// discarded. Ties in frequency break alphabetically, so identical input
/// always produces identical output.
pub fn top_topics(entries: &[Entry], options: &TopicOptions) -> Vec<TopicCount> {
    let extra: HashSet<String> = options
        .extra_stopwords
        .iter()
        .map(|w| w.to_lowercase())
        .collect();

    let mut counts: HashMap<String, usize> = HashMap::new();
    for entry in entries {
        for token in tokenize(&entry.body) {
            if extra.contains(&token) {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }
    }

    let mut topics: Vec<TopicCount> = counts
        .into_iter()
        .map(|(word, count)| TopicCount { word, count })
        .collect();
    topics.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    topics.truncate(options.top_n);
    topics
}

fn tokenize(text: &str) -> impl Iterator<Item = String> {
    strip_markup(text)
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|token| token.len() >= MIN_TOKEN_LEN && !STOPWORDS.contains(token))
        .map(str::to_string)
        .collect::<Vec<_>>()
        .into_iter()
}
