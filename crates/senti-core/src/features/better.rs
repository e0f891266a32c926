//! Filtered unigram features.
//!
//! Drops title-case tokens (mostly names and sentence-initial words), very
//! long tokens, English stop words and bare punctuation before counting.

use crate::features::FeatureExtractor;
use crate::indexer::Indexer;
use crate::types::FeatureKind;

/// Tokens with this many characters or more are ignored.
pub const MAX_TOKEN_CHARS: usize = 17;

const PUNCTUATION: &[char] = &[
    '(', ')', '-', '[', ']', '{', '}', ';', ':', '\'', '"', '\\', ',', '<', '>', '.', '/', '?',
    '@', '#', '$', '%', '^', '&', '*', '_', '~',
];

const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "he", "him", "his", "himself", "she", "her", "hers", "herself", "it", "its",
    "itself", "they", "them", "their", "theirs", "themselves", "what", "which", "who", "whom",
    "this", "that", "these", "those", "am", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but",
    "if", "or", "because", "as", "until", "while", "of", "at", "by", "for", "with", "about",
    "against", "between", "into", "through", "during", "before", "after", "above", "below", "to",
    "from", "up", "down", "in", "out", "on", "off", "over", "under", "again", "then", "once",
    "here", "there", "when", "where", "so", "than", "can", "will", "just", "should",
];

/// Filtered unigram counts.
#[derive(Debug, Clone)]
pub struct BetterFeatureExtractor {
    indexer: Indexer,
    capacity: usize,
}

impl BetterFeatureExtractor {
    pub fn new() -> Self {
        Self::with_capacity(FeatureKind::Better.capacity())
    }

    /// Extractor with a non-default number of slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indexer: Indexer::new(),
            capacity,
        }
    }

    fn keep(word: &str) -> Option<String> {
        if is_title_case(word) || word.chars().count() >= MAX_TOKEN_CHARS {
            return None;
        }
        let lower = word.to_lowercase();
        if is_stop_word(&lower) || is_punctuation(&lower) {
            return None;
        }
        Some(lower)
    }
}

impl Default for BetterFeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureExtractor for BetterFeatureExtractor {
    fn kind(&self) -> FeatureKind {
        FeatureKind::Better
    }

    fn size(&self) -> usize {
        self.capacity
    }

    fn indexer(&self) -> &Indexer {
        &self.indexer
    }

    fn indexer_mut(&mut self) -> &mut Indexer {
        &mut self.indexer
    }

    fn feature_keys(&self, sentence: &[String]) -> Vec<String> {
        sentence.iter().filter_map(|w| Self::keep(w)).collect()
    }
}

/// Title case: at least one cased character, every uppercase character
/// follows an uncased one and every lowercase character follows a cased one.
pub fn is_title_case(word: &str) -> bool {
    let mut any_cased = false;
    let mut prev_cased = false;
    for c in word.chars() {
        if c.is_uppercase() {
            if prev_cased {
                return false;
            }
            prev_cased = true;
            any_cased = true;
        } else if c.is_lowercase() {
            if !prev_cased {
                return false;
            }
            prev_cased = true;
            any_cased = true;
        } else {
            prev_cased = false;
        }
    }
    any_cased
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// A token made of exactly one punctuation character.
pub fn is_punctuation(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if PUNCTUATION.contains(&c))
}
