//! Bigram bag-of-words features.

use crate::features::FeatureExtractor;
use crate::indexer::Indexer;
use crate::types::FeatureKind;

/// Separator placed between the two tokens of a bigram key.
pub const BIGRAM_SEPARATOR: char = '|';

/// Counts of adjacent lower-cased token pairs.
#[derive(Debug, Clone)]
pub struct BigramFeatureExtractor {
    indexer: Indexer,
    capacity: usize,
}

impl BigramFeatureExtractor {
    pub fn new() -> Self {
        Self::with_capacity(FeatureKind::Bigram.capacity())
    }

    /// Extractor with a non-default number of slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indexer: Indexer::new(),
            capacity,
        }
    }
}

impl Default for BigramFeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureExtractor for BigramFeatureExtractor {
    fn kind(&self) -> FeatureKind {
        FeatureKind::Bigram
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
        let lowered: Vec<String> = sentence.iter().map(|w| w.to_lowercase()).collect();
        lowered
            .windows(2)
            .map(|pair| format!("{}{}{}", pair[0], BIGRAM_SEPARATOR, pair[1]))
            .collect()
    }
}
