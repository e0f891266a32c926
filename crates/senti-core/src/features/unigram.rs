//! Unigram bag-of-words features.

use std::collections::HashSet;

use crate::features::FeatureExtractor;
use crate::indexer::Indexer;
use crate::types::FeatureKind;

/// Lower-cased unigram presence features.
///
/// Each distinct lower-cased token contributes at most one count per
/// sentence.
#[derive(Debug, Clone)]
pub struct UnigramFeatureExtractor {
    indexer: Indexer,
    capacity: usize,
}

impl UnigramFeatureExtractor {
    pub fn new() -> Self {
        Self::with_capacity(FeatureKind::Unigram.capacity())
    }

    /// Extractor with a non-default number of slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indexer: Indexer::new(),
            capacity,
        }
    }
}

impl Default for UnigramFeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureExtractor for UnigramFeatureExtractor {
    fn kind(&self) -> FeatureKind {
        FeatureKind::Unigram
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
        let mut seen = HashSet::new();
        sentence
            .iter()
            .map(|w| w.to_lowercase())
            .filter(|w| seen.insert(w.clone()))
            .collect()
    }
}
