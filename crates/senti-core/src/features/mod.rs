//! # Feature Extraction
//!
//! Turns tokenized sentences into fixed-capacity dense count vectors.
//! Each extractor owns its own [`Indexer`]; training-time extraction grows
//! the vocabulary while inference-time extraction only looks entries up.

pub mod better;
pub mod bigram;
pub mod unigram;

use std::fmt;

pub use better::BetterFeatureExtractor;
pub use bigram::BigramFeatureExtractor;
pub use unigram::UnigramFeatureExtractor;

use crate::indexer::Indexer;
use crate::types::FeatureKind;

/// Dense vector of feature counts with a fixed number of slots.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    /// An all-zero vector with `capacity` slots.
    pub fn zeros(capacity: usize) -> Self {
        Self {
            values: vec![0.0; capacity],
        }
    }

    /// Count each index once per occurrence. Indices `>= capacity` are
    /// dropped without error.
    pub fn from_indices<I>(capacity: usize, indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut vector = Self::zeros(capacity);
        for idx in indices {
            if let Some(slot) = vector.values.get_mut(idx) {
                *slot += 1.0;
            }
        }
        vector
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Value at `idx`, or zero past the end.
    pub fn get(&self, idx: usize) -> f64 {
        self.values.get(idx).copied().unwrap_or(0.0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Iterate over `(index, count)` for non-zero slots.
    pub fn nonzero(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| **v != 0.0)
            .map(|(i, v)| (i, *v))
    }

    /// Dot product with a weight vector of the same capacity.
    pub fn dot(&self, weights: &[f64]) -> f64 {
        debug_assert_eq!(self.values.len(), weights.len());
        self.values
            .iter()
            .zip(weights.iter())
            .map(|(x, w)| x * w)
            .sum()
    }

    /// `weights += scale * self`, in place.
    pub fn add_scaled_to(&self, weights: &mut [f64], scale: f64) {
        debug_assert_eq!(self.values.len(), weights.len());
        for (w, x) in weights.iter_mut().zip(self.values.iter()) {
            *w += scale * x;
        }
    }
}

/// Common interface of the bag-of-features extractors.
///
/// Implementors only decide which string keys a sentence produces; indexing,
/// counting and truncation are shared.
pub trait FeatureExtractor: fmt::Debug + Send + Sync {
    /// Which extractor this is.
    fn kind(&self) -> FeatureKind;

    /// Number of slots in every vector this extractor produces.
    fn size(&self) -> usize;

    fn indexer(&self) -> &Indexer;

    fn indexer_mut(&mut self) -> &mut Indexer;

    /// The string keys to count for `sentence`, before indexing.
    fn feature_keys(&self, sentence: &[String]) -> Vec<String>;

    /// Featurize `sentence`, registering unseen keys when `add_to_indexer`
    /// is set. Without it the indexer is left untouched and unseen keys are
    /// discarded.
    fn extract_features(&mut self, sentence: &[String], add_to_indexer: bool) -> FeatureVector {
        let keys = self.feature_keys(sentence);
        let size = self.size();
        let indexer = self.indexer_mut();
        let before = indexer.len();
        let indices: Vec<usize> = keys
            .iter()
            .filter_map(|key| indexer.add_and_get_index(key, add_to_indexer))
            .collect();
        if indexer.len() > before {
            tracing::debug!(added = indexer.len() - before, total = indexer.len(), "vocabulary grew");
        }
        FeatureVector::from_indices(size, indices)
    }

    /// Inference-time featurization against a frozen vocabulary.
    fn extract(&self, sentence: &[String]) -> FeatureVector {
        let indexer = self.indexer();
        let indices = self
            .feature_keys(sentence)
            .iter()
            .filter_map(|key| indexer.index_of(key))
            .collect::<Vec<_>>();
        FeatureVector::from_indices(self.size(), indices)
    }
}

/// Build a fresh extractor with an empty vocabulary.
pub fn build_extractor(kind: FeatureKind) -> Box<dyn FeatureExtractor> {
    match kind {
        FeatureKind::Unigram => Box::new(UnigramFeatureExtractor::new()),
        FeatureKind::Bigram => Box::new(BigramFeatureExtractor::new()),
        FeatureKind::Better => Box::new(BetterFeatureExtractor::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<String> {
        s.split(' ').map(str::to_string).collect()
    }

    #[test]
    fn test_from_indices_truncates_silently() {
        let v = FeatureVector::from_indices(3, [0, 2, 2, 3, 100]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.as_slice(), &[1.0, 0.0, 2.0]);
        assert_eq!(v.total(), 3.0);
    }

    #[test]
    fn test_dot_and_update() {
        let v = FeatureVector::from_indices(4, [1, 3]);
        let mut w = vec![0.5, 1.0, -2.0, 3.0];
        assert_eq!(v.dot(&w), 4.0);

        v.add_scaled_to(&mut w, -1.0);
        assert_eq!(w, vec![0.5, 0.0, -2.0, 2.0]);
    }

    #[test]
    fn test_nonzero() {
        let v = FeatureVector::from_indices(5, [4, 1, 4]);
        let nz: Vec<_> = v.nonzero().collect();
        assert_eq!(nz, vec![(1, 1.0), (4, 2.0)]);
    }

    #[test]
    fn test_every_kind_produces_declared_size() {
        for kind in [FeatureKind::Unigram, FeatureKind::Bigram, FeatureKind::Better] {
            let mut extractor = build_extractor(kind);
            assert_eq!(extractor.kind(), kind);
            assert_eq!(extractor.size(), kind.capacity());

            for sentence in ["", "good", "a truly great , Moving film ."] {
                let s = if sentence.is_empty() { vec![] } else { words(sentence) };
                assert_eq!(extractor.extract_features(&s, true).len(), kind.capacity());
                assert_eq!(extractor.extract(&s).len(), kind.capacity());
            }
        }
    }

    #[test]
    fn test_inference_never_grows_vocabulary() {
        for kind in [FeatureKind::Unigram, FeatureKind::Bigram, FeatureKind::Better] {
            let mut extractor = build_extractor(kind);
            extractor.extract_features(&words("the plot is thin but fun"), true);
            let frozen = extractor.indexer().len();

            extractor.extract(&words("an utterly unseen sentence here"));
            extractor.extract_features(&words("more brand new tokens"), false);
            assert_eq!(extractor.indexer().len(), frozen);
        }
    }

    #[test]
    fn test_training_growth_is_monotonic() {
        let mut extractor = build_extractor(FeatureKind::Unigram);
        let mut last = 0;
        for sentence in ["good film", "bad film", "good acting", "a", "good film"] {
            extractor.extract_features(&words(sentence), true);
            assert!(extractor.indexer().len() >= last);
            last = extractor.indexer().len();
        }
        assert_eq!(last, 5);
    }
}
