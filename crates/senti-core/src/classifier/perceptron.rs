//! Online perceptron.

use crate::classifier::{train_online, SentimentClassifier, TrainingConfig, TrainingHistory};
use crate::error::Result;
use crate::features::FeatureExtractor;
use crate::types::{Label, ModelKind, SentimentExample};

/// Perceptron over the features of one extractor.
///
/// Predicts positive when `w . x > 0`. On a mistake the weights move by
/// `learning_rate * x` toward the gold label.
#[derive(Debug)]
pub struct PerceptronClassifier {
    extractor: Box<dyn FeatureExtractor>,
    weights: Vec<f64>,
    history: TrainingHistory,
}

impl PerceptronClassifier {
    /// Train on `examples`, growing `extractor`'s vocabulary as it goes.
    ///
    /// # Examples
    /// ```
    /// use senti_core::{
    ///     build_extractor, FeatureKind, Label, PerceptronClassifier, SentimentClassifier,
    ///     SentimentExample, TrainingConfig,
    /// };
    ///
    /// let examples = vec![
    ///     SentimentExample::from_sentence("a wonderful film", Label::Positive),
    ///     SentimentExample::from_sentence("a dreadful film", Label::Negative),
    /// ];
    /// let model = PerceptronClassifier::train(
    ///     &examples,
    ///     build_extractor(FeatureKind::Unigram),
    ///     &TrainingConfig::perceptron(FeatureKind::Unigram),
    /// )
    /// .unwrap();
    ///
    /// let words: Vec<String> = vec!["wonderful".into()];
    /// assert_eq!(model.predict(&words), Label::Positive);
    /// ```
    pub fn train(
        examples: &[SentimentExample],
        mut extractor: Box<dyn FeatureExtractor>,
        config: &TrainingConfig,
    ) -> Result<Self> {
        let lr = config.learning_rate;
        let (weights, history) =
            train_online("perceptron", examples, extractor.as_mut(), config, |w, x, gold| {
                let pred = Label::from(x.dot(w) > 0.0);
                if pred == gold {
                    return true;
                }
                match gold {
                    Label::Positive => x.add_scaled_to(w, lr),
                    Label::Negative => x.add_scaled_to(w, -lr),
                }
                false
            })?;

        Ok(Self {
            extractor,
            weights,
            history,
        })
    }

    /// Raw activation `w . x` against the frozen vocabulary.
    pub fn score(&self, sentence: &[String]) -> f64 {
        self.extractor.extract(sentence).dot(&self.weights)
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn extractor(&self) -> &dyn FeatureExtractor {
        self.extractor.as_ref()
    }
}

impl SentimentClassifier for PerceptronClassifier {
    fn kind(&self) -> ModelKind {
        ModelKind::Perceptron
    }

    fn training_history(&self) -> Option<&TrainingHistory> {
        Some(&self.history)
    }

    fn predict(&self, sentence: &[String]) -> Label {
        Label::from(self.score(sentence) > 0.0)
    }
}
