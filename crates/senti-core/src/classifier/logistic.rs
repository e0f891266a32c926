//! Online logistic regression.

use crate::classifier::{train_online, SentimentClassifier, TrainingConfig, TrainingHistory};
use crate::error::Result;
use crate::features::FeatureExtractor;
use crate::types::{Label, ModelKind, SentimentExample};

/// Numerically stable logistic function.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let exp_z = z.exp();
        exp_z / (1.0 + exp_z)
    }
}

/// Logistic regression over the features of one extractor.
///
/// `P(positive | x) = sigmoid(w . x)`, predicted positive above one half.
/// Updates happen only on mistakes and are scaled by the probability mass
/// on the wrong side: `(1 - p)` for a missed positive, `p` for a missed
/// negative.
#[derive(Debug)]
pub struct LogisticRegressionClassifier {
    extractor: Box<dyn FeatureExtractor>,
    weights: Vec<f64>,
    history: TrainingHistory,
}

impl LogisticRegressionClassifier {
    /// Train on `examples`, growing `extractor`'s vocabulary as it goes.
    pub fn train(
        examples: &[SentimentExample],
        mut extractor: Box<dyn FeatureExtractor>,
        config: &TrainingConfig,
    ) -> Result<Self> {
        let lr = config.learning_rate;
        let (weights, history) = train_online(
            "logistic_regression",
            examples,
            extractor.as_mut(),
            config,
            |w, x, gold| {
                let p = sigmoid(x.dot(w));
                let pred = Label::from(p > 0.5);
                if pred == gold {
                    return true;
                }
                match gold {
                    Label::Positive => x.add_scaled_to(w, lr * (1.0 - p)),
                    Label::Negative => x.add_scaled_to(w, -lr * p),
                }
                false
            },
        )?;

        Ok(Self {
            extractor,
            weights,
            history,
        })
    }

    /// `P(positive | sentence)` against the frozen vocabulary.
    pub fn probability(&self, sentence: &[String]) -> f64 {
        sigmoid(self.extractor.extract(sentence).dot(&self.weights))
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn extractor(&self) -> &dyn FeatureExtractor {
        self.extractor.as_ref()
    }
}

impl SentimentClassifier for LogisticRegressionClassifier {
    fn kind(&self) -> ModelKind {
        ModelKind::LogisticRegression
    }

    fn training_history(&self) -> Option<&TrainingHistory> {
        Some(&self.history)
    }

    fn predict(&self, sentence: &[String]) -> Label {
        Label::from(self.probability(sentence) > 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::in_visit_order;
    use crate::features::build_extractor;
    use crate::types::{tokenize, FeatureKind};

    fn disjoint_data() -> Vec<SentimentExample> {
        [
            ("great fun", Label::Positive),
            ("great acting", Label::Positive),
            ("charming fun", Label::Positive),
            ("awful mess", Label::Negative),
            ("awful plot", Label::Negative),
            ("tedious mess", Label::Negative),
        ]
        .into_iter()
        .map(|(s, l)| SentimentExample::from_sentence(s, l))
        .collect()
    }

    #[test]
    fn test_sigmoid() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!(sigmoid(800.0) <= 1.0);
        assert!(sigmoid(-800.0) >= 0.0);
        assert!((sigmoid(2.0) + sigmoid(-2.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_fits_disjoint_vocabularies() {
        let feats = FeatureKind::Unigram;
        let model = LogisticRegressionClassifier::train(
            &disjoint_data(),
            build_extractor(feats),
            &TrainingConfig::logistic_regression(feats),
        )
        .unwrap();

        for ex in disjoint_data() {
            assert_eq!(model.predict(&ex.words), ex.label);
        }
        assert_eq!(model.training_history().unwrap().epochs(), 13);
        assert_eq!(model.training_history().unwrap().last(), Some(1.0));
        assert_eq!(model.weights().len(), 15_000);
    }

    #[test]
    fn test_update_is_scaled_by_margin() {
        let examples = vec![SentimentExample::from_sentence("superb", Label::Positive)];
        let config = TrainingConfig::logistic_regression(FeatureKind::Unigram).with_epochs(1);
        let model = LogisticRegressionClassifier::train(
            &examples,
            build_extractor(FeatureKind::Unigram),
            &config,
        )
        .unwrap();

        // Zero weights give p = 0.5, so the step is lr * (1 - 0.5).
        assert!((model.weights()[0] - 0.00025).abs() < 1e-15);
        assert!(model.probability(&tokenize("superb")) > 0.5);
    }

    #[test]
    fn test_predictions_are_binary_and_reproducible() {
        let train = |feats| {
            LogisticRegressionClassifier::train(
                &disjoint_data(),
                build_extractor(feats),
                &TrainingConfig::logistic_regression(feats),
            )
            .unwrap()
        };

        for feats in [FeatureKind::Bigram, FeatureKind::Better] {
            let a = train(feats);
            let b = train(feats);
            assert_eq!(a.training_history().unwrap(), b.training_history().unwrap());
            assert_eq!(a.weights(), b.weights());

            for sentence in ["", "great", "unseen words only", "Awful , awful"] {
                let p = a.probability(&tokenize(sentence));
                assert!((0.0..=1.0).contains(&p));
                assert!(a.predict(&tokenize(sentence)).as_int() <= 1);
            }
        }
    }

    #[test]
    fn test_missed_negative_is_scaled_by_probability() {
        let config = TrainingConfig::logistic_regression(FeatureKind::Unigram).with_epochs(1);
        let examples = in_visit_order(
            vec![
                SentimentExample::from_sentence("good", Label::Positive),
                SentimentExample::from_sentence("good bad", Label::Negative),
            ],
            config.seed,
        );
        let model = LogisticRegressionClassifier::train(
            &examples,
            build_extractor(FeatureKind::Unigram),
            &config,
        )
        .unwrap();

        let prior = 0.0005 * 0.5;
        let p = sigmoid(prior);
        assert!(p > 0.5);

        let indexer = model.extractor().indexer();
        let good = indexer.index_of("good").unwrap();
        let bad = indexer.index_of("bad").unwrap();
        assert!((model.weights()[good] - (prior - 0.0005 * p)).abs() < 1e-15);
        assert!((model.weights()[bad] + 0.0005 * p).abs() < 1e-15);
    }
}
