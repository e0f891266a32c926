//! Binary classification metrics for evaluating sentiment classifiers.

use std::fmt;

use serde::Serialize;

use crate::classifier::SentimentClassifier;
use crate::types::{Label, SentimentExample};

/// Confusion matrix for binary classification, positive = 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    /// True positives
    pub tp: usize,
    /// True negatives
    pub tn: usize,
    /// False positives
    pub fp: usize,
    /// False negatives
    pub fn_: usize,
}

impl ConfusionMatrix {
    /// Tally gold labels against predictions, pairwise.
    pub fn from_predictions(golds: &[Label], predictions: &[Label]) -> Self {
        let mut cm = Self::default();
        for (&gold, &pred) in golds.iter().zip(predictions.iter()) {
            match (gold.is_positive(), pred.is_positive()) {
                (true, true) => cm.tp += 1,
                (false, false) => cm.tn += 1,
                (false, true) => cm.fp += 1,
                (true, false) => cm.fn_ += 1,
            }
        }
        cm
    }

    pub fn total(&self) -> usize {
        self.tp + self.tn + self.fp + self.fn_
    }

    pub fn correct(&self) -> usize {
        self.tp + self.tn
    }

    /// Number of examples predicted positive.
    pub fn predicted_positive(&self) -> usize {
        self.tp + self.fp
    }

    /// Number of examples whose gold label is positive.
    pub fn gold_positive(&self) -> usize {
        self.tp + self.fn_
    }
}

fn ratio(num: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        num as f64 / denom as f64
    }
}

/// Accuracy, precision, recall and F1 of one evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub confusion_matrix: ConfusionMatrix,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl EvaluationReport {
    /// Compute every metric from a confusion matrix. Metrics with a zero
    /// denominator are reported as zero.
    pub fn from_confusion_matrix(cm: ConfusionMatrix) -> Self {
        let accuracy = ratio(cm.correct(), cm.total());
        let precision = ratio(cm.tp, cm.predicted_positive());
        let recall = ratio(cm.tp, cm.gold_positive());
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        Self {
            confusion_matrix: cm,
            accuracy,
            precision,
            recall,
            f1,
        }
    }

    pub fn from_predictions(golds: &[Label], predictions: &[Label]) -> Self {
        Self::from_confusion_matrix(ConfusionMatrix::from_predictions(golds, predictions))
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cm = &self.confusion_matrix;
        writeln!(
            f,
            "Accuracy: {} / {} = {:.6}",
            cm.correct(),
            cm.total(),
            self.accuracy
        )?;
        write!(
            f,
            "Precision (fraction of predicted positives that are correct): {} / {} = {:.6}; \
             Recall (fraction of true positives predicted correctly): {} / {} = {:.6}; \
             F1 (harmonic mean of precision and recall): {:.6}",
            cm.tp,
            cm.predicted_positive(),
            self.precision,
            cm.tp,
            cm.gold_positive(),
            self.recall,
            self.f1
        )
    }
}

/// Run `classifier` over `examples` and score it against their gold labels.
pub fn evaluate(classifier: &dyn SentimentClassifier, examples: &[SentimentExample]) -> EvaluationReport {
    let golds: Vec<Label> = examples.iter().map(|ex| ex.label).collect();
    let predictions = classifier.predict_all(examples);
    EvaluationReport::from_predictions(&golds, &predictions)
}
