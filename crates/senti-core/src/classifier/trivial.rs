use crate::classifier::SentimentClassifier;
use crate::types::{Label, ModelKind};

/// Baseline that labels every sentence positive.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrivialSentimentClassifier;

impl TrivialSentimentClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentClassifier for TrivialSentimentClassifier {
    fn kind(&self) -> ModelKind {
        ModelKind::Trivial
    }

    fn predict(&self, _sentence: &[String]) -> Label {
        Label::Positive
    }
}
