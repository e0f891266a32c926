//! # Senti Core
//!
//! Linear sentiment classifiers over hand-built bag-of-words features.
//! Provides the vocabulary indexer, unigram / bigram / filtered feature
//! extractors, online perceptron and logistic regression trainers, and
//! binary classification metrics.
//!
//! ## Quick Start
//!
//! ```rust
//! use senti_core::{
//!     build_extractor, evaluate, FeatureKind, Label, LogisticRegressionClassifier,
//!     SentimentExample, TrainingConfig,
//! };
//!
//! let train = vec![
//!     SentimentExample::from_sentence("a warm , witty delight", Label::Positive),
//!     SentimentExample::from_sentence("a cold , lifeless slog", Label::Negative),
//! ];
//! let feats = FeatureKind::Unigram;
//! let model = LogisticRegressionClassifier::train(
//!     &train,
//!     build_extractor(feats),
//!     &TrainingConfig::logistic_regression(feats),
//! )
//! .unwrap();
//!
//! let report = evaluate(&model, &train);
//! assert_eq!(report.accuracy, 1.0);
//! ```
pub mod classifier;
pub mod error;
pub mod features;
pub mod indexer;
pub mod metrics;
pub mod types;

// Re-export primary API
pub use classifier::{
    LogisticRegressionClassifier, PerceptronClassifier, SentimentClassifier, TrainingConfig,
    TrainingHistory, TrivialSentimentClassifier,
};
pub use error::{Result, SentiError};
pub use features::{
    build_extractor, BetterFeatureExtractor, BigramFeatureExtractor, FeatureExtractor,
    FeatureVector, UnigramFeatureExtractor,
};
pub use indexer::Indexer;
pub use metrics::{evaluate, ConfusionMatrix, EvaluationReport};
pub use types::{tokenize, FeatureKind, Label, ModelKind, SentimentExample};
