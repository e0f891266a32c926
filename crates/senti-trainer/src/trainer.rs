//! Training driver: picks the extractor and classifier from configuration
//! flags, trains, evaluates and optionally labels a blind test set.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use serde::Serialize;
use senti_core::{
    build_extractor, evaluate, EvaluationReport, FeatureKind, LogisticRegressionClassifier,
    ModelKind, PerceptronClassifier, SentimentClassifier, SentimentExample, TrainingConfig,
    TrainingHistory, TrivialSentimentClassifier,
};
use tracing::info;

use crate::data::{read_blind_examples, read_sentiment_examples, write_sentiment_examples};

/// Which model to train and with which features and hyperparameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModelConfig {
    pub model: ModelKind,
    pub feats: FeatureKind,
    /// Overrides the per-model epoch count.
    pub epochs: Option<usize>,
    /// Overrides the per-model learning rate.
    pub learning_rate: Option<f64>,
    /// Overrides the per-model shuffle seed.
    pub seed: Option<u64>,
}

impl ModelConfig {
    pub fn new(model: ModelKind, feats: FeatureKind) -> Self {
        Self {
            model,
            feats,
            ..Self::default()
        }
    }

    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = Some(epochs);
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = Some(learning_rate);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Effective training hyperparameters, `None` for the trivial model.
    pub fn training_config(&self) -> Option<TrainingConfig> {
        let mut config = TrainingConfig::for_model(self.model, self.feats)?;
        if let Some(epochs) = self.epochs {
            config = config.with_epochs(epochs);
        }
        if let Some(lr) = self.learning_rate {
            config = config.with_learning_rate(lr);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Some(config)
    }
}

/// Train the classifier described by `config` on `train_exs`.
///
/// The trivial model ignores the feature selection entirely.
pub fn train_model(
    config: &ModelConfig,
    train_exs: &[SentimentExample],
) -> senti_core::Result<Box<dyn SentimentClassifier>> {
    let Some(training) = config.training_config() else {
        return Ok(Box::new(TrivialSentimentClassifier::new()));
    };

    info!(
        model = %config.model,
        feats = %config.feats,
        epochs = training.epochs,
        learning_rate = training.learning_rate,
        seed = training.seed,
        examples = train_exs.len(),
        "training"
    );

    let extractor = build_extractor(config.feats);
    let model: Box<dyn SentimentClassifier> = match config.model {
        ModelKind::Perceptron => Box::new(PerceptronClassifier::train(train_exs, extractor, &training)?),
        ModelKind::LogisticRegression => {
            Box::new(LogisticRegressionClassifier::train(train_exs, extractor, &training)?)
        }
        ModelKind::Trivial => Box::new(TrivialSentimentClassifier::new()),
    };
    Ok(model)
}

/// Inputs and outputs of one end-to-end run.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    pub model: ModelConfig,
    pub train_path: PathBuf,
    pub dev_path: PathBuf,
    pub blind_test_path: PathBuf,
    pub test_output_path: PathBuf,
    /// Label the blind test set and write the predictions.
    pub run_on_test: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            train_path: PathBuf::from("data/train.txt"),
            dev_path: PathBuf::from("data/dev.txt"),
            blind_test_path: PathBuf::from("data/test-blind.txt"),
            test_output_path: PathBuf::from("test-blind.output.txt"),
            run_on_test: false,
        }
    }
}

/// Everything a run measured.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentReport {
    pub config: ModelConfig,
    pub train: EvaluationReport,
    pub dev: EvaluationReport,
    pub history: Option<TrainingHistory>,
    pub blind_predictions: Option<usize>,
    pub elapsed_secs: f64,
}

impl ExperimentReport {
    /// Write the report as pretty JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)
            .with_context(|| format!("failed to write report to {}", path.as_ref().display()))?;
        Ok(())
    }
}

/// Load data, train, evaluate on train and dev, and label the blind set if
/// requested.
pub fn run_experiment(config: &ExperimentConfig) -> anyhow::Result<ExperimentReport> {
    for path in [&config.train_path, &config.dev_path] {
        if !path.exists() {
            anyhow::bail!("Data not found: {}", path.display());
        }
    }

    let train_exs = read_sentiment_examples(&config.train_path)
        .with_context(|| format!("failed to read {}", config.train_path.display()))?;
    let dev_exs = read_sentiment_examples(&config.dev_path)
        .with_context(|| format!("failed to read {}", config.dev_path.display()))?;
    info!(
        train = train_exs.len(),
        dev = dev_exs.len(),
        "{} / {} train/dev examples",
        train_exs.len(),
        dev_exs.len()
    );

    let start = Instant::now();
    let model = train_model(&config.model, &train_exs)?;
    let train = evaluate(model.as_ref(), &train_exs);
    let dev = evaluate(model.as_ref(), &dev_exs);

    let blind_predictions = if config.run_on_test {
        let sentences = read_blind_examples(&config.blind_test_path)
            .with_context(|| format!("failed to read {}", config.blind_test_path.display()))?;
        let labeled: Vec<SentimentExample> = sentences
            .into_iter()
            .map(|words| {
                let label = model.predict(&words);
                SentimentExample::new(words, label)
            })
            .collect();
        write_sentiment_examples(&config.test_output_path, &labeled).with_context(|| {
            format!("failed to write {}", config.test_output_path.display())
        })?;
        info!(
            count = labeled.len(),
            path = %config.test_output_path.display(),
            "wrote blind test predictions"
        );
        Some(labeled.len())
    } else {
        None
    };

    Ok(ExperimentReport {
        config: config.model.clone(),
        train,
        dev,
        history: model.training_history().cloned(),
        blind_predictions,
        elapsed_secs: start.elapsed().as_secs_f64(),
    })
}
