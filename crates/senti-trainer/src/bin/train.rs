//! Sentiment classifier training CLI.
//!
//! Trains the selected model on the training set, prints accuracy,
//! precision, recall and F1 on train and dev, and optionally labels a blind
//! test set.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use senti_core::{FeatureKind, ModelKind};
use senti_trainer::{run_experiment, ExperimentConfig, ModelConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser)]
#[command(name = "train")]
#[command(about = "Train and evaluate linear sentiment classifiers")]
#[command(version)]
struct Cli {
    /// Model to run: TRIVIAL, PERCEPTRON or LR
    #[arg(long, default_value = "PERCEPTRON")]
    model: ModelKind,

    /// Feats to use: UNIGRAM, BIGRAM or BETTER
    #[arg(long, default_value = "UNIGRAM")]
    feats: FeatureKind,

    /// Path to the training set
    #[arg(long, env = "SENTI_TRAIN_PATH", default_value = "data/train.txt")]
    train_path: PathBuf,

    /// Path to the dev set
    #[arg(long, env = "SENTI_DEV_PATH", default_value = "data/dev.txt")]
    dev_path: PathBuf,

    /// Path to the blind test set
    #[arg(long, env = "SENTI_BLIND_TEST_PATH", default_value = "data/test-blind.txt")]
    blind_test_path: PathBuf,

    /// Output path for blind test set predictions
    #[arg(long, env = "SENTI_TEST_OUTPUT_PATH", default_value = "test-blind.output.txt")]
    test_output_path: PathBuf,

    /// Label the blind test set and write the predictions
    #[arg(long)]
    run_on_test: bool,

    /// Override the number of training epochs
    #[arg(long)]
    epochs: Option<usize>,

    /// Override the learning rate
    #[arg(long)]
    learning_rate: Option<f64>,

    /// Override the shuffle seed
    #[arg(long)]
    seed: Option<u64>,

    /// Write the evaluation report as JSON to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

impl Cli {
    fn experiment(&self) -> ExperimentConfig {
        ExperimentConfig {
            model: ModelConfig {
                model: self.model,
                feats: self.feats,
                epochs: self.epochs,
                learning_rate: self.learning_rate,
                seed: self.seed,
            },
            train_path: self.train_path.clone(),
            dev_path: self.dev_path.clone(),
            blind_test_path: self.blind_test_path.clone(),
            test_output_path: self.test_output_path.clone(),
            run_on_test: self.run_on_test,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    info!(model = %cli.model, feats = %cli.feats, "starting");

    let report = run_experiment(&cli.experiment())?;

    println!("=====Train Accuracy=====");
    println!("{}", report.train);
    println!("=====Dev Accuracy=====");
    println!("{}", report.dev);
    println!(
        "Time for training and evaluation: {:.2} seconds",
        report.elapsed_secs
    );

    if let Some(path) = &cli.report {
        report.save(path)?;
        info!(path = %path.display(), "saved report");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["train"]).unwrap();
        assert_eq!(cli.model, ModelKind::Perceptron);
        assert_eq!(cli.feats, FeatureKind::Unigram);
        assert!(!cli.run_on_test);

        let experiment = cli.experiment();
        assert_eq!(experiment.model.training_config().unwrap().epochs, 12);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "train", "--model", "LR", "--feats", "BETTER", "--epochs", "4", "--run-on-test",
        ])
        .unwrap();
        assert_eq!(cli.model, ModelKind::LogisticRegression);
        assert_eq!(cli.feats, FeatureKind::Better);

        let experiment = cli.experiment();
        assert!(experiment.run_on_test);
        assert_eq!(experiment.model.training_config().unwrap().epochs, 4);
    }

    #[test]
    fn test_invalid_flags_are_descriptive() {
        let err = Cli::try_parse_from(["train", "--feats", "TRIGRAM"])
            .err()
            .unwrap()
            .to_string();
        assert!(err.contains("UNIGRAM, BIGRAM, or BETTER"));

        let err = Cli::try_parse_from(["train", "--model", "SVM"])
            .err()
            .unwrap()
            .to_string();
        assert!(err.contains("TRIVIAL, PERCEPTRON, or LR"));
    }
}
