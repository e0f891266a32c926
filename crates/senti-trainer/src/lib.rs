//! # Senti Trainer
//!
//! Glue around `senti-core`: reads labeled and blind example files, selects
//! and trains a classifier from configuration flags, evaluates it and writes
//! blind-set predictions.

pub mod data;
pub mod trainer;

pub use data::{
    read_blind_examples, read_sentiment_examples, write_sentiment_examples,
};
pub use trainer::{
    run_experiment, train_model, ExperimentConfig, ExperimentReport, ModelConfig,
};
