//! # Senti
//!
//! Linear sentiment classifiers over hand-built bag-of-words features.
//! Re-exports the core models and the training driver.

pub use senti_core::*;
pub use senti_trainer::{data, run_experiment, train_model, ExperimentConfig, ExperimentReport, ModelConfig};
