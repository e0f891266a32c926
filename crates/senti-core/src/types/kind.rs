use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SentiError;

/// Classifier selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ModelKind {
    /// Always predicts positive.
    #[serde(rename = "TRIVIAL")]
    Trivial,
    /// Online perceptron.
    #[serde(rename = "PERCEPTRON")]
    Perceptron,
    /// Online logistic regression.
    #[serde(rename = "LR")]
    LogisticRegression,
}

impl Default for ModelKind {
    fn default() -> Self {
        Self::Perceptron
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trivial => write!(f, "TRIVIAL"),
            Self::Perceptron => write!(f, "PERCEPTRON"),
            Self::LogisticRegression => write!(f, "LR"),
        }
    }
}

impl FromStr for ModelKind {
    type Err = SentiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TRIVIAL" => Ok(Self::Trivial),
            "PERCEPTRON" => Ok(Self::Perceptron),
            "LR" => Ok(Self::LogisticRegression),
            other => Err(SentiError::InvalidModel(other.to_string())),
        }
    }
}

/// Feature extractor selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FeatureKind {
    /// Lower-cased, de-duplicated unigrams.
    #[serde(rename = "UNIGRAM")]
    Unigram,
    /// Adjacent lower-cased token pairs.
    #[serde(rename = "BIGRAM")]
    Bigram,
    /// Filtered unigrams (stop words, punctuation, title case removed).
    #[serde(rename = "BETTER")]
    Better,
}

impl FeatureKind {
    /// Slot capacity of the extractor this kind builds.
    #[must_use]
    pub fn capacity(self) -> usize {
        match self {
            Self::Unigram => 15_000,
            Self::Bigram => 75_000,
            Self::Better => 14_000,
        }
    }
}

impl Default for FeatureKind {
    fn default() -> Self {
        Self::Unigram
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unigram => write!(f, "UNIGRAM"),
            Self::Bigram => write!(f, "BIGRAM"),
            Self::Better => write!(f, "BETTER"),
        }
    }
}

impl FromStr for FeatureKind {
    type Err = SentiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNIGRAM" => Ok(Self::Unigram),
            "BIGRAM" => Ok(Self::Bigram),
            "BETTER" => Ok(Self::Better),
            other => Err(SentiError::InvalidFeatures(other.to_string())),
        }
    }
}
