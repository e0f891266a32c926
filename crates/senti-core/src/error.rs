use thiserror::Error;

/// Errors that can occur while building or training sentiment classifiers.
#[derive(Debug, Error)]
pub enum SentiError {
    /// The model flag did not name a known classifier.
    #[error("unknown model {0:?}: pass in TRIVIAL, PERCEPTRON, or LR to run the appropriate system")]
    InvalidModel(String),

    /// The feature flag did not name a known extractor.
    #[error("unknown features {0:?}: pass in UNIGRAM, BIGRAM, or BETTER to run the appropriate system")]
    InvalidFeatures(String),

    /// A label string was neither `0` nor `1`.
    #[error("invalid label {0:?}: expected 0 or 1")]
    InvalidLabel(String),

    /// A training configuration value is out of range.
    #[error("invalid training configuration: {0}")]
    InvalidConfig(String),

    /// Reading or writing example files failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A data file line could not be interpreted.
    #[error("malformed data at line {line}: {reason}")]
    MalformedData {
        /// 1-based line number in the source file.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
}

/// Result type alias for senti operations.
pub type Result<T> = std::result::Result<T, SentiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = SentiError::InvalidFeatures("TRIGRAM".into());
        assert!(err.to_string().contains("TRIGRAM"));
        assert!(err.to_string().contains("UNIGRAM, BIGRAM, or BETTER"));

        let err = SentiError::InvalidModel("SVM".into());
        assert!(err.to_string().contains("TRIVIAL, PERCEPTRON, or LR"));

        let err = SentiError::MalformedData {
            line: 7,
            reason: "missing tab".into(),
        };
        assert_eq!(err.to_string(), "malformed data at line 7: missing tab");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SentiError>();
    }
}
