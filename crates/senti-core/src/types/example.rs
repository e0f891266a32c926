use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SentiError;

/// Binary sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Label {
    Negative,
    Positive,
}

impl Label {
    /// Integer form used in data files and metrics (`0` or `1`).
    #[must_use]
    pub fn as_int(self) -> u8 {
        match self {
            Self::Negative => 0,
            Self::Positive => 1,
        }
    }

    #[must_use]
    pub fn is_positive(self) -> bool {
        self == Self::Positive
    }
}

impl From<bool> for Label {
    fn from(positive: bool) -> Self {
        if positive {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_int())
    }
}

impl FromStr for Label {
    type Err = SentiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Self::Negative),
            "1" => Ok(Self::Positive),
            other => Err(SentiError::InvalidLabel(other.to_string())),
        }
    }
}

/// A tokenized sentence with its gold label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentExample {
    /// Tokens of the sentence, in order.
    pub words: Vec<String>,
    /// Gold label.
    pub label: Label,
}

impl SentimentExample {
    pub fn new(words: Vec<String>, label: Label) -> Self {
        Self { words, label }
    }

    /// Build an example by splitting `sentence` on single spaces.
    pub fn from_sentence(sentence: &str, label: Label) -> Self {
        Self::new(tokenize(sentence), label)
    }
}

impl fmt::Display for SentimentExample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.label, self.words.join(" "))
    }
}

/// Split a pre-tokenized sentence on spaces, dropping empty tokens.
pub fn tokenize(sentence: &str) -> Vec<String> {
    sentence
        .trim_end()
        .split(' ')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_parse_and_display() {
        assert_eq!("0".parse::<Label>().unwrap(), Label::Negative);
        assert_eq!("1".parse::<Label>().unwrap(), Label::Positive);
        assert!("2".parse::<Label>().is_err());
        assert_eq!(Label::Positive.to_string(), "1");
    }

    #[test]
    fn label_from_bool() {
        assert_eq!(Label::from(true), Label::Positive);
        assert_eq!(Label::from(false).as_int(), 0);
    }

    #[test]
    fn tokenize_drops_empty_tokens() {
        let words = tokenize("a  gripping , funny  film \n");
        assert_eq!(words, vec!["a", "gripping", ",", "funny", "film"]);
    }

    #[test]
    fn example_display_matches_file_format() {
        let ex = SentimentExample::from_sentence("a dull mess", Label::Negative);
        assert_eq!(ex.to_string(), "0\ta dull mess");
    }
}
