//! Data loading for labeled and blind sentiment files.
//!
//! Labeled files hold one example per line as `<label>\t<sentence>` with a
//! label of `0` or `1`. Blind files hold one sentence per line. Sentences are
//! already tokenized and split on single spaces.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use senti_core::{tokenize, Label, Result, SentiError, SentimentExample};
use tracing::{debug, warn};

/// Parse one labeled line. Blank lines yield `Ok(None)`.
pub fn parse_labeled_line(line: &str, line_no: usize) -> Result<Option<SentimentExample>> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let Some((label_str, sentence)) = line.split_once('\t') else {
        return Err(SentiError::MalformedData {
            line: line_no,
            reason: "expected <label>\\t<sentence>".to_string(),
        });
    };

    let label: Label = label_str.parse().map_err(|e: SentiError| SentiError::MalformedData {
        line: line_no,
        reason: e.to_string(),
    })?;

    Ok(Some(SentimentExample::new(tokenize(sentence), label)))
}

/// Read labeled examples from any buffered reader. Malformed lines are
/// logged and skipped.
pub fn read_sentiment_examples_from<R: BufRead>(reader: R) -> Result<Vec<SentimentExample>> {
    let mut examples = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_labeled_line(&line, idx + 1) {
            Ok(Some(example)) => examples.push(example),
            Ok(None) => continue,
            Err(e) => warn!("skipping line: {}", e),
        }
    }

    Ok(examples)
}

/// Load labeled examples from a file.
pub fn read_sentiment_examples<P: AsRef<Path>>(path: P) -> Result<Vec<SentimentExample>> {
    let file = File::open(path.as_ref())?;
    let examples = read_sentiment_examples_from(BufReader::new(file))?;
    debug!(path = %path.as_ref().display(), count = examples.len(), "read labeled examples");
    Ok(examples)
}

/// Read unlabeled sentences from any buffered reader, skipping blank lines.
pub fn read_blind_examples_from<R: BufRead>(reader: R) -> Result<Vec<Vec<String>>> {
    let mut sentences = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        sentences.push(tokenize(&line));
    }
    Ok(sentences)
}

/// Load unlabeled sentences from a file.
pub fn read_blind_examples<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let file = File::open(path.as_ref())?;
    let sentences = read_blind_examples_from(BufReader::new(file))?;
    debug!(path = %path.as_ref().display(), count = sentences.len(), "read blind examples");
    Ok(sentences)
}

/// Write examples in the labeled format, one per line.
pub fn write_sentiment_examples_to<W: Write>(mut writer: W, examples: &[SentimentExample]) -> Result<()> {
    for example in examples {
        writeln!(writer, "{}", example)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write examples to `path`, replacing any existing file.
pub fn write_sentiment_examples<P: AsRef<Path>>(path: P, examples: &[SentimentExample]) -> Result<()> {
    let file = File::create(path)?;
    write_sentiment_examples_to(BufWriter::new(file), examples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_labeled_line() {
        let ex = parse_labeled_line("1\ta gripping , moving story\n", 1)
            .unwrap()
            .unwrap();
        assert_eq!(ex.label, Label::Positive);
        assert_eq!(ex.words, vec!["a", "gripping", ",", "moving", "story"]);

        assert!(parse_labeled_line("   ", 2).unwrap().is_none());
    }

    #[test]
    fn test_parse_errors_carry_line_numbers() {
        let err = parse_labeled_line("no tab here", 4).unwrap_err();
        assert!(matches!(err, SentiError::MalformedData { line: 4, .. }));

        let err = parse_labeled_line("x\tbad label", 9).unwrap_err();
        assert!(err.to_string().contains("line 9"));
        assert!(err.to_string().contains("invalid label"));
    }

    #[test]
    fn test_reader_skips_bad_lines() {
        let input = "0\tdull\n\nbroken line\n1\tgreat fun\n7\tnope\n";
        let examples = read_sentiment_examples_from(Cursor::new(input)).unwrap();

        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0].label, Label::Negative);
        assert_eq!(examples[1].words, vec!["great", "fun"]);
    }

    #[test]
    fn test_blind_reader() {
        let input = "first sentence here\n\nsecond one\n";
        let sentences = read_blind_examples_from(Cursor::new(input)).unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1], vec!["second", "one"]);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let examples = vec![
            SentimentExample::from_sentence("a dull mess", Label::Negative),
            SentimentExample::from_sentence("warm and witty", Label::Positive),
        ];
        write_sentiment_examples(&path, &examples).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "0\ta dull mess\n1\twarm and witty\n");
        assert_eq!(read_sentiment_examples(&path).unwrap(), examples);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_sentiment_examples("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, SentiError::Io(_)));
    }
}
