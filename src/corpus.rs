//! In-memory corpus, loaded once at startup and never mutated afterwards.

use std::path::Path;

use crate::error::CorpusError;
use crate::models::{CorpusFile, LineRecord};

/// Ordered, read-only collection of lines. Positions matter: context lookups
/// use the previous and next index.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    lines: Vec<LineRecord>,
}

impl Corpus {
    /// Read and parse the corpus file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| CorpusError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: CorpusFile =
            serde_json::from_slice(&bytes).map_err(|source| CorpusError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_lines(file.data))
    }

    pub fn from_lines(lines: Vec<LineRecord>) -> Self {
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LineRecord> {
        self.lines.get(index)
    }

    pub fn lines(&self) -> &[LineRecord] {
        &self.lines
    }

    /// Text of the line before `index`, empty for the first line
    pub fn line_before(&self, index: usize) -> &str {
        index
            .checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .map(|line| line.text_entry.as_str())
            .unwrap_or("")
    }

    /// Text of the line after `index`, empty for the last line
    pub fn line_after(&self, index: usize) -> &str {
        index
            .checked_add(1)
            .and_then(|i| self.lines.get(i))
            .map(|line| line.text_entry.as_str())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn line(text: &str) -> LineRecord {
        LineRecord {
            text_entry: text.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_neighbours_are_bounds_checked() {
        let corpus = Corpus::from_lines(vec![line("first"), line("second"), line("third")]);

        assert_eq!(corpus.line_before(0), "");
        assert_eq!(corpus.line_after(0), "second");
        assert_eq!(corpus.line_before(1), "first");
        assert_eq!(corpus.line_after(1), "third");
        assert_eq!(corpus.line_before(2), "second");
        assert_eq!(corpus.line_after(2), "");
        // Out of range entirely
        assert_eq!(corpus.line_after(usize::MAX), "");
        assert_eq!(corpus.line_before(10), "");
    }

    #[test]
    fn test_single_line_has_no_neighbours() {
        let corpus = Corpus::from_lines(vec![line("alone")]);
        assert_eq!(corpus.line_before(0), "");
        assert_eq!(corpus.line_after(0), "");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"data": [
                {{"type": "act", "line_id": 1, "play_name": "Hamlet", "text_entry": "ACT I"}},
                {{"type": "line", "line_id": 2, "play_name": "Hamlet", "line_number": "3.1.64",
                  "speaker": "HAMLET", "text_entry": "To be, or not to be",
                  "words_list": ["to", "be", "or", "not", "to", "be"]}}
            ]}}"#
        )
        .unwrap();

        let corpus = Corpus::load(file.path()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get(1).unwrap().speaker, "HAMLET");
        assert_eq!(corpus.get(1).unwrap().tokens.len(), 6);
        assert!(corpus.get(2).is_none());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Corpus::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CorpusError::Read { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"data\": [ {{ ").unwrap();
        let err = Corpus::load(file.path()).unwrap_err();
        assert!(matches!(err, CorpusError::Parse { .. }));
    }
}
