//! Memory — deterministic in-memory log source.
//!
//! Useful for unit-testing extraction logic and for callers that already
//! hold the console text (e.g. received over an API).

use super::{LogSource, SourceError};

pub struct MemoryLogSource {
    lines: Vec<String>,
}

impl MemoryLogSource {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn from_lines(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Split a full console text into a source, one entry per line.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }
}

impl LogSource for MemoryLogSource {
    fn fetch_tail(&self, max_count: usize) -> Result<Vec<String>, SourceError> {
        let start = self.lines.len().saturating_sub(max_count);
        Ok(self.lines[start..].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_shorter_than_log() {
        let source = MemoryLogSource::from_lines(&["a", "b", "c", "d"]);
        assert_eq!(source.fetch_tail(2).unwrap(), vec!["c", "d"]);
    }

    #[test]
    fn test_tail_longer_than_log() {
        let source = MemoryLogSource::from_lines(&["a", "b"]);
        assert_eq!(source.fetch_tail(10).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_tail_exact_length() {
        let source = MemoryLogSource::from_lines(&["a", "b"]);
        assert_eq!(source.fetch_tail(2).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_tail_zero() {
        let source = MemoryLogSource::from_lines(&["a", "b"]);
        assert!(source.fetch_tail(0).unwrap().is_empty());
    }

    #[test]
    fn test_from_text_splits_lines() {
        let source = MemoryLogSource::from_text("one\ntwo\nthree\n");
        assert_eq!(source.fetch_tail(10).unwrap(), vec!["one", "two", "three"]);
    }
}
