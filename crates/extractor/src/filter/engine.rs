use grep_matcher::Matcher;
use grep_regex::{RegexMatcher, RegexMatcherBuilder};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("invalid error pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// One error pattern compiled for line matching.
///
/// Matching is always case-insensitive: the patterns come from user
/// configuration where "error" is expected to catch "ERROR:" as well.
#[derive(Debug)]
pub struct CompiledPattern {
    source: String,
    matcher: RegexMatcher,
}

impl CompiledPattern {
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let matcher = RegexMatcherBuilder::new()
            .case_insensitive(true)
            .multi_line(false)
            .build(pattern)
            .map_err(|e| PatternError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            source: pattern.to_string(),
            matcher,
        })
    }

    /// The pattern string this matcher was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn is_match(&self, line: &str) -> bool {
        self.matcher.is_match(line.as_bytes()).unwrap_or(false)
    }
}

/// Ordered set of compiled patterns.
///
/// A line counts as matched on the first pattern that matches; later
/// patterns are not consulted, so a line can never be counted twice.
pub struct PatternSet {
    patterns: Vec<CompiledPattern>,
}

impl PatternSet {
    pub fn new(patterns: Vec<CompiledPattern>) -> Self {
        Self { patterns }
    }

    pub fn empty() -> Self {
        Self { patterns: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    pub fn matches(&self, line: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_valid_pattern() {
        let pattern = CompiledPattern::compile("error").expect("Failed to compile");
        assert_eq!(pattern.source(), "error");
    }

    #[test]
    fn test_compile_invalid_pattern() {
        let result = CompiledPattern::compile("[invalid");
        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("[invalid"), "error should name the pattern: {}", message);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let pattern = CompiledPattern::compile("error").expect("Failed to compile");
        assert!(pattern.is_match("Error: something"));
        assert!(pattern.is_match("error: something"));
        assert!(pattern.is_match("ERROR: something"));
        assert!(!pattern.is_match("all good"));
    }

    #[test]
    fn test_match_anywhere_in_line() {
        let pattern = CompiledPattern::compile("failed").expect("Failed to compile");
        assert!(pattern.is_match("2026-02-05 step 3 FAILED after 10s"));
    }

    #[test]
    fn test_set_first_match_semantics() {
        let set = PatternSet::new(vec![
            CompiledPattern::compile("error").unwrap(),
            CompiledPattern::compile("err").unwrap(),
        ]);
        // Matches both patterns, but counts exactly once.
        assert!(set.matches("ERROR: compile failed"));
        assert!(!set.matches("build ok"));
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let set = PatternSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.matches("ERROR: anything"));
    }
}
