//! Contextual extraction — error blocks with leading and trailing context.
//!
//! Unlike flat mode this scans forward: context has to be captured as it
//! naturally occurs around each match, and a look-behind buffer is much
//! simpler than buffering future lines against a backward scan. The
//! assembler is a small state machine over one pass:
//!
//! - non-matching lines roll through a bounded look-behind buffer until a
//!   match flushes them as leading context;
//! - after a match, the next `context_lines` non-matching lines are emitted
//!   directly as trailing context;
//! - a match arriving after the previous block fully closed opens a new
//!   block with a separator.
//!
//! The `max_lines` budget counts content lines only (matched + context);
//! the header and separators ride on top. Truncation can cut a block
//! mid-context — the budget is a hard cap, not a block-alignment guarantee.

use std::collections::VecDeque;

use crate::filter::engine::PatternSet;

/// Prefix marking a matched line inside a block.
pub const ERROR_MARKER: &str = ">>> ERROR: ";

/// Visual separator emitted at the start of every block.
pub const BLOCK_SEPARATOR: &str = "--- Error Block ---";

pub struct BlockAssembler<'a> {
    patterns: &'a PatternSet,
    max_lines: usize,
    context_lines: usize,
    look_behind: VecDeque<String>,
    lines_since_error: usize,
    emitted: Vec<String>,
    content_lines: usize,
    blocks_opened: usize,
}

impl<'a> BlockAssembler<'a> {
    pub fn new(patterns: &'a PatternSet, max_lines: usize, context_lines: usize) -> Self {
        Self {
            patterns,
            max_lines,
            context_lines,
            look_behind: VecDeque::new(),
            // Start above the threshold so no block is considered open.
            lines_since_error: context_lines + 1,
            emitted: Vec::new(),
            content_lines: 0,
            blocks_opened: 0,
        }
    }

    /// Feed one line through the state machine.
    /// Returns false once the content budget is exhausted; the caller
    /// should stop scanning.
    pub fn process(&mut self, line: &str) -> bool {
        if self.content_lines >= self.max_lines {
            return false;
        }

        if self.patterns.matches(line) {
            if self.lines_since_error > self.context_lines {
                self.open_block();
                while let Some(ctx) = self.look_behind.pop_front() {
                    if !self.push_content(ctx) {
                        return false;
                    }
                }
            }
            let marked = format!("{}{}", ERROR_MARKER, line);
            if !self.push_content(marked) {
                return false;
            }
            self.lines_since_error = 0;
            self.look_behind.clear();
        } else {
            self.lines_since_error += 1;
            if self.lines_since_error <= self.context_lines {
                // Trailing context for the most recent block.
                if !self.push_content(line.to_string()) {
                    return false;
                }
            } else {
                // Outside any context window: roll through the look-behind.
                self.look_behind.push_back(line.to_string());
                if self.look_behind.len() > self.context_lines {
                    self.look_behind.pop_front();
                }
            }
        }

        true
    }

    /// Finish the scan and render the excerpt.
    /// No blocks means no errors: the result is an empty string.
    pub fn finish(self) -> String {
        if self.blocks_opened == 0 {
            return String::new();
        }

        tracing::debug!(
            blocks = self.blocks_opened,
            content_lines = self.content_lines,
            "assembled contextual excerpt"
        );

        let mut out = Vec::with_capacity(self.emitted.len() + 1);
        out.push(header(self.context_lines));
        out.extend(self.emitted);
        out.join("\n")
    }

    fn open_block(&mut self) {
        // Blank line between blocks, omitted before the very first.
        if self.blocks_opened > 0 {
            self.emitted.push(String::new());
        }
        self.emitted.push(BLOCK_SEPARATOR.to_string());
        self.blocks_opened += 1;
    }

    fn push_content(&mut self, line: String) -> bool {
        if self.content_lines >= self.max_lines {
            return false;
        }
        self.emitted.push(line);
        self.content_lines += 1;
        true
    }
}

/// Run the assembler over a fetched window and render the result.
pub fn assemble_blocks(
    lines: &[String],
    patterns: &PatternSet,
    max_lines: usize,
    context_lines: usize,
) -> String {
    let mut assembler = BlockAssembler::new(patterns, max_lines, context_lines);
    for line in lines {
        if !assembler.process(line) {
            break;
        }
    }
    assembler.finish()
}

fn header(context_lines: usize) -> String {
    format!(
        "Error excerpt: lines marked '>>> ERROR:' matched an error pattern; up to {} line(s) of surrounding context are shown per match.",
        context_lines
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::resolve;

    fn patterns(block: &str) -> PatternSet {
        resolve::resolve(Some(block), None).set
    }

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    // ─── Single block ───────────────────────────────────────────

    #[test]
    fn test_single_block_with_context() {
        let log = lines(&["build start", "ERROR: compile failed", "step 2", "done"]);
        let result = assemble_blocks(&log, &patterns("ERROR"), 10, 1);

        let expected = format!(
            "{}\n{}\nbuild start\n>>> ERROR: ERROR: compile failed\nstep 2",
            header(1),
            BLOCK_SEPARATOR,
        );
        assert_eq!(result, expected);
    }

    #[test]
    fn test_header_names_context_width() {
        let log = lines(&["ERROR: x"]);
        let result = assemble_blocks(&log, &patterns("ERROR"), 10, 3);
        assert!(result.starts_with("Error excerpt:"));
        assert!(result.contains("up to 3 line(s)"));
    }

    #[test]
    fn test_no_match_yields_empty_string() {
        let log = lines(&["all", "fine", "here"]);
        let result = assemble_blocks(&log, &patterns("ERROR"), 10, 2);
        assert_eq!(result, "");
    }

    // ─── Context window behavior ────────────────────────────────

    #[test]
    fn test_leading_context_limited_to_window() {
        let log = lines(&["one", "two", "three", "four", "ERROR: boom"]);
        let result = assemble_blocks(&log, &patterns("ERROR"), 10, 2);

        // Only the two lines immediately before the match survive.
        assert!(!result.contains("\none\n"));
        assert!(!result.contains("\ntwo\n"));
        assert!(result.contains("three\nfour\n>>> ERROR: ERROR: boom"));
    }

    #[test]
    fn test_leading_context_shorter_at_log_start() {
        let log = lines(&["ERROR: first line of log", "after"]);
        let result = assemble_blocks(&log, &patterns("ERROR"), 10, 3);

        let expected = format!(
            "{}\n{}\n>>> ERROR: ERROR: first line of log\nafter",
            header(3),
            BLOCK_SEPARATOR,
        );
        assert_eq!(result, expected);
    }

    #[test]
    fn test_trailing_context_stops_after_window() {
        let log = lines(&["ERROR: boom", "t1", "t2", "far away", "farther"]);
        let result = assemble_blocks(&log, &patterns("ERROR"), 10, 2);

        assert!(result.contains(">>> ERROR: ERROR: boom\nt1\nt2"));
        assert!(!result.contains("far away"));
        assert!(!result.contains("farther"));
    }

    // ─── Block boundaries ───────────────────────────────────────

    #[test]
    fn test_adjacent_matches_share_a_block() {
        let log = lines(&["ctx", "ERROR: one", "ERROR: two", "after"]);
        let result = assemble_blocks(&log, &patterns("ERROR"), 10, 1);

        assert_eq!(result.matches(BLOCK_SEPARATOR).count(), 1);
        assert!(result.contains(">>> ERROR: ERROR: one\n>>> ERROR: ERROR: two"));
    }

    #[test]
    fn test_match_inside_trailing_context_continues_block() {
        // The second match arrives while the first block's trailing window
        // is still open, so no new separator is emitted.
        let log = lines(&["ERROR: one", "between", "ERROR: two"]);
        let result = assemble_blocks(&log, &patterns("ERROR"), 10, 1);

        assert_eq!(result.matches(BLOCK_SEPARATOR).count(), 1);
        assert!(result.contains(">>> ERROR: ERROR: one\nbetween\n>>> ERROR: ERROR: two"));
    }

    #[test]
    fn test_distant_matches_get_separate_blocks() {
        let log = lines(&[
            "ERROR: one",
            "a", "b", "c", "d",
            "ERROR: two",
        ]);
        let result = assemble_blocks(&log, &patterns("ERROR"), 20, 1);

        assert_eq!(result.matches(BLOCK_SEPARATOR).count(), 2);
        // Blank line between blocks, none before the first.
        let expected = format!(
            "{}\n{}\n>>> ERROR: ERROR: one\na\n\n{}\nd\n>>> ERROR: ERROR: two",
            header(1),
            BLOCK_SEPARATOR,
            BLOCK_SEPARATOR,
        );
        assert_eq!(result, expected);
    }

    // ─── Zero-context degenerate mode ───────────────────────────

    #[test]
    fn test_zero_context_marks_each_error_alone() {
        let log = lines(&["noise", "ERROR: one", "noise", "ERROR: two", "noise"]);
        let result = assemble_blocks(&log, &patterns("ERROR"), 10, 0);

        assert_eq!(result.matches(BLOCK_SEPARATOR).count(), 2);
        assert!(result.contains(">>> ERROR: ERROR: one"));
        assert!(result.contains(">>> ERROR: ERROR: two"));
        assert!(!result.contains("\nnoise"));
    }

    #[test]
    fn test_zero_context_contiguous_errors_one_block() {
        let log = lines(&["ERROR: one", "ERROR: two"]);
        let result = assemble_blocks(&log, &patterns("ERROR"), 10, 0);
        assert_eq!(result.matches(BLOCK_SEPARATOR).count(), 1);
    }

    // ─── Budget enforcement ─────────────────────────────────────

    #[test]
    fn test_budget_counts_context_and_matches() {
        let log = lines(&["lead", "ERROR: boom", "trail", "more trail"]);
        // Budget of 2: leading context + the marked line, nothing else.
        let result = assemble_blocks(&log, &patterns("ERROR"), 2, 2);

        let expected = format!(
            "{}\n{}\nlead\n>>> ERROR: ERROR: boom",
            header(2),
            BLOCK_SEPARATOR,
        );
        assert_eq!(result, expected);
    }

    #[test]
    fn test_budget_can_cut_block_before_marked_line() {
        let log = lines(&["a", "b", "ERROR: boom"]);
        // Budget of 1 is spent on the first leading-context line.
        let result = assemble_blocks(&log, &patterns("ERROR"), 1, 2);

        let expected = format!("{}\n{}\na", header(2), BLOCK_SEPARATOR);
        assert_eq!(result, expected);
    }

    #[test]
    fn test_budget_stops_later_blocks() {
        let log = lines(&[
            "ERROR: one", "t1",
            "x", "y", "z",
            "ERROR: two", "t2",
        ]);
        let result = assemble_blocks(&log, &patterns("ERROR"), 2, 1);

        assert_eq!(result.matches(BLOCK_SEPARATOR).count(), 1);
        assert!(result.contains(">>> ERROR: ERROR: one\nt1"));
        assert!(!result.contains("ERROR: two"));
    }

    #[test]
    fn test_content_lines_never_exceed_budget() {
        let log: Vec<String> = (0..200)
            .map(|i| {
                if i % 3 == 0 {
                    format!("ERROR {}", i)
                } else {
                    format!("line {}", i)
                }
            })
            .collect();
        let result = assemble_blocks(&log, &patterns("ERROR"), 10, 2);

        let content = result
            .lines()
            .skip(1) // header
            .filter(|l| !l.is_empty() && *l != BLOCK_SEPARATOR)
            .count();
        assert!(content <= 10, "content lines {} exceed budget", content);
    }
}
