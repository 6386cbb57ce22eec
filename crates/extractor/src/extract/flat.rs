//! Flat extraction — matched lines only, scanned bottom-up.
//!
//! The scan starts at the most recent line and walks backward so that the
//! line budget is spent on the newest matches; the collected lines are then
//! reversed back into chronological order before joining.

use crate::filter::engine::PatternSet;

/// Scan `lines` from the end backward and return up to `max_lines` matched
/// lines joined by newline, oldest first. No matches yields `""`.
pub fn scan_bottom_up(lines: &[String], patterns: &PatternSet, max_lines: usize) -> String {
    let mut matched: Vec<&str> = Vec::new();

    for line in lines.iter().rev() {
        if matched.len() >= max_lines {
            break;
        }
        if patterns.matches(line) {
            matched.push(line);
        }
    }

    matched.reverse();
    matched.join("\n")
}
