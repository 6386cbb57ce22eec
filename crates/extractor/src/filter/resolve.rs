//! Pattern source resolution: explicit block → per-job block → none.
//!
//! Both blocks are newline-separated pattern lists as entered by a user.
//! The explicit block wins outright when it contains at least one non-blank
//! line; the per-job block is only consulted as a fallback, never merged.

use super::engine::{CompiledPattern, PatternError, PatternSet};

/// Which configuration source supplied the patterns for this extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSource {
    Explicit(Vec<String>),
    PerJob(Vec<String>),
    None,
}

impl PatternSource {
    /// Pick the governing source by priority: explicit > per-job > none.
    ///
    /// A block whose lines are all blank after trimming counts as absent.
    pub fn select(explicit: Option<&str>, per_job: Option<&str>) -> Self {
        let explicit_lines = non_blank_lines(explicit);
        if !explicit_lines.is_empty() {
            return PatternSource::Explicit(explicit_lines);
        }

        let per_job_lines = non_blank_lines(per_job);
        if !per_job_lines.is_empty() {
            return PatternSource::PerJob(per_job_lines);
        }

        PatternSource::None
    }

    pub fn patterns(&self) -> &[String] {
        match self {
            PatternSource::Explicit(p) | PatternSource::PerJob(p) => p,
            PatternSource::None => &[],
        }
    }

    fn name(&self) -> &'static str {
        match self {
            PatternSource::Explicit(_) => "explicit",
            PatternSource::PerJob(_) => "per_job",
            PatternSource::None => "none",
        }
    }
}

/// Outcome of resolving and compiling the configured patterns.
///
/// Patterns that fail to compile land in `rejected` instead of aborting
/// the extraction: one bad pattern must not disable all filtering.
pub struct ResolvedPatterns {
    pub set: PatternSet,
    pub rejected: Vec<PatternError>,
}

/// Resolve the pattern source and compile its patterns case-insensitively.
///
/// An empty resulting set means "no filtering requested" — the extractor
/// falls back to an unfiltered tail.
pub fn resolve(explicit: Option<&str>, per_job: Option<&str>) -> ResolvedPatterns {
    let source = PatternSource::select(explicit, per_job);
    tracing::debug!(
        source = source.name(),
        count = source.patterns().len(),
        "resolved pattern source"
    );

    let mut compiled = Vec::new();
    let mut rejected = Vec::new();
    for raw in source.patterns() {
        match CompiledPattern::compile(raw) {
            Ok(pattern) => compiled.push(pattern),
            Err(err) => {
                tracing::warn!(pattern = %raw, error = %err, "skipping pattern that failed to compile");
                rejected.push(err);
            }
        }
    }

    ResolvedPatterns {
        set: PatternSet::new(compiled),
        rejected,
    }
}

fn non_blank_lines(block: Option<&str>) -> Vec<String> {
    block
        .map(|b| {
            b.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
