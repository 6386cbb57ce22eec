//! Extract module — the extraction service tying sources, patterns, and
//! scan modes together.

pub mod block;
pub mod flat;

pub use block::{BLOCK_SEPARATOR, ERROR_MARKER};

use crate::error::ExtractError;
use crate::filter::resolve;
use crate::source::LogSource;

/// Fetch at least this many lines regardless of `max_lines`, so sparse
/// matches still have enough material to scan.
pub const FETCH_LIMIT_FLOOR: usize = 10_000;

/// Fetch this multiple of `max_lines` when it exceeds the floor.
pub const FETCH_LIMIT_FACTOR: usize = 10;

/// Sizing parameters for one extraction call.
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    /// Hard cap on content lines in the result.
    pub max_lines: usize,
    /// Context lines around each match; 0 selects flat mode.
    pub context_lines: usize,
}

impl ExtractionRequest {
    pub fn flat(max_lines: usize) -> Self {
        Self {
            max_lines,
            context_lines: 0,
        }
    }

    pub fn with_context(max_lines: usize, context_lines: usize) -> Self {
        Self {
            max_lines,
            context_lines,
        }
    }

    pub fn validate(&self) -> Result<(), ExtractError> {
        if self.max_lines == 0 {
            return Err(ExtractError::InvalidParameter(self.max_lines));
        }
        Ok(())
    }

    /// How many raw lines to pull from the log source. Bounds memory on very
    /// large logs while leaving the backward scan enough material when
    /// matches are rare.
    pub fn fetch_limit(&self) -> usize {
        self.max_lines
            .saturating_mul(FETCH_LIMIT_FACTOR)
            .max(FETCH_LIMIT_FLOOR)
    }
}

/// Extract the error-relevant excerpt of a build log.
///
/// Pattern priority: a non-blank `explicit_patterns` block wins outright;
/// otherwise `per_job_patterns` applies; with neither, the last `max_lines`
/// lines are returned unfiltered. Returns `""` when patterns are configured
/// but nothing matched.
pub fn extract(
    source: &dyn LogSource,
    explicit_patterns: Option<&str>,
    per_job_patterns: Option<&str>,
    request: &ExtractionRequest,
) -> Result<String, ExtractError> {
    request.validate()?;

    let resolved = resolve::resolve(explicit_patterns, per_job_patterns);
    if resolved.set.is_empty() {
        tracing::warn!("no error patterns configured, returning unfiltered tail");
        let tail = source.fetch_tail(request.max_lines)?;
        return Ok(tail.join("\n"));
    }

    let lines = source.fetch_tail(request.fetch_limit())?;
    tracing::debug!(
        scanned = lines.len(),
        patterns = resolved.set.len(),
        context_lines = request.context_lines,
        "scanning log tail"
    );

    let excerpt = if request.context_lines == 0 {
        flat::scan_bottom_up(&lines, &resolved.set, request.max_lines)
    } else {
        block::assemble_blocks(
            &lines,
            &resolved.set,
            request.max_lines,
            request.context_lines,
        )
    };

    Ok(excerpt)
}
