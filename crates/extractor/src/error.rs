//! Error — crate-level error taxonomy for extraction calls.

use thiserror::Error;

use crate::filter::engine::PatternError;
use crate::source::SourceError;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("max_lines must be positive (got {0})")]
    InvalidParameter(usize),

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Source(#[from] SourceError),
}
