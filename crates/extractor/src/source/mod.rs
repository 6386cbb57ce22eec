//! Source module — where raw console lines come from.
//!
//! The engine itself never performs I/O while scanning; a [`LogSource`]
//! hands it an in-memory tail before the scan starts.

pub mod file;
pub mod memory;

pub use file::FileLogSource;
pub use memory::MemoryLogSource;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read log source: {0}")]
    Io(#[from] std::io::Error),

    #[error("log source unavailable: {0}")]
    Unavailable(String),
}

/// A build's console log, read tail-first.
pub trait LogSource {
    /// Return up to the last `max_count` lines in chronological order
    /// (oldest first). Lines are UTF-8 text without trailing newlines.
    fn fetch_tail(&self, max_count: usize) -> Result<Vec<String>, SourceError>;
}
