//! File — console log persisted on disk, read tail-first.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use super::{LogSource, SourceError};

/// Reads the tail of a console log file.
///
/// The whole file is streamed once, but at most `max_count` lines are held
/// in memory at any time, so arbitrarily large logs stay bounded.
pub struct FileLogSource {
    path: PathBuf,
}

impl FileLogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LogSource for FileLogSource {
    fn fetch_tail(&self, max_count: usize) -> Result<Vec<String>, SourceError> {
        if max_count == 0 {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);

        let mut tail: VecDeque<String> = VecDeque::new();
        for line in reader.lines() {
            let line = line?;
            if tail.len() == max_count {
                tail.pop_front();
            }
            tail.push_back(line);
        }

        Ok(tail.into_iter().collect())
    }
}
