use serde::{Deserialize, Serialize};

use crate::filter::preset::PatternPreset;

/// Extraction defaults as persisted in configuration.
///
/// These are plain values for the caller to pass into `extract` — the
/// engine itself never reads ambient configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    pub max_lines: usize,
    pub context_lines: usize,
    /// Newline-separated custom pattern block. Wins over `preset`.
    pub error_patterns: String,
    /// Preset bundle name; unknown names mean no preset.
    pub preset: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_lines: 100,
            context_lines: 0,
            error_patterns: String::new(),
            preset: String::new(),
        }
    }
}

impl ExtractorConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.max_lines == 0 {
            return Err("max_lines must be > 0".to_string());
        }
        Ok(())
    }

    /// The default pattern block to hand to `extract` as the per-job
    /// argument: custom patterns win over the preset selection.
    pub fn pattern_block(&self) -> Option<String> {
        if !self.error_patterns.trim().is_empty() {
            return Some(self.error_patterns.clone());
        }
        PatternPreset::from_name(&self.preset).pattern_block()
    }
}
