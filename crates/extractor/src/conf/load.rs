//! Load — config loading from file and environment variables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::model::ExtractorConfig;

impl ExtractorConfig {
    /// Load configuration from file or environment variables
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = std::env::var("EXTRACTOR_CONFIG_FILE")
            .unwrap_or_else(|_| "/etc/logsift/extractor.toml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            tracing::info!("Loading configuration from: {}", config_path);
            Self::from_file(&config_path)?
        } else {
            tracing::info!(
                "Config file not found at {}, using environment variables",
                config_path
            );
            Self::from_env()
        };

        // Environment variables override file config
        if let Some(max) = env_usize("EXTRACTOR_MAX_LINES") {
            config.max_lines = max;
        }
        if let Some(context) = env_usize("EXTRACTOR_CONTEXT_LINES") {
            config.context_lines = context;
        }
        if let Ok(patterns) = std::env::var("EXTRACTOR_ERROR_PATTERNS") {
            config.error_patterns = patterns;
        }
        if let Ok(preset) = std::env::var("EXTRACTOR_PRESET") {
            config.preset = preset;
        }

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: ExtractorConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from environment variables with sensible defaults
    pub fn from_env() -> Self {
        Self {
            max_lines: env_usize("EXTRACTOR_MAX_LINES").unwrap_or(100),
            context_lines: env_usize("EXTRACTOR_CONTEXT_LINES").unwrap_or(0),
            error_patterns: std::env::var("EXTRACTOR_ERROR_PATTERNS").unwrap_or_default(),
            preset: std::env::var("EXTRACTOR_PRESET").unwrap_or_default(),
        }
    }
}

fn env_usize(name: &str) -> Option<usize> {
    std::env::var(name).ok().and_then(|s| s.parse().ok())
}
