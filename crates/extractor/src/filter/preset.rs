//! Preset — named pattern bundles for common build ecosystems.
//!
//! Static data only; the engine core never consults presets. Callers turn a
//! preset into a newline-separated block via [`PatternPreset::pattern_block`]
//! and feed it through the normal resolution path.

/// Well-known error pattern bundles, selectable by name in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternPreset {
    None,
    Generic,
    Unity,
}

impl PatternPreset {
    /// Look up a preset by name (trimmed, case-insensitive).
    /// Unknown or empty names fall back to [`PatternPreset::None`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "generic" => PatternPreset::Generic,
            "unity" => PatternPreset::Unity,
            _ => PatternPreset::None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            PatternPreset::None => "None - Custom Patterns",
            PatternPreset::Generic => "Generic build errors",
            PatternPreset::Unity => "Unity (Xcode, Android, iOS)",
        }
    }

    pub fn patterns(self) -> &'static [&'static str] {
        match self {
            PatternPreset::None => &[],
            PatternPreset::Generic => GENERIC_PATTERNS,
            PatternPreset::Unity => UNITY_PATTERNS,
        }
    }

    /// Newline-joined pattern block ready for the resolver, or `None` for
    /// an empty bundle.
    pub fn pattern_block(self) -> Option<String> {
        let patterns = self.patterns();
        if patterns.is_empty() {
            None
        } else {
            Some(patterns.join("\n"))
        }
    }
}

/// Compact bundle matching common error indicators across toolchains.
const GENERIC_PATTERNS: &[&str] = &[
    r"(?i)\b(error|err|fatal|critical|panic(?:ked)?|exception)\b",
    r"(?i)\bfail(?:ed|ure)?\b",
    r"(?i)thread '.*' panicked",
];

/// Unity builds fan out to Xcode, Gradle, and make; the bundle covers all
/// three toolchains plus Unity's own exception types.
const UNITY_PATTERNS: &[&str] = &[
    // Unity-specific errors
    r"(?i)\bError\s*:\s*",
    r"(?i)\bCompilerError\b",
    r"(?i)\bBuildFailedException\b",
    r"(?i)\bUnityException\b",
    r"(?i)Assets/.*\.cs\(\d+,\d+\):\s*error",
    // Xcode errors (strict)
    r"(?i)^\s*\*\*\s*BUILD FAILED\s*\*\*",
    r"(?i)ld:\s*error:",
    r"(?i)clang:\s*error:",
    r"(?i)error:\s*(?:linker command failed|Build input file cannot be found)",
    r"(?i)❌\s*.*error",
    r"(?i)\berror:\s*[^\s]",
    // Android/Gradle errors (strict)
    r"(?i)BUILD FAILED",
    r"(?i)FAILURE:\s*Build failed",
    r"(?i)^\s*>\s*Task.*FAILED",
    r"(?i)Execution failed for task",
    r"(?i)\* What went wrong:",
    r"(?i)error:\s*package .* does not exist",
    r"(?i)error:\s*cannot find symbol",
    // Make/Build tool errors
    r"(?i)make:\s*\*\*\*.*Error",
    r"(?i)make\[\d+\]:\s*\*\*\*.*Error",
    r"(?i)ninja:\s*build stopped",
];
