//! Filter module — pattern compilation, source resolution, and preset bundles.

pub mod engine;
pub mod preset;
pub mod resolve;

pub use engine::{CompiledPattern, PatternError, PatternSet};
pub use preset::PatternPreset;
pub use resolve::{resolve, PatternSource, ResolvedPatterns};
