//! Conf module — extraction defaults model and loading.

pub mod load;
pub mod model;

pub use model::ExtractorConfig;
