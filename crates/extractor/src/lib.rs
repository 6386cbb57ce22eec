// Domain-driven module structure for the Logsift extraction engine.

// Core infrastructure
pub mod error;
pub mod filter;
pub mod source;

// Domain modules
pub mod conf;
pub mod extract;
