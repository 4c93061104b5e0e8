//! Error types for the blockworld engine
//!
//! World mutation is deliberately infallible: unknown block names, duplicate
//! placements, and edits with no target all degrade to no-ops. Errors here
//! cover the fallible edges only (configuration files, invalid parameters).

use thiserror::Error;

/// Main error type for the engine
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Config(String),
}
