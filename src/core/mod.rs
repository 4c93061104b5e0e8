//! Core engine types and utilities

pub mod types;
pub mod error;
pub mod logging;
pub mod rng;

pub use types::*;
pub use error::Error;
