//! Block targeting and editing

pub mod targeting;

pub use targeting::{Editor, Target, target_block};
