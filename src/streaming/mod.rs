//! Windowed chunk streaming around the player

pub mod streamer;

pub use streamer::{ChunkStreamer, TickStats};
