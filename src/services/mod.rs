//! External service module
//!
//! This module contains the integrations with programs outside the process,
//! currently the audio cue player.

pub mod cue_player;

// Re-export main types
pub use cue_player::CommandCueSink;
