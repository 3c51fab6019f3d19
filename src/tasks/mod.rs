//! Background tasks module
//!
//! This module contains the tasks that run alongside the HTTP server: the
//! engine loop and the keyboard input dispatcher.

pub mod engine_loop;
pub mod keyboard_input;

// Re-export main functions
pub use engine_loop::{engine_loop_task, EngineRunner};
pub use keyboard_input::keyboard_input_task;
