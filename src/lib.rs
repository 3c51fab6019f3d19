//! Shot Clock - A frame and shot clock controller for timed snooker frames
//!
//! This library provides the two-tier countdown engine (frame clock and shot
//! clock), the loop that owns it, and the dispatchers and observers around it.

pub mod config;
pub mod state;
pub mod observers;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, Phase, TimerCommand, TimerConfig, TimerEngine, TimerSnapshot};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
