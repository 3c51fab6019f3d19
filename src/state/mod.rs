//! State management module
//!
//! This module contains the timer engine, its configuration and the
//! shared state used to reach it.

pub mod clock;
pub mod timer_config;
pub mod timer_engine;
pub mod snapshot;
pub mod command;
pub mod app_state;

// Re-export main types
pub use clock::{Clock, MonotonicClock};
pub use timer_config::TimerConfig;
pub use timer_engine::{Phase, TimerEngine};
pub use snapshot::TimerSnapshot;
pub use command::{CommandEnvelope, DispatchError, TimerCommand};
pub use app_state::{AppState, EngineChannels};
