//! Read-only timer view handed to presentation and observers

use serde::{Deserialize, Serialize};

use super::Phase;

/// Values observers poll once per tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub phase: Phase,
    pub rolling: bool,
    pub frame_time_remaining: f64,
    pub shot_time_remaining: f64,
    /// Frame clock as `MM:SS`
    pub frame_display: String,
    /// Shot clock in whole seconds, rounded up
    pub shot_display: String,
    pub shot_warning: bool,
    pub shot_critical: bool,
    /// Duration the next shot reset would grant
    pub shot_duration: f64,
    pub second_half: bool,
}

impl TimerSnapshot {
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}
