//! Immutable timing rules consumed by the engine

use serde::{Deserialize, Serialize};

/// Durations (in seconds) governing a frame and its shot clock.
///
/// Expected to satisfy `shot_first_half >= shot_second_half` and
/// `first_half_duration < frame_duration`. Neither is enforced; a violation
/// only collapses the engine into a single shot duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimerConfig {
    pub frame_duration: f64,
    pub first_half_duration: f64,
    pub shot_first_half: f64,
    pub shot_second_half: f64,
    pub shot_warning: f64,
    pub shot_critical: f64,
}

impl TimerConfig {
    /// Shot duration granted on a reset, given the remaining frame time
    pub fn shot_duration_for(&self, frame_time_remaining: f64) -> f64 {
        if frame_time_remaining > self.first_half_duration {
            self.shot_first_half
        } else {
            self.shot_second_half
        }
    }

    /// Whether the given remaining frame time falls in the second half
    pub fn is_second_half(&self, frame_time_remaining: f64) -> bool {
        frame_time_remaining <= self.first_half_duration
    }

    /// Upper bound for the shot clock
    pub fn max_shot_duration(&self) -> f64 {
        self.shot_first_half.max(self.shot_second_half)
    }

    /// Soft invariants this configuration breaks, as human readable messages
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.shot_first_half < self.shot_second_half {
            warnings.push(format!(
                "first-half shot time ({}s) is shorter than second-half shot time ({}s)",
                self.shot_first_half, self.shot_second_half
            ));
        }
        if self.first_half_duration >= self.frame_duration {
            warnings.push(format!(
                "first-half boundary ({}s) is not below the frame duration ({}s); only the second-half shot time will apply",
                self.first_half_duration, self.frame_duration
            ));
        }
        if self.shot_critical > self.shot_warning {
            warnings.push(format!(
                "critical threshold ({}s) is above the warning threshold ({}s)",
                self.shot_critical, self.shot_warning
            ));
        }
        warnings
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            frame_duration: 10.0 * 60.0,
            first_half_duration: 5.0 * 60.0,
            shot_first_half: 15.0,
            shot_second_half: 10.0,
            shot_warning: 5.0,
            shot_critical: 3.0,
        }
    }
}
