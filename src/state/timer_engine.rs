//! Frame and shot clock state machine

use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::{Clock, MonotonicClock, TimerConfig, TimerSnapshot};

/// Phase of the frame clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No frame in progress, nothing advances.
    Idle,
    /// Frame clock advances; shot clock advances unless rolling.
    Running,
    /// Both clocks frozen until resumed.
    Paused,
}

/// Two coupled countdowns: the frame clock and the per-shot clock.
///
/// The engine does no locking of its own. It must be owned by a single
/// writer; see [`crate::tasks::engine_loop`] for the loop that owns it in
/// the server.
#[derive(Debug, Clone)]
pub struct TimerEngine<C: Clock = MonotonicClock> {
    config: TimerConfig,
    clock: C,
    frame_time_remaining: f64,
    shot_time_remaining: f64,
    phase: Phase,
    rolling: bool,
    last_tick: Option<Instant>,
}

impl TimerEngine<MonotonicClock> {
    /// Create an idle engine driven by the system monotonic clock
    pub fn new(config: TimerConfig) -> Self {
        Self::with_clock(config, MonotonicClock)
    }
}

impl<C: Clock> TimerEngine<C> {
    /// Create an idle engine with full durations, reading time from `clock`
    pub fn with_clock(config: TimerConfig, clock: C) -> Self {
        Self {
            frame_time_remaining: config.frame_duration,
            shot_time_remaining: config.shot_first_half,
            config,
            clock,
            phase: Phase::Idle,
            rolling: false,
            last_tick: None,
        }
    }

    /// Begin a fresh frame from any phase
    pub fn start_frame(&mut self) {
        self.frame_time_remaining = self.config.frame_duration;
        self.shot_time_remaining = self.config.shot_first_half;
        self.phase = Phase::Running;
        self.last_tick = Some(self.clock.now());
    }

    /// Return to the pre-start baseline without starting
    pub fn reset_frame(&mut self) {
        self.frame_time_remaining = self.config.frame_duration;
        self.shot_time_remaining = self.current_shot_duration();
        self.phase = Phase::Idle;
        self.last_tick = None;
    }

    /// Toggle between running and paused. Does nothing while idle.
    ///
    /// Resuming restarts elapsed-time accounting from now, so time spent
    /// paused is never charged to either clock.
    pub fn pause_frame(&mut self) {
        match self.phase {
            Phase::Running => {
                self.phase = Phase::Paused;
                self.last_tick = None;
            }
            Phase::Paused => {
                self.phase = Phase::Running;
                self.last_tick = Some(self.clock.now());
            }
            Phase::Idle => {}
        }
    }

    /// Grant a new shot using the duration for the current half
    pub fn reset_shot(&mut self) {
        if self.phase == Phase::Idle {
            return;
        }
        self.shot_time_remaining = self.current_shot_duration();
        self.restart_tick_if_running();
    }

    /// Suspend (or release) the shot clock while balls are rolling.
    ///
    /// Activating also grants a fresh shot. Deactivating leaves the shot
    /// clock where it is.
    pub fn set_rolling(&mut self, active: bool) {
        self.rolling = active;
        if active {
            self.shot_time_remaining = self.current_shot_duration();
            self.restart_tick_if_running();
        }
    }

    /// Apply wall time elapsed since the previous tick
    pub fn update(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(last_tick) = self.last_tick else {
            return;
        };

        let now = self.clock.now();
        // Backwards readings count as no elapsed time
        let delta = now.saturating_duration_since(last_tick).as_secs_f64();
        self.last_tick = Some(now);

        self.frame_time_remaining = (self.frame_time_remaining - delta).max(0.0);
        if self.frame_time_remaining <= 0.0 {
            self.frame_time_remaining = 0.0;
            self.phase = Phase::Idle;
            self.last_tick = None;
        }

        if !self.rolling {
            self.shot_time_remaining = (self.shot_time_remaining - delta).max(0.0);
        }
    }

    fn restart_tick_if_running(&mut self) {
        if self.phase == Phase::Running {
            self.last_tick = Some(self.clock.now());
        }
    }

    fn current_shot_duration(&self) -> f64 {
        self.config.shot_duration_for(self.frame_time_remaining)
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_rolling(&self) -> bool {
        self.rolling
    }

    pub fn frame_time_remaining(&self) -> f64 {
        self.frame_time_remaining
    }

    pub fn shot_time_remaining(&self) -> f64 {
        self.shot_time_remaining
    }

    /// Instant of the last applied tick, `None` unless running
    pub fn last_tick(&self) -> Option<Instant> {
        self.last_tick
    }

    /// Whether the remaining frame time is past the first-half boundary
    pub fn is_second_half(&self) -> bool {
        self.config.is_second_half(self.frame_time_remaining)
    }

    /// Frame clock as `MM:SS`
    pub fn frame_time_display(&self) -> String {
        format_frame_time(self.frame_time_remaining)
    }

    /// Shot clock in whole seconds, rounded up
    pub fn shot_time_display(&self) -> String {
        shot_seconds(self.shot_time_remaining).to_string()
    }

    pub fn is_shot_warning(&self) -> bool {
        self.shot_time_remaining > 0.0 && self.shot_time_remaining <= self.config.shot_warning
    }

    pub fn is_shot_critical(&self) -> bool {
        self.shot_time_remaining > 0.0 && self.shot_time_remaining <= self.config.shot_critical
    }

    /// Read-only view of everything observers are allowed to see
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            phase: self.phase,
            rolling: self.rolling,
            frame_time_remaining: self.frame_time_remaining,
            shot_time_remaining: self.shot_time_remaining,
            frame_display: self.frame_time_display(),
            shot_display: self.shot_time_display(),
            shot_warning: self.is_shot_warning(),
            shot_critical: self.is_shot_critical(),
            shot_duration: self.current_shot_duration(),
            second_half: self.is_second_half(),
        }
    }
}

/// Format remaining frame seconds as zero-padded `MM:SS`
pub fn format_frame_time(seconds: f64) -> String {
    let total = seconds.max(0.0);
    let minutes = (total / 60.0).floor() as u64;
    let secs = (total % 60.0).floor() as u64;
    format!("{:02}:{:02}", minutes, secs)
}

/// Whole shot seconds for display, rounded up and never negative
pub fn shot_seconds(seconds: f64) -> u32 {
    if seconds <= 0.0 {
        0
    } else {
        seconds.ceil() as u32
    }
}
