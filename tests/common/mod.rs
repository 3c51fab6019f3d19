//! Shared test infrastructure for shot-clock integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use shot_clock::observers::{Cue, CueSink, IndicatorDriver};
use shot_clock::state::{Clock, TimerConfig, TimerEngine};

// ============================================================================
// Mock Time Source
// ============================================================================

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: Instant,
    offset: Arc<Mutex<Duration>>,
}

impl ManualClock {
    /// Starts well after `base` so the clock can also be wound backwards
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Arc::new(Mutex::new(Duration::from_secs(10_000))),
        }
    }

    pub fn advance(&self, seconds: f64) {
        *self.offset.lock().unwrap() += Duration::from_secs_f64(seconds);
    }

    pub fn rewind(&self, seconds: f64) {
        *self.offset.lock().unwrap() -= Duration::from_secs_f64(seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + *self.offset.lock().unwrap()
    }
}

/// Engine with the standard 600/300/15/10/5/3 rules on a manual clock
pub fn engine_with_clock() -> (TimerEngine<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    (TimerEngine::with_clock(TimerConfig::default(), clock.clone()), clock)
}

// ============================================================================
// Recording Observers
// ============================================================================

/// Cue sink whose history stays readable after it is moved into a runner
#[derive(Debug, Clone, Default)]
pub struct RecordingCueSink {
    cues: Arc<Mutex<Vec<Cue>>>,
}

impl RecordingCueSink {
    pub fn cues(&self) -> Vec<Cue> {
        self.cues.lock().unwrap().clone()
    }
}

impl CueSink for RecordingCueSink {
    fn play(&mut self, cue: Cue) {
        self.cues.lock().unwrap().push(cue);
    }
}

/// Indicator driver recording every lit count it is asked to show
#[derive(Debug, Clone, Default)]
pub struct RecordingIndicators {
    history: Arc<Mutex<Vec<usize>>>,
}

impl RecordingIndicators {
    pub fn history(&self) -> Vec<usize> {
        self.history.lock().unwrap().clone()
    }
}

impl IndicatorDriver for RecordingIndicators {
    fn show(&mut self, lit: usize, _total: usize) {
        self.history.lock().unwrap().push(lit);
    }
}
