//! Countdown indicator bank driven by the shot clock

use tracing::debug;

use super::Observer;
use crate::state::{timer_engine::shot_seconds, TimerSnapshot};

/// Output for a bank of discrete indicators (LEDs, lamps, ...)
pub trait IndicatorDriver: Send {
    /// Light the first `lit` of `total` indicators and switch the rest off.
    ///
    /// Hardware errors are handled inside the driver.
    fn show(&mut self, lit: usize, total: usize);
}

/// Driver that logs the bank as a row of symbols
#[derive(Debug, Default)]
pub struct LogIndicatorDriver;

impl IndicatorDriver for LogIndicatorDriver {
    fn show(&mut self, lit: usize, total: usize) {
        let row: String = (0..total).map(|i| if i < lit { '●' } else { '○' }).collect();
        debug!("Indicators: {}", row);
    }
}

impl<D: IndicatorDriver + ?Sized> IndicatorDriver for Box<D> {
    fn show(&mut self, lit: usize, total: usize) {
        (**self).show(lit, total)
    }
}

/// Number of indicators to light for a snapshot
pub fn lit_count(snapshot: &TimerSnapshot, total: usize) -> usize {
    if !snapshot.is_running() {
        return 0;
    }
    (shot_seconds(snapshot.shot_time_remaining) as usize).min(total)
}

/// Tracks the bank and only touches the driver when the lit count changes
pub struct IndicatorPanel<D: IndicatorDriver> {
    driver: D,
    total: usize,
    lit: Option<usize>,
}

impl<D: IndicatorDriver> IndicatorPanel<D> {
    pub fn new(total: usize, driver: D) -> Self {
        Self { driver, total, lit: None }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Currently lit indicators, `None` before the first update
    pub fn lit(&self) -> Option<usize> {
        self.lit
    }

    fn set(&mut self, lit: usize) {
        if self.lit != Some(lit) {
            self.driver.show(lit, self.total);
            self.lit = Some(lit);
        }
    }
}

impl<D: IndicatorDriver> Observer for IndicatorPanel<D> {
    fn observe(&mut self, snapshot: &TimerSnapshot) {
        let lit = lit_count(snapshot, self.total);
        self.set(lit);
    }

    fn shutdown(&mut self) {
        self.set(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Phase, TimerConfig, TimerEngine};

    #[derive(Default)]
    struct Recorder(Vec<usize>);

    impl IndicatorDriver for Recorder {
        fn show(&mut self, lit: usize, _total: usize) {
            self.0.push(lit);
        }
    }

    fn snapshot(phase: Phase, shot: f64) -> TimerSnapshot {
        let mut snapshot = TimerEngine::new(TimerConfig::default()).snapshot();
        snapshot.phase = phase;
        snapshot.shot_time_remaining = shot;
        snapshot
    }

    #[test]
    fn lit_count_follows_shot_clock_while_running() {
        assert_eq!(lit_count(&snapshot(Phase::Running, 15.0), 5), 5);
        assert_eq!(lit_count(&snapshot(Phase::Running, 3.2), 5), 4);
        assert_eq!(lit_count(&snapshot(Phase::Running, 0.0), 5), 0);
        assert_eq!(lit_count(&snapshot(Phase::Paused, 3.0), 5), 0);
        assert_eq!(lit_count(&snapshot(Phase::Idle, 15.0), 5), 0);
    }

    #[test]
    fn driver_only_sees_changes() {
        let mut panel = IndicatorPanel::new(5, Recorder::default());
        panel.observe(&snapshot(Phase::Running, 9.0));
        panel.observe(&snapshot(Phase::Running, 8.0));
        panel.observe(&snapshot(Phase::Running, 4.5));
        panel.observe(&snapshot(Phase::Running, 4.1));
        panel.observe(&snapshot(Phase::Running, 3.9));
        panel.shutdown();

        assert_eq!(panel.driver().0, vec![5, 4, 0]);
        assert_eq!(panel.lit(), Some(0));
    }
}
