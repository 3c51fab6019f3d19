//! Snapshot observers module
//!
//! Observers poll the published timer snapshot once per engine tick. They keep
//! their own bookkeeping and never feed anything back into the engine.

pub mod audio_cues;
pub mod indicators;

// Re-export main types
pub use audio_cues::{AudioCues, Cue, CueSink, LogCueSink};
pub use indicators::{IndicatorDriver, IndicatorPanel, LogIndicatorDriver};

use crate::state::TimerSnapshot;

/// A consumer of timer snapshots driven from the engine loop.
///
/// Implementations must not block: they run on the same task that owns the
/// engine. Failures are handled internally.
pub trait Observer: Send {
    /// Inspect the snapshot produced by the latest tick.
    fn observe(&mut self, snapshot: &TimerSnapshot);

    /// Release outputs when the engine loop stops.
    fn shutdown(&mut self) {}
}
