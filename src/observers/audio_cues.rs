//! Audio cue tracking for shot rule announcements, countdown ticks and expiry

use tracing::info;

use super::Observer;
use crate::state::{timer_engine::shot_seconds, TimerConfig, TimerSnapshot};

/// A sound the presentation should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Shot clock rule for the current half, in seconds.
    Announce { seconds: u32 },
    /// Countdown tick as the shot clock enters a new whole second.
    Tick { seconds: u32 },
    ShotExpired,
    FrameExpired,
}

impl Cue {
    /// Text handed to speech or sound players
    pub fn phrase(&self) -> String {
        match self {
            Cue::Announce { seconds } => format!("{} seconds shot clock", seconds),
            Cue::Tick { seconds } => seconds.to_string(),
            Cue::ShotExpired => "shot time".to_string(),
            Cue::FrameExpired => "frame time".to_string(),
        }
    }
}

/// Output for audio cues. Implementations absorb their own failures.
pub trait CueSink: Send {
    fn play(&mut self, cue: Cue);
}

/// Sink that only logs cues
#[derive(Debug, Default)]
pub struct LogCueSink;

impl CueSink for LogCueSink {
    fn play(&mut self, cue: Cue) {
        info!("Cue: {}", cue.phrase());
    }
}

impl<S: CueSink + ?Sized> CueSink for Box<S> {
    fn play(&mut self, cue: Cue) {
        (**self).play(cue)
    }
}

/// Turns successive snapshots into cues, emitting each at most once per
/// occurrence.
pub struct AudioCues<S: CueSink> {
    sink: S,
    enabled: bool,
    first_half_seconds: u32,
    second_half_seconds: u32,
    warning_seconds: u32,
    announced_first_half: bool,
    announced_second_half: bool,
    last_tick: Option<u32>,
    shot_expired_played: bool,
    frame_expired_played: bool,
}

impl<S: CueSink> AudioCues<S> {
    pub fn new(config: &TimerConfig, sink: S) -> Self {
        Self {
            sink,
            enabled: true,
            first_half_seconds: shot_seconds(config.shot_first_half),
            second_half_seconds: shot_seconds(config.shot_second_half),
            warning_seconds: shot_seconds(config.shot_warning),
            announced_first_half: false,
            announced_second_half: false,
            last_tick: None,
            shot_expired_played: false,
            frame_expired_played: false,
        }
    }

    /// Silence or re-enable all cues
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn check(&mut self, snapshot: &TimerSnapshot) {
        if !self.enabled {
            return;
        }

        // Expiry also moves the engine to idle, so watch the value itself
        if snapshot.frame_time_remaining <= 0.0 {
            if !self.frame_expired_played {
                self.sink.play(Cue::FrameExpired);
                self.frame_expired_played = true;
            }
        } else {
            self.frame_expired_played = false;
        }

        if !snapshot.is_running() {
            self.announced_first_half = false;
            self.announced_second_half = false;
            self.last_tick = None;
            return;
        }

        if !snapshot.second_half && !self.announced_first_half {
            self.sink.play(Cue::Announce { seconds: self.first_half_seconds });
            self.announced_first_half = true;
        }
        if snapshot.second_half && !self.announced_second_half {
            self.sink.play(Cue::Announce { seconds: self.second_half_seconds });
            self.announced_second_half = true;
        }

        if snapshot.rolling {
            return;
        }

        let seconds = shot_seconds(snapshot.shot_time_remaining);
        if (1..=self.warning_seconds).contains(&seconds) {
            if self.last_tick != Some(seconds) {
                self.sink.play(Cue::Tick { seconds });
                self.last_tick = Some(seconds);
            }
        } else {
            self.last_tick = None;
        }

        if seconds == 0 {
            if !self.shot_expired_played {
                self.sink.play(Cue::ShotExpired);
                self.shot_expired_played = true;
            }
        } else {
            self.shot_expired_played = false;
        }
    }
}

impl<S: CueSink> Observer for AudioCues<S> {
    fn observe(&mut self, snapshot: &TimerSnapshot) {
        self.check(snapshot);
    }
}
