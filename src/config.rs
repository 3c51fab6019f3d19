//! Configuration and CLI argument handling

use std::time::Duration;
use clap::Parser;

use crate::state::TimerConfig;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "shot-clock")]
#[command(about = "A frame and shot clock controller for timed snooker frames")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Frame duration in seconds
    #[arg(long, default_value = "600", value_parser = parse_seconds)]
    pub frame_duration: f64,

    /// Remaining frame time (seconds) at which the second-half shot rule applies
    #[arg(long, default_value = "300", value_parser = parse_seconds)]
    pub first_half_duration: f64,

    /// Shot time in the first half, in seconds
    #[arg(long, default_value = "15", value_parser = parse_seconds)]
    pub shot_first_half: f64,

    /// Shot time in the second half, in seconds
    #[arg(long, default_value = "10", value_parser = parse_seconds)]
    pub shot_second_half: f64,

    /// Remaining shot time at which the warning starts, in seconds
    #[arg(long, default_value = "5", value_parser = parse_seconds)]
    pub shot_warning: f64,

    /// Remaining shot time at which the critical warning starts, in seconds
    #[arg(long, default_value = "3", value_parser = parse_seconds)]
    pub shot_critical: f64,

    /// Engine updates per second
    #[arg(long, default_value = "60", value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub fps: u32,

    /// Number of countdown indicators
    #[arg(long, default_value = "5")]
    pub indicators: usize,

    /// Program run for each audio cue, with the cue phrase appended (e.g. "espeak -v en-gb+f3")
    #[arg(long)]
    pub cue_command: Option<String>,

    /// Disable audio cues
    #[arg(long)]
    pub mute: bool,

    /// Read single-key commands from stdin
    #[arg(long)]
    pub keyboard: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse a strictly positive, finite number of seconds
fn parse_seconds(value: &str) -> Result<f64, String> {
    let seconds: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number of seconds", value))?;

    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(format!("'{}' must be a positive number of seconds", value));
    }
    Ok(seconds)
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Timing rules handed to the engine
    pub fn timer_config(&self) -> TimerConfig {
        TimerConfig {
            frame_duration: self.frame_duration,
            first_half_duration: self.first_half_duration,
            shot_first_half: self.shot_first_half,
            shot_second_half: self.shot_second_half,
            shot_warning: self.shot_warning,
            shot_critical: self.shot_critical,
        }
    }

    /// Interval between engine updates
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}
