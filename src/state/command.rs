//! Commands accepted by the timer engine

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::oneshot;

use super::{Clock, TimerEngine, TimerSnapshot};

/// The only mutations an input dispatcher may request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "active", rename_all = "snake_case")]
pub enum TimerCommand {
    StartFrame,
    ResetFrame,
    PauseFrame,
    ResetShot,
    SetRolling(bool),
}

impl TimerCommand {
    /// Apply this command to the engine
    pub fn apply<C: Clock>(self, engine: &mut TimerEngine<C>) {
        match self {
            TimerCommand::StartFrame => engine.start_frame(),
            TimerCommand::ResetFrame => engine.reset_frame(),
            TimerCommand::PauseFrame => engine.pause_frame(),
            TimerCommand::ResetShot => engine.reset_shot(),
            TimerCommand::SetRolling(active) => engine.set_rolling(active),
        }
    }

    /// Short name used in logs and API responses
    pub fn name(&self) -> &'static str {
        match self {
            TimerCommand::StartFrame => "start-frame",
            TimerCommand::ResetFrame => "reset-frame",
            TimerCommand::PauseFrame => "pause-frame",
            TimerCommand::ResetShot => "reset-shot",
            TimerCommand::SetRolling(true) => "rolling-on",
            TimerCommand::SetRolling(false) => "rolling-off",
        }
    }
}

/// A queued command, optionally waiting for the resulting snapshot
#[derive(Debug)]
pub struct CommandEnvelope {
    pub command: TimerCommand,
    pub reply: Option<oneshot::Sender<TimerSnapshot>>,
}

impl CommandEnvelope {
    pub fn new(command: TimerCommand) -> (Self, oneshot::Receiver<TimerSnapshot>) {
        let (tx, rx) = oneshot::channel();
        (Self { command, reply: Some(tx) }, rx)
    }

    /// Command without a reply channel
    pub fn fire(command: TimerCommand) -> Self {
        Self { command, reply: None }
    }
}

/// Failure to hand a command to the engine loop
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// The engine loop has shut down and the queue is closed.
    #[error("engine loop is not running; {0} was dropped")]
    QueueClosed(&'static str),

    /// The loop accepted the command but went away before answering.
    #[error("engine loop stopped before acknowledging {0}")]
    NoReply(&'static str),
}
