//! Shared application state handed to input dispatchers and handlers

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, watch};
use tracing::{info, warn};

use super::{CommandEnvelope, DispatchError, TimerCommand, TimerSnapshot};

/// Depth of the command queue between dispatchers and the engine loop
pub const COMMAND_QUEUE_DEPTH: usize = 64;

/// Receiving ends owned by the engine loop
#[derive(Debug)]
pub struct EngineChannels {
    pub commands: mpsc::Receiver<CommandEnvelope>,
    pub snapshots: watch::Sender<TimerSnapshot>,
}

/// State shared between the HTTP API, the keyboard reader and `main`.
///
/// Holds no engine: every mutation goes through the command queue so the
/// engine loop stays the only writer.
#[derive(Debug)]
pub struct AppState {
    /// Producer side of the engine command queue
    pub command_tx: mpsc::Sender<CommandEnvelope>,
    /// Latest snapshot published by the engine loop
    pub snapshot_rx: watch::Receiver<TimerSnapshot>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last command tracking
    pub last_command: Arc<Mutex<Option<String>>>,
    pub last_command_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    /// Create the shared state and the channel ends for the engine loop
    pub fn new(port: u16, host: String, initial: TimerSnapshot) -> (Self, EngineChannels) {
        let (command_tx, commands) = mpsc::channel(COMMAND_QUEUE_DEPTH);
        let (snapshots, snapshot_rx) = watch::channel(initial);

        let state = Self {
            command_tx,
            snapshot_rx,
            start_time: Instant::now(),
            port,
            host,
            last_command: Arc::new(Mutex::new(None)),
            last_command_time: Arc::new(Mutex::new(None)),
        };

        (state, EngineChannels { commands, snapshots })
    }

    /// Queue a command and wait for the snapshot taken right after it applied
    pub async fn dispatch(&self, command: TimerCommand) -> Result<TimerSnapshot, DispatchError> {
        info!("Dispatching command: {}", command.name());

        let (envelope, reply) = CommandEnvelope::new(command);
        self.command_tx
            .send(envelope)
            .await
            .map_err(|_| DispatchError::QueueClosed(command.name()))?;

        self.record_command(command);

        reply.await.map_err(|_| DispatchError::NoReply(command.name()))
    }

    /// Queue a command without waiting for it to apply.
    ///
    /// Waits for queue capacity when the engine loop is behind, so bursts
    /// of commands are applied in order rather than dropped.
    pub async fn submit(&self, command: TimerCommand) -> Result<(), DispatchError> {
        self.command_tx
            .send(CommandEnvelope::fire(command))
            .await
            .map_err(|_| {
                warn!("Failed to queue {}: engine loop stopped", command.name());
                DispatchError::QueueClosed(command.name())
            })?;

        self.record_command(command);
        Ok(())
    }

    fn record_command(&self, command: TimerCommand) {
        if let Ok(mut last_command) = self.last_command.lock() {
            *last_command = Some(command.name().to_string());
        }
        if let Ok(mut last_time) = self.last_command_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Get the most recently published timer snapshot
    pub fn get_timer_state(&self) -> TimerSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last command information
    pub fn get_last_command(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_command = self.last_command.lock().ok().and_then(|a| a.clone());
        let last_command_time = self.last_command_time.lock().ok().and_then(|t| *t);
        (last_command, last_command_time)
    }
}
