//! Engine loop background task
//!
//! The loop is the single owner of the [`TimerEngine`]. It drains the command
//! queue and advances the clocks on a steady interval, publishing a snapshot
//! after every change.

use std::time::Duration;
use tokio::{
    sync::{oneshot, watch},
    time::MissedTickBehavior,
};
use tracing::{debug, info, warn};

use crate::{
    observers::Observer,
    state::{Clock, CommandEnvelope, EngineChannels, Phase, TimerEngine, TimerSnapshot},
};

/// Owns the engine and the observers that poll it
pub struct EngineRunner<C: Clock> {
    engine: TimerEngine<C>,
    observers: Vec<Box<dyn Observer>>,
}

impl<C: Clock> EngineRunner<C> {
    pub fn new(engine: TimerEngine<C>) -> Self {
        Self {
            engine,
            observers: Vec::new(),
        }
    }

    /// Register an observer called after every tick
    pub fn with_observer(mut self, observer: impl Observer + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn engine(&self) -> &TimerEngine<C> {
        &self.engine
    }

    /// Apply one queued command, publish the result and answer the sender
    pub fn handle(&mut self, envelope: CommandEnvelope, snapshots: &watch::Sender<TimerSnapshot>) -> TimerSnapshot {
        let CommandEnvelope { command, reply } = envelope;
        let before = self.engine.phase();

        command.apply(&mut self.engine);

        let snapshot = self.engine.snapshot();
        info!(
            "Applied {}: {:?} -> {:?} (frame {}, shot {})",
            command.name(),
            before,
            snapshot.phase,
            snapshot.frame_display,
            snapshot.shot_display
        );
        snapshots.send_replace(snapshot.clone());

        if let Some(reply) = reply {
            if reply.send(snapshot.clone()).is_err() {
                debug!("Sender of {} stopped waiting for the result", command.name());
            }
        }

        snapshot
    }

    /// Advance the clocks, publish the result and notify observers
    pub fn tick(&mut self, snapshots: &watch::Sender<TimerSnapshot>) -> TimerSnapshot {
        let before = self.engine.phase();
        self.engine.update();

        let snapshot = self.engine.snapshot();
        if before == Phase::Running && !snapshot.is_running() {
            info!("Frame time expired");
        }

        for observer in &mut self.observers {
            observer.observe(&snapshot);
        }
        snapshots.send_replace(snapshot.clone());
        snapshot
    }

    /// Switch observer outputs off
    pub fn shutdown(&mut self) {
        for observer in &mut self.observers {
            observer.shutdown();
        }
    }
}

/// Drive the engine until the queue closes or `shutdown` fires.
///
/// `period` is the tick cadence; late ticks are skipped since each update
/// measures real elapsed time anyway.
pub async fn engine_loop_task<C: Clock>(
    mut runner: EngineRunner<C>,
    channels: EngineChannels,
    period: Duration,
    mut shutdown: oneshot::Receiver<()>,
) {
    info!("Starting engine loop ({}ms tick)", period.as_millis());

    let EngineChannels { mut commands, snapshots } = channels;
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            maybe_envelope = commands.recv() => {
                match maybe_envelope {
                    Some(envelope) => {
                        runner.handle(envelope, &snapshots);
                    }
                    None => {
                        warn!("Command queue closed, stopping engine loop");
                        break;
                    }
                }
            }

            _ = interval.tick() => {
                runner.tick(&snapshots);
            }

            _ = &mut shutdown => {
                info!("Engine loop shutting down");
                break;
            }
        }
    }

    runner.shutdown();
    info!("Engine loop stopped");
}
