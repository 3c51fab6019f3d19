//! External program playback for audio cues

use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::observers::{Cue, CueSink};

/// Plays cues by running an external program (a speech synthesizer or sound
/// player) with the cue phrase as its last argument.
#[derive(Debug, Clone)]
pub struct CommandCueSink {
    program: String,
    args: Vec<String>,
}

impl CommandCueSink {
    /// Build a sink from a shell-style command line, e.g. `espeak -v en-gb+f3`
    pub fn from_command_line(command_line: &str) -> Result<Self, String> {
        let mut parts = shlex::split(command_line)
            .ok_or_else(|| format!("Invalid cue command quoting: {}", command_line))?
            .into_iter();

        let program = parts
            .next()
            .ok_or_else(|| "Cue command is empty".to_string())?;

        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Start the player without waiting for it to finish
    pub fn spawn(&self, phrase: &str) -> Result<(), String> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(phrase)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| format!("Failed to execute {}: {}", self.program, e))?;

        let program = self.program.clone();
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if status.success() => {
                    debug!("{} finished", program);
                }
                Ok(status) => {
                    warn!("{} exited with {}", program, status);
                }
                Err(e) => {
                    warn!("Failed to wait for {}: {}", program, e);
                }
            }
        });

        Ok(())
    }
}

impl CueSink for CommandCueSink {
    fn play(&mut self, cue: Cue) {
        let phrase = cue.phrase();
        debug!("Playing cue via {}: {}", self.program, phrase);

        if let Err(e) = self.spawn(&phrase) {
            warn!("Cue playback failed: {}", e);
        }
    }
}
