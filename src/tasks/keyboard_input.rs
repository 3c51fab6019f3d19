//! Keyboard input dispatcher reading single-key commands from stdin

use std::sync::Arc;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::state::{AppState, TimerCommand};

/// What a line of keyboard input asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Command(TimerCommand),
    Quit,
}

/// Map a line of input to an action.
///
/// A line holding a single space counts as the space bar.
pub fn parse_key(line: &str) -> Option<KeyAction> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line == " " {
        return Some(KeyAction::Command(TimerCommand::StartFrame));
    }

    let action = match line.trim().to_ascii_lowercase().as_str() {
        "space" | "start" => KeyAction::Command(TimerCommand::StartFrame),
        "r" => KeyAction::Command(TimerCommand::ResetFrame),
        "p" => KeyAction::Command(TimerCommand::PauseFrame),
        "s" => KeyAction::Command(TimerCommand::ResetShot),
        "b" => KeyAction::Command(TimerCommand::SetRolling(true)),
        "n" => KeyAction::Command(TimerCommand::SetRolling(false)),
        "q" | "esc" | "quit" => KeyAction::Quit,
        _ => return None,
    };
    Some(action)
}

/// Read stdin until the quit key or end of input.
///
/// Returns `true` when the user asked to quit.
pub async fn keyboard_input_task(state: Arc<AppState>) -> bool {
    info!("Keyboard input enabled: space=start r=reset-frame p=pause s=reset-shot b/n=rolling on/off q=quit");

    let mut lines = BufReader::new(stdin()).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!("Keyboard input closed");
                return false;
            }
            Err(e) => {
                warn!("Failed to read keyboard input: {}", e);
                return false;
            }
        };

        match parse_key(&line) {
            Some(KeyAction::Command(command)) => {
                if let Err(e) = state.submit(command).await {
                    warn!("Keyboard command not applied: {}", e);
                }
            }
            Some(KeyAction::Quit) => {
                info!("Quit requested from keyboard");
                return true;
            }
            None => {
                debug!("Ignoring unmapped key: {:?}", line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_standard_key_layout() {
        assert_eq!(parse_key(" "), Some(KeyAction::Command(TimerCommand::StartFrame)));
        assert_eq!(parse_key("space"), Some(KeyAction::Command(TimerCommand::StartFrame)));
        assert_eq!(parse_key("R\n"), Some(KeyAction::Command(TimerCommand::ResetFrame)));
        assert_eq!(parse_key("p"), Some(KeyAction::Command(TimerCommand::PauseFrame)));
        assert_eq!(parse_key(" s "), Some(KeyAction::Command(TimerCommand::ResetShot)));
        assert_eq!(parse_key("b"), Some(KeyAction::Command(TimerCommand::SetRolling(true))));
        assert_eq!(parse_key("n"), Some(KeyAction::Command(TimerCommand::SetRolling(false))));
        assert_eq!(parse_key("q"), Some(KeyAction::Quit));
        assert_eq!(parse_key("ESC"), Some(KeyAction::Quit));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert_eq!(parse_key(""), None);
        assert_eq!(parse_key("x"), None);
        assert_eq!(parse_key("pause please"), None);
    }
}
