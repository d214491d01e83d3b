//! Centralized tmux CLI wrappers.
//!
//! Every production `std::process::Command::new("tmux")` call lives here.
//! Each function maps a spawn failure or non-zero exit to a typed error and
//! hands structured rows back to the caller.

use std::process::Command;

use crate::options::verbose;
use crate::tmux::errors::TmuxError;
use crate::tmux::types::{PaneId, PaneInfo, SessionId, SessionInfo};

const SESSION_FORMAT: &str = "#{session_id}\t#{session_name}\t#{session_attached}";
const PANE_FORMAT: &str = "#{pane_id}\t#{window_active}\t#{pane_active}";

/// Check that the tmux binary is present and answers. Returns its version
/// line, e.g. `tmux 3.4`.
pub fn probe() -> Result<String, TmuxError> {
    verbose::log_command("tmux", &["-V"]);
    let output = Command::new("tmux")
        .arg("-V")
        .output()
        .map_err(|e| TmuxError::ClientUnavailable {
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(TmuxError::ClientUnavailable {
            reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

pub fn list_sessions() -> Result<Vec<SessionInfo>, TmuxError> {
    match run("list-sessions", &["-F", SESSION_FORMAT]) {
        Ok(stdout) => Ok(parse_sessions(&stdout)),
        // A reachable binary with no server is "zero sessions", not a failure.
        Err(TmuxError::CommandFailed { message, .. }) if message.contains("no server running") => {
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

pub fn list_panes(session: &SessionId) -> Result<Vec<PaneInfo>, TmuxError> {
    let stdout = run("list-panes", &["-s", "-t", &session.0, "-F", PANE_FORMAT])?;
    Ok(parse_panes(&stdout))
}

/// Type `text` into the pane exactly as written, without submitting it.
pub fn send_keys_literal(pane: &PaneId, text: &str) -> Result<(), TmuxError> {
    run("send-keys", &["-t", &pane.0, "-l", "--", text]).map(|_| ())
}

/// Press Enter in the pane.
pub fn send_enter(pane: &PaneId) -> Result<(), TmuxError> {
    run("send-keys", &["-t", &pane.0, "Enter"]).map(|_| ())
}

fn run(command: &str, args: &[&str]) -> Result<String, TmuxError> {
    let mut full = vec![command];
    full.extend_from_slice(args);
    verbose::log_command("tmux", &full);

    let output = Command::new("tmux")
        .args(&full)
        .output()
        .map_err(|e| TmuxError::ClientUnavailable {
            reason: e.to_string(),
        })?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        Err(TmuxError::CommandFailed {
            command: command.to_string(),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

fn parse_sessions(stdout: &str) -> Vec<SessionInfo> {
    stdout
        .lines()
        .filter_map(|line| {
            let mut fields = line.split('\t');
            let id = fields.next()?;
            let name = fields.next()?;
            let attached = fields.next()?;
            if id.is_empty() {
                return None;
            }
            Some(SessionInfo {
                id: SessionId(id.to_string()),
                name: name.to_string(),
                attached: attached != "0",
            })
        })
        .collect()
}

fn parse_panes(stdout: &str) -> Vec<PaneInfo> {
    stdout
        .lines()
        .filter_map(|line| {
            let mut fields = line.split('\t');
            let id = fields.next()?;
            let window_active = fields.next()?;
            let pane_active = fields.next()?;
            if id.is_empty() {
                return None;
            }
            Some(PaneInfo {
                id: PaneId(id.to_string()),
                window_active: window_active == "1",
                pane_active: pane_active == "1",
            })
        })
        .collect()
}
