use std::env;

use colored::Colorize;

use crate::options::verbose;
use crate::tmux::client;
use crate::tmux::errors::TmuxError;
use crate::tmux::types::{PaneId, PaneInfo, SessionInfo};

/// Keystroke operations a pane target supports.
///
/// `type_and_submit` is composed from the two primitives, so an
/// implementation never has to announce whether it supports a combined
/// send. A failed submit is downgraded to a warning: the text is already
/// typed and the user can press Enter themselves.
pub trait PaneInput {
    fn type_text(&self, text: &str) -> Result<(), TmuxError>;

    fn submit(&self) -> Result<(), TmuxError>;

    fn type_and_submit(&self, text: &str) -> Result<(), TmuxError> {
        self.type_text(text)?;
        if let Err(e) = self.submit() {
            eprintln!(
                "{} could not press Enter ({}); the command is typed into the pane, run it yourself",
                "Warning:".yellow(),
                e
            );
        }
        Ok(())
    }

    /// Inject one command line; `submit` decides whether it runs now or is
    /// left in the pane's input for review.
    fn send_command(&self, command: &str, submit: bool) -> Result<(), TmuxError> {
        if submit {
            self.type_and_submit(command)
        } else {
            self.type_text(command)
        }
    }
}

/// The tmux pane this process was launched from, resolved once at startup.
pub struct PaneController {
    pane: PaneId,
}

impl PaneController {
    /// Resolve the pane to control. Every failure here means there is
    /// nothing to type into, so callers treat errors as fatal.
    pub fn locate() -> Result<Self, TmuxError> {
        let tmux_env = env::var("TMUX").map_err(|_| TmuxError::NotInsideSession)?;

        let server = client::probe()?;
        verbose::log(&format!("talking to {server}"));

        let sessions = client::list_sessions()?;
        if verbose::is_verbose() {
            for session in &sessions {
                verbose::log(&format!(
                    "found session {} ({}{})",
                    session.id,
                    session.name,
                    if session.attached { ", attached" } else { "" }
                ));
            }
        }

        let mut snapshot = Vec::with_capacity(sessions.len());
        for session in sessions {
            let panes = client::list_panes(&session.id)?;
            snapshot.push((session, panes));
        }

        let tmux_pane = env::var("TMUX_PANE").ok();
        let pane = choose_target(&snapshot, &tmux_env, tmux_pane.as_deref())?;
        verbose::log(&format!("controlling pane {pane}"));

        Ok(Self { pane })
    }
}

impl PaneInput for PaneController {
    fn type_text(&self, text: &str) -> Result<(), TmuxError> {
        client::send_keys_literal(&self.pane, text)
    }

    fn submit(&self) -> Result<(), TmuxError> {
        client::send_enter(&self.pane)
    }
}

/// Pick the pane to inject into from a snapshot of the server.
///
/// Session: the one owning a pane whose id appears in `$TMUX`, else the
/// first listed. Pane: the `$TMUX_PANE` one if it is in that session, else
/// the active pane of the active window, else the first pane.
fn choose_target(
    sessions: &[(SessionInfo, Vec<PaneInfo>)],
    tmux_env: &str,
    tmux_pane: Option<&str>,
) -> Result<PaneId, TmuxError> {
    if sessions.is_empty() {
        return Err(TmuxError::NoSessions);
    }

    let (_, panes) = sessions
        .iter()
        .find(|(_, panes)| panes.iter().any(|p| tmux_env.contains(p.id.0.as_str())))
        .unwrap_or(&sessions[0]);

    if let Some(wanted) = tmux_pane {
        if let Some(pane) = panes.iter().find(|p| p.id.0 == wanted) {
            return Ok(pane.id.clone());
        }
    }

    panes
        .iter()
        .find(|p| p.window_active && p.pane_active)
        .or_else(|| panes.first())
        .map(|p| p.id.clone())
        .ok_or(TmuxError::PaneNotFound)
}
