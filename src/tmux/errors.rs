use thiserror::Error;

/// Failures on the tmux side. Each reaches the user as a single line; the
/// startup variants are fatal because without a pane there is nothing to
/// type into.
#[derive(Debug, Error)]
pub enum TmuxError {
    #[error("not inside a tmux session (TMUX is not set)")]
    NotInsideSession,

    #[error("could not talk to tmux: {reason}. Install it first, e.g. 'apt install tmux' or 'brew install tmux'")]
    ClientUnavailable { reason: String },

    #[error("no tmux sessions found")]
    NoSessions,

    #[error("could not resolve the current tmux pane")]
    PaneNotFound,

    #[error("tmux {command} failed: {message}")]
    CommandFailed { command: String, message: String },
}
