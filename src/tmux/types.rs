use std::fmt;

/// Server-side session identifier, e.g. `$3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Server-side pane identifier, e.g. `%5`. Unique across all sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneId(pub String);

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of `list-sessions` output.
#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub id: SessionId,
    pub name: String,
    pub attached: bool,
}

/// One row of session-wide `list-panes` output.
#[derive(Debug, Clone)]
pub struct PaneInfo {
    pub id: PaneId,
    pub window_active: bool,
    pub pane_active: bool,
}
