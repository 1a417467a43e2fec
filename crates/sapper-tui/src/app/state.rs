//! UI state types
//!
//! State structures used by the App state machine.

/// Input mode of the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Keys go straight to the input translator.
    Play,
    /// Free-text queue name entry.
    QueueJoin,
    /// Six-field binding entry.
    Rebind,
}

/// Where the client's commands go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    /// In-process practice server.
    Practice,
    /// Remote game server.
    Remote {
        /// Server address (host:port).
        addr: String,
    },
}

/// Origin of a log entry, used for display styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    /// Outbound command.
    Sent,
    /// Inbound server notification.
    Received,
    /// Local notice (rebinds, focus changes).
    Notice,
}

/// One line in the rolling command log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Entry origin.
    pub kind: LogKind,
    /// Display text.
    pub text: String,
}

impl LogEntry {
    /// Build an entry.
    pub fn new(kind: LogKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }
}
