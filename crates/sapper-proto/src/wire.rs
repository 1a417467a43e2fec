//! JSON wire envelope.
//!
//! Every outbound message is a single JSON object on its own line with a
//! `cmd` tag. Game events are wrapped in `send_event` so the server can route
//! them to the running game; `join_queue` is handled by the matchmaker
//! directly.
//!
//! # Invariants
//!
//! The `cmd` tag determines the message shape (enforced by serde's internal
//! tagging). Encoding never emits embedded newlines, so one message always
//! occupies exactly one line.

use serde::{Deserialize, Serialize};

use crate::{
    Command,
    errors::{ProtoError, Result},
};

/// An outbound message in the server's `cmd`-tagged JSON format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum WireMessage {
    /// A named game event with positional string arguments.
    SendEvent {
        /// Event name (`move`, `stop`, `plant`, `fuse`).
        event: String,
        /// Positional arguments, e.g. `["N"]` for a move.
        args: Vec<String>,
    },

    /// Queue-join handshake. The queue name is free text, not validated.
    JoinQueue {
        /// Target queue name. Empty strings are accepted as-is.
        queue: String,
    },
}

impl WireMessage {
    /// Wrap a named event and its arguments.
    pub fn event(event: impl Into<String>, args: Vec<String>) -> Self {
        WireMessage::SendEvent { event: event.into(), args }
    }

    /// Build the queue-join message.
    pub fn join_queue(queue: impl Into<String>) -> Self {
        WireMessage::JoinQueue { queue: queue.into() }
    }

    /// Encode as a single JSON line (without the trailing newline).
    pub fn encode_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(ProtoError::Encode)
    }
}

impl From<Command> for WireMessage {
    fn from(command: Command) -> Self {
        WireMessage::event(command.event_name(), command.args())
    }
}

/// Decode an inbound line as a raw JSON value.
///
/// The server's notifications (`startup_status`, `status`, `error`) are
/// loosely shaped; interpretation is left to the caller.
pub fn decode_value(line: &str) -> Result<serde_json::Value> {
    serde_json::from_str(line).map_err(ProtoError::Decode)
}
