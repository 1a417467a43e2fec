//! UI events
//!
//! Events fed into the App state machine from terminal input and from the
//! bridge's confirmations.

use crossterm::event::KeyEvent;
use sapper_client::KeyBindings;
use sapper_proto::Command;

/// Events processed by the App state machine.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input, including the press/repeat/release kind.
    Key(KeyEvent),

    /// Terminal gained focus.
    FocusGained,

    /// Terminal lost focus.
    FocusLost,

    /// Periodic tick (for log pruning, polling).
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// A game command left through the channel.
    CommandSent(Command),

    /// The queue-join message left through the channel.
    QueueJoined {
        /// Queue name as submitted.
        queue: String,
    },

    /// The translator accepted a new binding set.
    BindingsReplaced(KeyBindings),

    /// Notification received from the server.
    ServerMessage(serde_json::Value),
}
