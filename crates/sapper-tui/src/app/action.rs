//! UI actions
//!
//! Actions produced by the App state machine for the runtime to execute.

use sapper_client::{InputSignal, KeyBindings};

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Forward a raw key signal to the input translator.
    Signal(InputSignal),

    /// Join a game queue. Emitted exactly once per form submission.
    JoinQueue {
        /// Free-text queue name, not validated.
        queue: String,
    },

    /// Replace all six key bindings wholesale.
    ReplaceBindings(KeyBindings),
}
