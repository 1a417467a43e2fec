//! Input-to-command bridge for the sapper game client
//!
//! Pure state machine translating raw key press/release signals plus a live
//! rebindable key map into discrete game commands, and the fire-and-forget
//! channel those commands leave through. The translator holds the only real
//! state in the client input layer; everything around it is plumbing.
//!
//! # Components
//!
//! - [`KeyBindings`]: logical action → physical key map, replaceable at
//!   runtime
//! - [`Translator`]: key-signal → command state machine
//! - [`CommandChannel`]: non-blocking sender half of the outbound queue
//! - [`transport`]: optional TCP transport feeding that queue (feature
//!   `transport`)

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bindings;
mod channel;
mod translator;
#[cfg(feature = "transport")]
pub mod transport;

pub use bindings::{Action, KeyBindings};
pub use channel::{CommandChannel, OUTBOUND_CAPACITY};
pub use translator::{InputSignal, Translator, TranslatorState};
