//! Terminal frontend for the sapper game client
//!
//! A thin shell over the sans-IO input layer in `sapper-client`: crossterm
//! delivers key press/release events (kitty keyboard protocol), the pure
//! [`App`] state machine turns them into actions, and the [`Bridge`] feeds
//! matching signals through the translator onto the command channel.
//!
//! Without a `--server` address the binary runs against an in-process
//! practice server, so the whole input path can be exercised offline.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod app;
pub mod bridge;
pub mod forms;
pub mod runtime;
pub mod server;
pub mod ui;

pub use app::{App, AppAction, AppEvent};
pub use bridge::Bridge;
pub use runtime::{Runtime, RuntimeError};
