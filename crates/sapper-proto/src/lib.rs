//! Wire-level command types for the sapper game protocol
//!
//! Outbound traffic is newline-delimited JSON. Every message carries a `cmd`
//! field the server dispatches on: key-driven game commands travel inside a
//! `send_event` envelope, while the queue-join handshake is its own
//! top-level message. Inbound traffic is loosely shaped (`startup_status`,
//! `status`, `error`) and is decoded as raw JSON values; this crate never
//! interprets it.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod command;
pub mod errors;
mod wire;

pub use command::{Command, Direction};
pub use errors::ProtoError;
pub use wire::{WireMessage, decode_value};
