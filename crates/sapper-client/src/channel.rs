//! Fire-and-forget command channel.
//!
//! The sender half of the outbound queue. The bridge never blocks on a send
//! and never sees the result: a full or closed queue drops the message with
//! a warning. Delivery, batching, and reconnection are entirely the
//! transport's concern on the other end of the queue.

use sapper_proto::{Command, WireMessage};
use tokio::sync::mpsc;

/// Outbound queue depth before messages are dropped.
pub const OUTBOUND_CAPACITY: usize = 32;

/// Non-blocking sender half of the outbound command queue.
///
/// Cheap to clone; all clones feed the same single-consumer queue.
#[derive(Debug, Clone)]
pub struct CommandChannel {
    to_server: mpsc::Sender<WireMessage>,
}

impl CommandChannel {
    /// Wrap an existing queue sender.
    pub fn new(to_server: mpsc::Sender<WireMessage>) -> Self {
        Self { to_server }
    }

    /// Create a channel plus the receiver end of its queue.
    ///
    /// The caller owns the consumer side; in production that is a transport
    /// task, in tests it is inspected directly.
    pub fn pair() -> (Self, mpsc::Receiver<WireMessage>) {
        let (tx, rx) = mpsc::channel(OUTBOUND_CAPACITY);
        (Self::new(tx), rx)
    }

    /// Send a game command as a `send_event` message.
    pub fn send_command(&self, command: Command) {
        self.send_raw(WireMessage::from(command));
    }

    /// Send a named event with positional arguments.
    pub fn send_event(&self, event: impl Into<String>, args: Vec<String>) {
        self.send_raw(WireMessage::event(event, args));
    }

    /// Send a raw wire message, fire-and-forget.
    pub fn send_raw(&self, message: WireMessage) {
        if let Err(e) = self.to_server.try_send(message) {
            tracing::warn!(error = %e, "dropping outbound message");
        }
    }
}

#[cfg(test)]
mod tests {
    use sapper_proto::Direction;

    use super::*;

    #[test]
    fn send_command_wraps_in_send_event() {
        let (channel, mut rx) = CommandChannel::pair();

        channel.send_command(Command::Move(Direction::South));

        assert_eq!(rx.try_recv().ok(), Some(WireMessage::event("move", vec!["S".to_string()])));
    }

    #[test]
    fn send_raw_passes_through() {
        let (channel, mut rx) = CommandChannel::pair();

        channel.send_raw(WireMessage::join_queue("arena1"));

        assert_eq!(rx.try_recv().ok(), Some(WireMessage::join_queue("arena1")));
    }

    #[test]
    fn full_queue_drops_silently() {
        let (tx, mut rx) = mpsc::channel(1);
        let channel = CommandChannel::new(tx);

        channel.send_command(Command::Plant);
        channel.send_command(Command::Fuse);

        // Second send was dropped, first is intact, no panic or error
        // surfaced to the caller.
        assert_eq!(rx.try_recv().ok(), Some(WireMessage::from(Command::Plant)));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn closed_queue_drops_silently() {
        let (channel, rx) = CommandChannel::pair();
        drop(rx);

        channel.send_command(Command::Stop);
    }
}
