//! Bridge between App and the input layer.
//!
//! Translates App actions into translator signals and channel sends, and
//! turns the results back into App events, keeping the UI layer decoupled
//! from protocol details. All channel sends are fire-and-forget; the bridge
//! never blocks and never sees transport errors.

use sapper_client::{CommandChannel, KeyBindings, Translator, TranslatorState};
use sapper_proto::WireMessage;

use crate::app::{AppAction, AppEvent};

/// Bridge between the App UI and the input translator.
///
/// Owns the translator (and with it the bindings and movement state) plus
/// the sender half of the command channel. The channel is assumed connected
/// at construction.
pub struct Bridge {
    translator: Translator,
    channel: CommandChannel,
}

impl Bridge {
    /// Create a bridge over a connected channel.
    pub fn new(bindings: KeyBindings, channel: CommandChannel) -> Self {
        Self { translator: Translator::new(bindings), channel }
    }

    /// Current translator movement state.
    pub fn state(&self) -> TranslatorState {
        self.translator.state()
    }

    /// Process an App action and return resulting App events.
    pub fn process_app_action(&mut self, action: AppAction) -> Vec<AppEvent> {
        match action {
            AppAction::Signal(signal) => match self.translator.handle(signal) {
                Some(command) => {
                    tracing::debug!(?command, "command emitted");
                    self.channel.send_command(command);
                    vec![AppEvent::CommandSent(command)]
                },
                None => vec![],
            },

            AppAction::JoinQueue { queue } => {
                // Exactly one raw send per form submission.
                self.channel.send_raw(WireMessage::join_queue(queue.clone()));
                vec![AppEvent::QueueJoined { queue }]
            },

            AppAction::ReplaceBindings(bindings) => {
                self.translator.replace_bindings(bindings.clone());
                vec![AppEvent::BindingsReplaced(bindings)]
            },

            AppAction::Render | AppAction::Quit => vec![],
        }
    }

    /// Handle a notification received from the server.
    pub fn handle_server_message(&mut self, value: serde_json::Value) -> Vec<AppEvent> {
        vec![AppEvent::ServerMessage(value)]
    }
}

#[cfg(test)]
mod tests {
    use sapper_client::InputSignal;
    use sapper_proto::{Command, Direction};
    use tokio::sync::mpsc::Receiver;

    use super::*;

    fn new_bridge() -> (Bridge, Receiver<WireMessage>) {
        let (channel, rx) = CommandChannel::pair();
        (Bridge::new(KeyBindings::default(), channel), rx)
    }

    fn down(key: &str) -> AppAction {
        AppAction::Signal(InputSignal::KeyDown(key.to_string()))
    }

    fn up(key: &str) -> AppAction {
        AppAction::Signal(InputSignal::KeyUp(key.to_string()))
    }

    #[test]
    fn matched_signal_reaches_the_wire() {
        let (mut bridge, mut rx) = new_bridge();

        let events = bridge.process_app_action(down("z"));

        assert!(matches!(events.as_slice(), [AppEvent::CommandSent(Command::Move(
            Direction::North
        ))]));
        assert_eq!(rx.try_recv().ok(), Some(WireMessage::event("move", vec!["N".to_string()])));
    }

    #[test]
    fn unmatched_signal_sends_nothing() {
        let (mut bridge, mut rx) = new_bridge();

        let events = bridge.process_app_action(down("x"));

        assert!(events.is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn canonical_stop_sequence_on_the_wire() {
        // z down, q down, z up: the release of the non-active key still
        // stops movement.
        let (mut bridge, mut rx) = new_bridge();

        let _ = bridge.process_app_action(down("z"));
        let _ = bridge.process_app_action(down("q"));
        let _ = bridge.process_app_action(up("z"));

        assert_eq!(rx.try_recv().ok(), Some(WireMessage::event("move", vec!["N".to_string()])));
        assert_eq!(rx.try_recv().ok(), Some(WireMessage::event("move", vec!["W".to_string()])));
        assert_eq!(rx.try_recv().ok(), Some(WireMessage::event("stop", vec![])));
        assert_eq!(bridge.state(), TranslatorState::Idle);
    }

    #[test]
    fn join_queue_sends_one_raw_message() {
        let (mut bridge, mut rx) = new_bridge();

        let events = bridge.process_app_action(AppAction::JoinQueue { queue: "arena1".to_string() });

        assert!(matches!(events.as_slice(), [AppEvent::QueueJoined { queue }] if queue == "arena1"));
        assert_eq!(rx.try_recv().ok(), Some(WireMessage::join_queue("arena1")));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn rebinding_takes_effect_immediately() {
        let (mut bridge, mut rx) = new_bridge();

        let bindings = KeyBindings { up_key: "w".to_string(), ..KeyBindings::default() };
        let _ = bridge.process_app_action(AppAction::ReplaceBindings(bindings));

        let _ = bridge.process_app_action(down("w"));
        let _ = bridge.process_app_action(down("z"));

        // Only the new up key produced a command.
        assert_eq!(rx.try_recv().ok(), Some(WireMessage::event("move", vec!["N".to_string()])));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn render_and_quit_are_not_protocol_actions() {
        let (mut bridge, mut rx) = new_bridge();

        assert!(bridge.process_app_action(AppAction::Render).is_empty());
        assert!(bridge.process_app_action(AppAction::Quit).is_empty());
        assert!(rx.try_recv().is_err());
    }
}
