//! Property-based tests for the translator state machine.
//!
//! Feeds arbitrary signal sequences over a mixed alphabet of bound and
//! unbound keys and checks the per-signal contract after every step.

use proptest::prelude::*;
use sapper_client::{Action, InputSignal, KeyBindings, Translator, TranslatorState};
use sapper_proto::Command;

/// Keys covering all six default bindings plus two unbound keys.
fn key_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["z", "s", "q", "d", "o", "p", "x", "1"]).prop_map(str::to_string)
}

fn signal_strategy() -> impl Strategy<Value = InputSignal> {
    prop_oneof![
        key_strategy().prop_map(InputSignal::KeyDown),
        key_strategy().prop_map(InputSignal::KeyUp),
    ]
}

proptest! {
    /// Each signal emits at most one command, and the emitted command is
    /// fully determined by the signal and the bindings: movement key-downs
    /// move, action key-downs plant/fuse, movement key-ups stop and reset,
    /// everything else is silent.
    #[test]
    fn prop_translator_contract(signals in prop::collection::vec(signal_strategy(), 0..64)) {
        let bindings = KeyBindings::default();
        let mut translator = Translator::default();

        for signal in signals {
            let output = translator.handle(signal.clone());

            match &signal {
                InputSignal::KeyDown(key) => match bindings.resolve(key) {
                    Some(action) => match action.direction() {
                        Some(d) => {
                            prop_assert_eq!(output, Some(Command::Move(d)));
                            prop_assert_eq!(translator.state(), TranslatorState::Moving(d));
                        },
                        None => {
                            prop_assert!(matches!(output, Some(Command::Plant | Command::Fuse)));
                        },
                    },
                    None => prop_assert_eq!(output, None),
                },
                InputSignal::KeyUp(key) => match bindings.resolve(key) {
                    Some(action) if action.direction().is_some() => {
                        prop_assert_eq!(output, Some(Command::Stop));
                        prop_assert_eq!(translator.state(), TranslatorState::Idle);
                    },
                    _ => prop_assert_eq!(output, None),
                },
            }
        }
    }

    /// A movement key-up resets the machine no matter what came before:
    /// the very next movement key-down always activates its own direction.
    #[test]
    fn prop_stop_resets_history(
        prefix in prop::collection::vec(signal_strategy(), 0..32),
        key in prop::sample::select(vec!["z", "s", "q", "d"]),
    ) {
        let bindings = KeyBindings::default();
        let mut translator = Translator::default();

        for signal in prefix {
            let _ = translator.handle(signal);
        }

        let _ = translator.handle(InputSignal::KeyUp("z".to_string()));
        prop_assert_eq!(translator.state(), TranslatorState::Idle);

        let direction = bindings.resolve(key).and_then(Action::direction).unwrap();

        let output = translator.handle(InputSignal::KeyDown(key.to_string()));
        prop_assert_eq!(output, Some(Command::Move(direction)));
        prop_assert_eq!(translator.state(), TranslatorState::Moving(direction));
    }
}
