//! Key-signal to command state machine.
//!
//! Consumes raw key-down/key-up signals, resolves them against the current
//! [`KeyBindings`], and emits at most one [`Command`] per signal. This is
//! the only stateful piece of the input layer.
//!
//! Two quirks of the original client are reproduced on purpose rather than
//! fixed (see DESIGN.md):
//!
//! - Every matching key-down emits, including OS auto-repeat signals. There
//!   is no edge-trigger guard, so holding a key re-sends its command at the
//!   repeat rate.
//! - Releasing *any* movement key emits `stop` and clears the held set,
//!   even when the released key is not the active direction. The remaining
//!   physically-held direction is not restored.
//!
//! There are no timers, no debounce window, and no coalescing.

use sapper_proto::{Command, Direction};

use crate::bindings::{Action, KeyBindings};

/// A raw key signal from the input source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSignal {
    /// Key pressed (or auto-repeated).
    KeyDown(String),
    /// Key released.
    KeyUp(String),
}

/// Observable movement state of the translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslatorState {
    /// No movement key held.
    Idle,
    /// Moving in the most recently pressed held direction.
    Moving(Direction),
}

/// The input-to-command bridge.
///
/// Owns the key bindings and the held-direction list. Signals must be fed
/// in arrival order from a single task; each call completes its
/// read-modify-write before returning.
#[derive(Debug, Clone)]
pub struct Translator {
    bindings: KeyBindings,
    /// Held movement directions, most recent first. The front entry is the
    /// active direction.
    held: Vec<Direction>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

impl Translator {
    /// Create a translator with the given bindings.
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings, held: Vec::new() }
    }

    /// Current bindings.
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Atomically replace all six bindings.
    ///
    /// No validation is performed; see [`KeyBindings`] for the collision
    /// policy. Held movement state is untouched, matching the original
    /// client (a key held across a rebind still stops movement on release).
    pub fn replace_bindings(&mut self, bindings: KeyBindings) {
        self.bindings = bindings;
    }

    /// Current movement state.
    pub fn state(&self) -> TranslatorState {
        self.held.first().map_or(TranslatorState::Idle, |&d| TranslatorState::Moving(d))
    }

    /// Process one signal, returning the command to send (if any).
    ///
    /// Unbound keys and key-ups on plant/fuse produce nothing.
    pub fn handle(&mut self, signal: InputSignal) -> Option<Command> {
        match signal {
            InputSignal::KeyDown(key) => match self.bindings.resolve(&key) {
                Some(Action::Plant) => Some(Command::Plant),
                Some(Action::Fuse) => Some(Command::Fuse),
                Some(action) => action.direction().map(|d| {
                    self.press(d);
                    Command::Move(d)
                }),
                None => None,
            },
            InputSignal::KeyUp(key) => match self.bindings.resolve(&key) {
                // Any movement release stops, regardless of which direction
                // is active.
                Some(action) if action.direction().is_some() => {
                    self.held.clear();
                    Some(Command::Stop)
                },
                _ => None,
            },
        }
    }

    /// Move a direction to the front of the held list.
    fn press(&mut self, direction: Direction) {
        self.held.retain(|&d| d != direction);
        self.held.insert(0, direction);
    }
}
