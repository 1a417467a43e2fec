//! Form input state.
//!
//! Owns the text buffers and cursor for the queue-join prompt and the
//! rebinding form. Handles character-level editing keys; submission and
//! mode switching stay in the App.
//!
//! Buffers are ASCII-only: key identifiers and queue names in the game
//! protocol are plain ASCII, and byte-indexed cursor arithmetic stays valid.

use crossterm::event::KeyCode;
use sapper_client::KeyBindings;

/// A single-line editable text field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    buffer: String,
    cursor: usize,
}

impl TextField {
    /// Create an empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field pre-filled with text, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let buffer = text.into();
        let cursor = buffer.len();
        Self { buffer, cursor }
    }

    /// Current text.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Take the text out, resetting the field.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }

    /// Handle an editing key. Returns whether the field consumed it.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char(c) if c.is_ascii() => {
                self.buffer.insert(self.cursor, c);
                self.cursor = self.cursor.saturating_add(1);
                true
            },
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor = self.cursor.saturating_sub(1);
                    self.buffer.remove(self.cursor);
                }
                true
            },
            KeyCode::Delete => {
                if self.cursor < self.buffer.len() {
                    self.buffer.remove(self.cursor);
                }
                true
            },
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            },
            KeyCode::Right => {
                if self.cursor < self.buffer.len() {
                    self.cursor = self.cursor.saturating_add(1);
                }
                true
            },
            KeyCode::Home => {
                self.cursor = 0;
                true
            },
            KeyCode::End => {
                self.cursor = self.buffer.len();
                true
            },
            _ => false,
        }
    }
}

/// Number of binding fields.
pub const BINDING_FIELDS: usize = 6;

/// Display labels for the binding fields, in form order.
pub const BINDING_LABELS: [&str; BINDING_FIELDS] = ["Up", "Down", "Left", "Right", "Plant", "Fuse"];

/// The six-field rebinding form.
///
/// Tab cycles fields, Enter submits wholesale. No validation: empty fields
/// and duplicates pass through to the bindings unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebindForm {
    fields: [TextField; BINDING_FIELDS],
    focus: usize,
}

impl RebindForm {
    /// Create a form pre-filled from the current bindings.
    pub fn from_bindings(bindings: &KeyBindings) -> Self {
        Self {
            fields: [
                TextField::with_text(&bindings.up_key),
                TextField::with_text(&bindings.down_key),
                TextField::with_text(&bindings.left_key),
                TextField::with_text(&bindings.right_key),
                TextField::with_text(&bindings.plant_key),
                TextField::with_text(&bindings.fuse_key),
            ],
            focus: 0,
        }
    }

    /// Index of the focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Field at an index, clamped into range.
    pub fn field(&self, index: usize) -> &TextField {
        &self.fields[index.min(BINDING_FIELDS - 1)]
    }

    /// Move focus to the next field, wrapping.
    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % BINDING_FIELDS;
    }

    /// Move focus to the previous field, wrapping.
    pub fn prev_field(&mut self) {
        self.focus = self.focus.checked_sub(1).unwrap_or(BINDING_FIELDS - 1);
    }

    /// Forward an editing key to the focused field.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        self.fields[self.focus].handle_key(key)
    }

    /// Build the binding record from the fields, no validation.
    pub fn to_bindings(&self) -> KeyBindings {
        KeyBindings {
            up_key: self.fields[0].buffer().to_string(),
            down_key: self.fields[1].buffer().to_string(),
            left_key: self.fields[2].buffer().to_string(),
            right_key: self.fields[3].buffer().to_string(),
            plant_key: self.fields[4].buffer().to_string(),
            fuse_key: self.fields[5].buffer().to_string(),
        }
    }
}

impl Default for RebindForm {
    fn default() -> Self {
        Self::from_bindings(&KeyBindings::default())
    }
}
