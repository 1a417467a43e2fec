//! UI state machine
//!
//! Pure state machine that processes terminal events and bridge
//! confirmations, producing actions for the runtime to execute. Completely
//! decoupled from I/O.
//!
//! # Modes
//!
//! In [`Mode::Play`] character keys are forwarded to the translator as raw
//! press/release signals: press and repeat both become key-down (the
//! translator deliberately sees auto-repeat), release becomes key-up.
//! Control keys switch modes: Tab opens the queue-join prompt, F2 the
//! rebinding form, Esc quits. The two form modes capture keys for text
//! editing instead and ignore release events.

mod action;
mod event;
mod state;

pub use action::AppAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
pub use event::AppEvent;
use sapper_client::{InputSignal, KeyBindings};
use sapper_proto::{Command, Direction};
pub use state::{ConnectionState, LogEntry, LogKind, Mode};

use crate::forms::{RebindForm, TextField};

/// Maximum retained log entries.
const LOG_CAPACITY: usize = 100;

/// UI state machine.
///
/// Holds display state (mode, forms, rolling log, active direction) and
/// emits actions; the translator's movement state lives in the bridge, not
/// here.
#[derive(Debug, Clone)]
pub struct App {
    mode: Mode,
    connection: ConnectionState,
    /// Display copy of the bindings, updated on [`AppEvent::BindingsReplaced`].
    bindings: KeyBindings,
    /// Direction of the last confirmed `move`, cleared by `stop`.
    active: Option<Direction>,
    log: Vec<LogEntry>,
    queue_form: TextField,
    rebind_form: RebindForm,
    status_message: Option<String>,
    terminal_size: (u16, u16),
}

impl App {
    /// Create a new App in play mode with default bindings.
    pub fn new(connection: ConnectionState) -> Self {
        Self {
            mode: Mode::Play,
            connection,
            bindings: KeyBindings::default(),
            active: None,
            log: Vec::new(),
            queue_form: TextField::new(),
            rebind_form: RebindForm::default(),
            status_message: None,
            terminal_size: (80, 24),
        }
    }

    /// Process an event and return actions for the runtime.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick => vec![],
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::FocusGained => {
                self.push_log(LogKind::Notice, "focus gained");
                vec![AppAction::Render]
            },
            AppEvent::FocusLost => {
                self.push_log(LogKind::Notice, "focus lost");
                vec![AppAction::Render]
            },
            AppEvent::CommandSent(command) => {
                match command {
                    Command::Move(direction) => self.active = Some(direction),
                    Command::Stop => self.active = None,
                    Command::Plant | Command::Fuse => {},
                }
                let mut text = command.event_name().to_string();
                for arg in command.args() {
                    text.push(' ');
                    text.push_str(&arg);
                }
                self.push_log(LogKind::Sent, text);
                vec![AppAction::Render]
            },
            AppEvent::QueueJoined { queue } => {
                self.status_message = Some(format!("Joining queue \"{queue}\""));
                self.push_log(LogKind::Notice, format!("join_queue \"{queue}\""));
                vec![AppAction::Render]
            },
            AppEvent::BindingsReplaced(bindings) => {
                self.bindings = bindings;
                self.status_message = Some("Bindings replaced".to_string());
                self.push_log(LogKind::Notice, "bindings replaced");
                vec![AppAction::Render]
            },
            AppEvent::ServerMessage(value) => {
                self.push_log(LogKind::Received, value.to_string());
                vec![AppAction::Render]
            },
        }
    }

    /// Handle keyboard input by mode.
    fn handle_key(&mut self, key: KeyEvent) -> Vec<AppAction> {
        match self.mode {
            Mode::Play => self.handle_play_key(key),
            Mode::QueueJoin => self.handle_queue_key(key),
            Mode::Rebind => self.handle_rebind_key(key),
        }
    }

    /// Play mode: control keys on press, character keys as raw signals.
    fn handle_play_key(&mut self, key: KeyEvent) -> Vec<AppAction> {
        if key.kind == KeyEventKind::Press {
            match key.code {
                KeyCode::Esc => return vec![AppAction::Quit],
                KeyCode::Tab => {
                    self.mode = Mode::QueueJoin;
                    self.queue_form = TextField::new();
                    return vec![AppAction::Render];
                },
                KeyCode::F(2) => {
                    self.mode = Mode::Rebind;
                    self.rebind_form = RebindForm::from_bindings(&self.bindings);
                    return vec![AppAction::Render];
                },
                _ => {},
            }
        }

        let KeyCode::Char(c) = key.code else {
            return vec![];
        };

        // Press and repeat both map to key-down: the translator reproduces
        // the original client's auto-repeat passthrough.
        let signal = if key.kind == KeyEventKind::Release {
            InputSignal::KeyUp(c.to_string())
        } else {
            InputSignal::KeyDown(c.to_string())
        };

        vec![AppAction::Signal(signal)]
    }

    /// Queue-join form: text editing, Enter submits exactly once.
    fn handle_queue_key(&mut self, key: KeyEvent) -> Vec<AppAction> {
        if key.kind == KeyEventKind::Release {
            return vec![];
        }

        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Play;
                vec![AppAction::Render]
            },
            KeyCode::Enter => {
                let queue = self.queue_form.take();
                self.mode = Mode::Play;
                // The queue name is free text; empty submissions go through
                // unvalidated, like the original form.
                vec![AppAction::JoinQueue { queue }, AppAction::Render]
            },
            code => {
                if self.queue_form.handle_key(code) {
                    vec![AppAction::Render]
                } else {
                    vec![]
                }
            },
        }
    }

    /// Rebinding form: Tab cycles fields, Enter replaces wholesale.
    fn handle_rebind_key(&mut self, key: KeyEvent) -> Vec<AppAction> {
        if key.kind == KeyEventKind::Release {
            return vec![];
        }

        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Play;
                vec![AppAction::Render]
            },
            KeyCode::Tab => {
                self.rebind_form.next_field();
                vec![AppAction::Render]
            },
            KeyCode::BackTab => {
                self.rebind_form.prev_field();
                vec![AppAction::Render]
            },
            KeyCode::Enter => {
                let bindings = self.rebind_form.to_bindings();
                self.mode = Mode::Play;
                vec![AppAction::ReplaceBindings(bindings), AppAction::Render]
            },
            code => {
                if self.rebind_form.handle_key(code) {
                    vec![AppAction::Render]
                } else {
                    vec![]
                }
            },
        }
    }

    /// Append a log entry, dropping the oldest past capacity.
    fn push_log(&mut self, kind: LogKind, text: impl Into<String>) {
        self.log.push(LogEntry::new(kind, text));
        if self.log.len() > LOG_CAPACITY {
            self.log.remove(0);
        }
    }

    /// Current input mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Connection target.
    pub fn connection(&self) -> &ConnectionState {
        &self.connection
    }

    /// Display copy of the bindings.
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Direction of the last confirmed move, if still moving.
    pub fn active_direction(&self) -> Option<Direction> {
        self.active
    }

    /// Rolling command log, oldest first.
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Queue-join form state.
    pub fn queue_form(&self) -> &TextField {
        &self.queue_form
    }

    /// Rebinding form state.
    pub fn rebind_form(&self) -> &RebindForm {
        &self.rebind_form
    }

    /// Status message to display. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn new_app() -> App {
        App::new(ConnectionState::Practice)
    }

    fn key(code: KeyCode, kind: KeyEventKind) -> AppEvent {
        AppEvent::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind))
    }

    #[test]
    fn play_press_forwards_key_down() {
        let mut app = new_app();

        let actions = app.handle(key(KeyCode::Char('z'), KeyEventKind::Press));

        assert_eq!(actions, vec![AppAction::Signal(InputSignal::KeyDown("z".to_string()))]);
    }

    #[test]
    fn play_repeat_also_forwards_key_down() {
        let mut app = new_app();

        let actions = app.handle(key(KeyCode::Char('o'), KeyEventKind::Repeat));

        assert_eq!(actions, vec![AppAction::Signal(InputSignal::KeyDown("o".to_string()))]);
    }

    #[test]
    fn play_release_forwards_key_up() {
        let mut app = new_app();

        let actions = app.handle(key(KeyCode::Char('z'), KeyEventKind::Release));

        assert_eq!(actions, vec![AppAction::Signal(InputSignal::KeyUp("z".to_string()))]);
    }

    #[test]
    fn esc_quits_in_play_mode() {
        let mut app = new_app();

        let actions = app.handle(key(KeyCode::Esc, KeyEventKind::Press));

        assert_eq!(actions, vec![AppAction::Quit]);
    }

    #[test]
    fn queue_form_submits_exactly_once() {
        let mut app = new_app();

        let _ = app.handle(key(KeyCode::Tab, KeyEventKind::Press));
        assert_eq!(app.mode(), Mode::QueueJoin);

        for c in "arena1".chars() {
            let _ = app.handle(key(KeyCode::Char(c), KeyEventKind::Press));
        }
        let actions = app.handle(key(KeyCode::Enter, KeyEventKind::Press));

        assert_eq!(
            actions,
            vec![AppAction::JoinQueue { queue: "arena1".to_string() }, AppAction::Render]
        );
        assert_eq!(app.mode(), Mode::Play);

        // A second Enter back in play mode emits nothing.
        let actions = app.handle(key(KeyCode::Enter, KeyEventKind::Press));
        assert!(actions.is_empty());
    }

    #[test]
    fn queue_form_accepts_empty_submission() {
        let mut app = new_app();

        let _ = app.handle(key(KeyCode::Tab, KeyEventKind::Press));
        let actions = app.handle(key(KeyCode::Enter, KeyEventKind::Press));

        assert_eq!(actions, vec![AppAction::JoinQueue { queue: String::new() }, AppAction::Render]);
    }

    #[test]
    fn queue_form_esc_cancels_without_submitting() {
        let mut app = new_app();

        let _ = app.handle(key(KeyCode::Tab, KeyEventKind::Press));
        let _ = app.handle(key(KeyCode::Char('a'), KeyEventKind::Press));
        let actions = app.handle(key(KeyCode::Esc, KeyEventKind::Press));

        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.mode(), Mode::Play);
    }

    #[test]
    fn form_modes_capture_game_keys() {
        let mut app = new_app();

        let _ = app.handle(key(KeyCode::Tab, KeyEventKind::Press));
        let actions = app.handle(key(KeyCode::Char('z'), KeyEventKind::Press));

        // "z" lands in the form buffer, not in the translator.
        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.queue_form().buffer(), "z");
    }

    #[test]
    fn rebind_form_replaces_wholesale() {
        let mut app = new_app();

        let _ = app.handle(key(KeyCode::F(2), KeyEventKind::Press));
        assert_eq!(app.mode(), Mode::Rebind);

        // Replace the Up binding "z" with "w".
        let _ = app.handle(key(KeyCode::Backspace, KeyEventKind::Press));
        let _ = app.handle(key(KeyCode::Char('w'), KeyEventKind::Press));
        let actions = app.handle(key(KeyCode::Enter, KeyEventKind::Press));

        let expected = KeyBindings { up_key: "w".to_string(), ..KeyBindings::default() };
        assert_eq!(
            actions,
            vec![AppAction::ReplaceBindings(expected.clone()), AppAction::Render]
        );
        assert_eq!(app.mode(), Mode::Play);

        // Display copy updates once the bridge confirms.
        let _ = app.handle(AppEvent::BindingsReplaced(expected.clone()));
        assert_eq!(app.bindings(), &expected);
    }

    #[test]
    fn command_confirmations_drive_the_indicator() {
        let mut app = new_app();

        let _ = app.handle(AppEvent::CommandSent(Command::Move(Direction::West)));
        assert_eq!(app.active_direction(), Some(Direction::West));

        let _ = app.handle(AppEvent::CommandSent(Command::Plant));
        assert_eq!(app.active_direction(), Some(Direction::West));

        let _ = app.handle(AppEvent::CommandSent(Command::Stop));
        assert_eq!(app.active_direction(), None);
    }

    #[test]
    fn log_is_capped() {
        let mut app = new_app();

        for _ in 0..=LOG_CAPACITY {
            let _ = app.handle(AppEvent::CommandSent(Command::Plant));
        }

        assert_eq!(app.log().len(), LOG_CAPACITY);
    }
}
