//! Async runtime
//!
//! Event loop that drives terminal I/O and coordinates between the App
//! state machine, Bridge, and server connection. Uses tokio::select! to
//! handle terminal events and server notifications concurrently.
//!
//! Supports two modes:
//! - Practice mode: in-process server for offline use
//! - TCP mode: real connection to a game server
//!
//! Key release events require the kitty keyboard protocol
//! (`REPORT_EVENT_TYPES`); the runtime requests it on startup and degrades
//! to press-only input on terminals without it.

use std::io::{self, Stdout, stdout};

use crossterm::{
    ExecutableCommand,
    event::{
        DisableFocusChange, EnableFocusChange, Event, EventStream, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use sapper_client::{
    CommandChannel, KeyBindings,
    transport::{self, ConnectedClient, TransportError},
};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::{
    app::{App, AppAction, AppEvent, ConnectionState},
    bridge::Bridge,
    server::{self, ServerHandle},
    ui,
};

/// Runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport error.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Connection to a server (either in-process or TCP).
enum Connection {
    /// In-process practice server.
    InProcess(ServerHandle),
    /// TCP connection to a remote server.
    Tcp(ConnectedClient),
}

impl Connection {
    fn channel(&self) -> CommandChannel {
        match self {
            Connection::InProcess(h) => CommandChannel::new(h.to_server.clone()),
            Connection::Tcp(c) => c.channel.clone(),
        }
    }

    fn from_server(&mut self) -> &mut mpsc::Receiver<serde_json::Value> {
        match self {
            Connection::InProcess(h) => &mut h.from_server,
            Connection::Tcp(c) => &mut c.from_server,
        }
    }

    fn stop(&self) {
        match self {
            Connection::InProcess(h) => h.stop(),
            Connection::Tcp(c) => c.stop(),
        }
    }
}

/// Async runtime for the TUI.
///
/// Manages terminal setup/teardown and the main event loop. The bridge is
/// constructed over an already-connected channel; reconnection is not this
/// layer's concern.
pub struct Runtime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    app: App,
    bridge: Bridge,
    connection: Connection,
}

impl Runtime {
    /// Create a runtime in practice mode with an in-process server.
    pub fn new() -> Result<Self, RuntimeError> {
        Self::create(Connection::InProcess(server::spawn_server()), ConnectionState::Practice)
    }

    /// Create a runtime connected to a game server over TCP.
    pub async fn with_server(addr: String) -> Result<Self, RuntimeError> {
        let client = transport::connect(&addr).await?;
        Self::create(Connection::Tcp(client), ConnectionState::Remote { addr })
    }

    fn create(connection: Connection, state: ConnectionState) -> Result<Self, RuntimeError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        stdout().execute(EnableFocusChange)?;

        // Not all terminals support the enhancement; presses still work
        // without it, releases just never arrive.
        if stdout()
            .execute(PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES))
            .is_err()
        {
            tracing::warn!("keyboard enhancement unavailable, key releases will not be reported");
        }

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let app = App::new(state);
        let bridge = Bridge::new(KeyBindings::default(), connection.channel());

        Ok(Self { terminal, app, bridge, connection })
    }

    /// Run the main event loop.
    pub async fn run(mut self) -> Result<(), RuntimeError> {
        self.render()?;

        let mut event_stream = EventStream::new();
        let mut tick_interval = tokio::time::interval(std::time::Duration::from_millis(250));

        loop {
            let should_quit = tokio::select! {
                // Terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_terminal_event(event)?,
                        Some(Err(e)) => return Err(RuntimeError::Io(e)),
                        None => true,
                    }
                }

                // Notifications from the server
                Some(value) = self.connection.from_server().recv() => {
                    let events = self.bridge.handle_server_message(value);
                    self.process_bridge_events(events)?
                }

                // Periodic tick
                _ = tick_interval.tick() => {
                    let actions = self.app.handle(AppEvent::Tick);
                    self.process_actions(actions)?
                }
            };

            if should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle a terminal event and return whether to quit.
    fn handle_terminal_event(&mut self, event: Event) -> Result<bool, RuntimeError> {
        let app_event = match event {
            Event::Key(key) => AppEvent::Key(key),
            Event::Resize(cols, rows) => AppEvent::Resize(cols, rows),
            Event::FocusGained => {
                tracing::info!("terminal focus gained");
                AppEvent::FocusGained
            },
            Event::FocusLost => {
                tracing::info!("terminal focus lost");
                AppEvent::FocusLost
            },
            _ => return Ok(false),
        };

        let actions = self.app.handle(app_event);
        self.process_actions(actions)
    }

    /// Process actions returned by the app. Returns true if should quit.
    ///
    /// Uses iterative processing: bridge confirmations feed back into the
    /// app, whose follow-up actions land on the same queue.
    fn process_actions(&mut self, initial_actions: Vec<AppAction>) -> Result<bool, RuntimeError> {
        let mut pending_actions = initial_actions;

        while !pending_actions.is_empty() {
            let actions = std::mem::take(&mut pending_actions);

            for action in actions {
                match action {
                    AppAction::Render => self.render()?,
                    AppAction::Quit => return Ok(true),

                    // Input-layer operations go through the bridge
                    other @ (AppAction::Signal(_)
                    | AppAction::JoinQueue { .. }
                    | AppAction::ReplaceBindings(_)) => {
                        let events = self.bridge.process_app_action(other);
                        for event in events {
                            pending_actions.extend(self.app.handle(event));
                        }
                    },
                }
            }
        }

        Ok(false)
    }

    /// Process events from the bridge back to the app.
    fn process_bridge_events(&mut self, events: Vec<AppEvent>) -> Result<bool, RuntimeError> {
        for event in events {
            let actions = self.app.handle(event);
            if self.process_actions(actions)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Render the UI.
    fn render(&mut self) -> Result<(), RuntimeError> {
        self.terminal.draw(|frame| {
            ui::render(frame, &self.app);
        })?;
        Ok(())
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        self.connection.stop();

        let _ = stdout().execute(PopKeyboardEnhancementFlags);
        let _ = stdout().execute(DisableFocusChange);
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
