//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.

mod bindings;
mod log;
mod prompt;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::app::{App, Mode};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    const MAIN_AREA_MIN_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(MAIN_AREA_MIN_HEIGHT), Constraint::Length(STATUS_HEIGHT)])
        .split(frame.area());

    let [main_area, status_area] = chunks.as_ref() else {
        return;
    };

    render_main_area(frame, app, *main_area);
    status::render(frame, app, *status_area);

    match app.mode() {
        Mode::Play => {},
        Mode::QueueJoin => prompt::render_queue(frame, app),
        Mode::Rebind => prompt::render_rebind(frame, app),
    }
}

/// Render the main area (bindings sidebar + command log).
fn render_main_area(frame: &mut Frame, app: &App, area: Rect) {
    const BINDINGS_SIDEBAR_WIDTH: u16 = 22;
    const LOG_AREA_MIN_WIDTH: u16 = 20;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BINDINGS_SIDEBAR_WIDTH),
            Constraint::Min(LOG_AREA_MIN_WIDTH),
        ])
        .split(area);

    let [bindings_area, log_area] = chunks.as_ref() else {
        return;
    };

    bindings::render(frame, app, *bindings_area);
    log::render(frame, app, *log_area);
}
