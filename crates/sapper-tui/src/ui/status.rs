//! Status bar
//!
//! Displays the connection target, input mode, active direction, and the
//! latest status message.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use sapper_proto::Direction;

use crate::app::{App, ConnectionState, Mode};

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let connection = match app.connection() {
        ConnectionState::Practice => {
            Span::styled("Practice", Style::default().fg(Color::Yellow))
        },
        ConnectionState::Remote { addr } => Span::styled(
            format!("Connected ({addr})"),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    };

    let mode = match app.mode() {
        Mode::Play => " | Play (Tab: queue, F2: rebind, Esc: quit)",
        Mode::QueueJoin => " | Queue join",
        Mode::Rebind => " | Rebind",
    };

    let moving = app.active_direction().map_or_else(String::new, |d: Direction| {
        format!(" | Moving {}", d.compass_code())
    });

    let message =
        app.status_message().map_or_else(String::new, |msg| format!(" | {msg}"));

    let status_line = Line::from(vec![
        Span::raw(" "),
        connection,
        Span::styled(mode, Style::default().fg(Color::DarkGray)),
        Span::styled(moving, Style::default().fg(Color::Yellow)),
        Span::raw(message),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
