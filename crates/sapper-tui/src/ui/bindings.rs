//! Bindings sidebar
//!
//! Displays the six current bindings with the active movement direction
//! highlighted.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use sapper_client::Action;

use crate::app::App;

const ROWS: [(&str, Action); 6] = [
    ("Up   ", Action::MoveUp),
    ("Down ", Action::MoveDown),
    ("Left ", Action::MoveLeft),
    ("Right", Action::MoveRight),
    ("Plant", Action::Plant),
    ("Fuse ", Action::Fuse),
];

/// Render the bindings sidebar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = ROWS
        .iter()
        .map(|&(label, action)| {
            let key = app.bindings().get(action);
            let is_active = action.direction().is_some_and(|d| app.active_direction() == Some(d));

            let style = if is_active {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::raw(format!(" {label} ")),
                Span::styled(format!("[{key}]"), style),
            ]))
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(" Bindings (F2) ");
    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}
