//! Command log
//!
//! Displays the rolling log of outbound commands, server notifications,
//! and local notices, newest at the bottom.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::app::{App, LogKind};

const SENT_PREFIX: &str = "> ";
const RECEIVED_PREFIX: &str = "< ";
const NOTICE_PREFIX: &str = "- ";

/// Render the command log.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let skip = app.log().len().saturating_sub(visible);

    let items: Vec<ListItem> = app
        .log()
        .iter()
        .skip(skip)
        .map(|entry| {
            let (prefix, style) = match entry.kind {
                LogKind::Sent => (SENT_PREFIX, Style::default().fg(Color::Green)),
                LogKind::Received => (RECEIVED_PREFIX, Style::default().fg(Color::Cyan)),
                LogKind::Notice => (NOTICE_PREFIX, Style::default().fg(Color::DarkGray)),
            };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::raw(entry.text.clone()),
            ]))
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(" Commands ");
    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}
