//! Form popups
//!
//! Centered overlays for the queue-join prompt and the rebinding form,
//! with cursor placement inside the focused field.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    app::App,
    forms::{BINDING_FIELDS, BINDING_LABELS},
};

const PROMPT_WIDTH: u16 = 3; // "> "
const RIGHT_PADDING: u16 = 1; // inside right border

/// Render the queue-join prompt.
pub fn render_queue(frame: &mut Frame, app: &App) {
    const POPUP_WIDTH: u16 = 46;
    const POPUP_HEIGHT: u16 = 3;

    let area = centered(frame.area(), POPUP_WIDTH, POPUP_HEIGHT);
    frame.render_widget(Clear, area);

    let block = Block::default().borders(Borders::ALL).title(" Join queue (Enter: join) ");
    let text = format!("> {}", app.queue_form().buffer());
    let paragraph = Paragraph::new(text).style(Style::default().fg(Color::White)).block(block);

    frame.render_widget(paragraph, area);

    let available_width = area.width.saturating_sub(PROMPT_WIDTH + RIGHT_PADDING);
    let cursor_offset = (app.queue_form().cursor() as u16).min(available_width);
    let cursor_x = area.x.saturating_add(PROMPT_WIDTH).saturating_add(cursor_offset);
    let cursor_y = area.y.saturating_add(1);

    frame.set_cursor_position((cursor_x, cursor_y));
}

/// Render the rebinding form.
pub fn render_rebind(frame: &mut Frame, app: &App) {
    const POPUP_WIDTH: u16 = 40;
    const POPUP_HEIGHT: u16 = BINDING_FIELDS as u16 + 2;
    const LABEL_WIDTH: u16 = 8; // " Plant  "

    let area = centered(frame.area(), POPUP_WIDTH, POPUP_HEIGHT);
    frame.render_widget(Clear, area);

    let form = app.rebind_form();
    let lines: Vec<Line> = (0..BINDING_FIELDS)
        .map(|i| {
            let style = if i == form.focus() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Line::from(vec![
                Span::raw(format!(" {:<6} ", BINDING_LABELS[i])),
                Span::styled(form.field(i).buffer().to_string(), style),
            ])
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(" Rebind (Tab: field, Enter: apply) ");
    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(paragraph, area);

    let focused = form.field(form.focus());
    let available_width = area.width.saturating_sub(LABEL_WIDTH + 1 + RIGHT_PADDING);
    let cursor_offset = (focused.cursor() as u16).min(available_width);
    let cursor_x = area.x.saturating_add(LABEL_WIDTH).saturating_add(1).saturating_add(cursor_offset);
    let cursor_y = area.y.saturating_add(1).saturating_add(form.focus() as u16);

    frame.set_cursor_position((cursor_x, cursor_y));
}

/// Centered rectangle clamped to the frame.
fn centered(frame_area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(frame_area.width);
    let height = height.min(frame_area.height);
    let x = frame_area.x.saturating_add((frame_area.width.saturating_sub(width)) / 2);
    let y = frame_area.y.saturating_add((frame_area.height.saturating_sub(height)) / 2);
    Rect { x, y, width, height }
}
