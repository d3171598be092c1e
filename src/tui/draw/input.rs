//! Input pane: editable text with cursor and a character count.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::super::app::App;
use super::super::constants::ACCENT_SECONDARY;

pub(crate) fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.is_analyzing {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(ACCENT_SECONDARY)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Input ")
        .title_bottom(Line::from(format!(" {} chars ", app.input.chars().count())).right_aligned());

    // Render the cursor inline as a reversed cell.
    let before = app.input[..app.input_cursor].to_string();
    let at = app.input[app.input_cursor..].chars().next();
    let after: String = match at {
        Some(c) => app.input[app.input_cursor + c.len_utf8()..].to_string(),
        None => String::new(),
    };
    let cursor_cell = at.map(|c| c.to_string()).unwrap_or_else(|| " ".to_string());

    let mut spans = Vec::with_capacity(3);
    if !before.is_empty() {
        spans.push(Span::raw(before));
    }
    spans.push(Span::styled(
        cursor_cell,
        Style::default().add_modifier(Modifier::REVERSED),
    ));
    if !after.is_empty() {
        spans.push(Span::raw(after));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
