//! TUI rendering: layout and widgets for the analyzer interface.

mod header;
mod input;
mod results;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::app::App;
use super::constants::{self, ACCENT};

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(constants::INPUT_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);
    header::draw_header(f, app, chunks[0]);
    input::draw_input(f, app, chunks[1]);
    results::draw_results(f, app, chunks[2]);
    draw_bottom_bar(f, app, chunks[3]);
}

/// Bottom bar: key hints, or spinner while a request is in flight.
fn draw_bottom_bar(f: &mut Frame, app: &App, area: Rect) {
    let hint_style = Style::default().fg(Color::DarkGray);
    let line = if let Some(started_at) = app.analysis_started_at {
        let frame = (started_at.elapsed().as_millis() / 120) as usize % constants::SPINNER.len();
        Line::from(vec![
            Span::styled(
                format!(" {} ", constants::SPINNER[frame]),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("Analyzing…", Style::default().fg(ACCENT)),
        ])
    } else {
        Line::from(Span::styled(
            " Enter analyze · Tab mode · ^E example · ^H highlights · ^L clear · Esc quit",
            hint_style,
        ))
    };
    f.render_widget(Paragraph::new(line), area);
}
