//! Header: title, analysis mode, and service health indicator.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::super::app::App;
use super::super::constants::{ACCENT, ACCENT_SECONDARY};

pub(crate) fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            " biaslens ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("· mode: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.mode.label().to_string(),
            Style::default().fg(ACCENT_SECONDARY),
        ),
        Span::styled("  ", Style::default()),
    ];
    spans.push(health_span(app));

    let title = Line::from(spans);
    let separator = Line::from(Span::styled(
        "─".repeat(area.width as usize),
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(vec![title, separator]), area);
}

/// Health indicator: green when the service answered healthy, red when
/// unreachable or degraded, gray while the first check is pending.
fn health_span(app: &App) -> Span<'static> {
    match (&app.health, &app.health_error) {
        (Some(h), _) if h.is_healthy() => {
            Span::styled("● online", Style::default().fg(Color::Green))
        }
        (Some(_), _) => Span::styled("● degraded", Style::default().fg(Color::Yellow)),
        (None, Some(_)) => Span::styled("● offline", Style::default().fg(Color::Red)),
        (None, None) => Span::styled("○ checking…", Style::default().fg(Color::DarkGray)),
    }
}
