//! Results pane: severity banner, category scores, highlighted text,
//! statistics, and recommendations.

use std::collections::BTreeSet;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::core::analysis::{BiasResult, Segment};

use super::super::app::App;
use super::super::theme;

const SCORE_BAR_WIDTH: usize = 20;

pub(crate) fn draw_results(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Results ");
    let inner_height = area.height.saturating_sub(2) as usize;

    let lines: Vec<Line<'static>> = if let Some(ref error) = app.error {
        error_lines(error)
    } else if let Some(ref result) = app.result {
        result_lines(result, app.show_highlights)
    } else {
        placeholder_lines(app)
    };

    app.last_max_scroll = lines.len().saturating_sub(inner_height);
    let scroll = app.scroll.min(app.last_max_scroll);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0));
    f.render_widget(paragraph, area);
}

fn error_lines(error: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Analysis failed",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )),
    ]
}

fn placeholder_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "Enter text to begin analysis",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Results will appear here",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    if let Some(ref e) = app.health_error {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("Service unreachable: {}", e),
            Style::default().fg(Color::Red),
        )));
    }
    lines
}

fn result_lines(result: &BiasResult, show_highlights: bool) -> Vec<Line<'static>> {
    let severity_style = Style::default()
        .fg(theme::severity_color(result.severity))
        .add_modifier(Modifier::BOLD);

    let mut banner = if result.has_bias {
        vec![Span::styled(
            format!("Bias Detected ({})", result.severity.label()),
            severity_style,
        )]
    } else {
        vec![Span::styled("No Significant Bias Detected", severity_style)]
    };
    if let Some(score) = result.overall_score {
        banner.push(Span::styled(
            format!("  ·  Overall {:.0}%", score * 100.0),
            severity_style,
        ));
    }
    let mut lines = vec![Line::from(banner)];

    let category_rows = score_rows(result);
    if !category_rows.is_empty() {
        lines.push(Line::default());
        lines.push(section_title("Detected categories"));
        lines.extend(category_rows);
    }

    lines.push(Line::default());
    lines.push(section_title(if show_highlights {
        "Text (^H to hide highlights)"
    } else {
        "Text (^H to show highlights)"
    }));
    lines.extend(segment_lines(result, show_highlights));

    if let Some(stats) = result.statistics {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!(
                "{} words · {} chars · {} sentences",
                stats.word_count, stats.char_count, stats.sentence_count
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    if !result.recommendations.is_empty() {
        lines.push(Line::default());
        lines.push(section_title("Recommendations"));
        for rec in &result.recommendations {
            lines.push(Line::from(format!("  • {}", rec)));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!(
            "Analyzed at {}",
            result.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

/// One row per category: colored name plus a score bar when a score exists.
/// Categories and score keys need not match, so both are shown.
fn score_rows(result: &BiasResult) -> Vec<Line<'static>> {
    let names: BTreeSet<&str> = result
        .categories
        .iter()
        .map(|c| c.as_str())
        .chain(result.scores.keys().map(|c| c.as_str()))
        .collect();
    let width = names.iter().map(|n| n.chars().count()).max().unwrap_or(0);

    names
        .into_iter()
        .map(|name| {
            let name_span = Span::styled(
                format!("  {:<width$}  ", name),
                Style::default().fg(theme::category_color(name)),
            );
            match result.scores.get(name) {
                Some(&score) => {
                    let filled = (score * SCORE_BAR_WIDTH as f64).round() as usize;
                    let bar = format!(
                        "{}{} {:>3.0}%",
                        "█".repeat(filled.min(SCORE_BAR_WIDTH)),
                        "░".repeat(SCORE_BAR_WIDTH - filled.min(SCORE_BAR_WIDTH)),
                        score * 100.0
                    );
                    Line::from(vec![
                        name_span,
                        Span::styled(bar, Style::default().fg(theme::category_color(name))),
                    ])
                }
                None => Line::from(name_span),
            }
        })
        .collect()
}

/// The analyzed text as styled lines. Segments are re-derived on every call
/// (each draw and each highlight toggle); they are never cached.
fn segment_lines(result: &BiasResult, show_highlights: bool) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = vec![Line::default()];
    for seg in result.segments() {
        let (content, style) = match seg {
            Segment::Plain(text) => (text, Style::default()),
            Segment::Annotated { text, category } => {
                let style = if show_highlights {
                    Style::default()
                        .fg(theme::category_color(category))
                        .add_modifier(Modifier::UNDERLINED)
                } else {
                    Style::default()
                };
                (text, style)
            }
        };
        // Spans must not contain newlines; split the segment across lines.
        for (i, part) in content.split('\n').enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            if !part.is_empty()
                && let Some(last) = lines.last_mut()
            {
                last.push_span(Span::styled(part.to_string(), style));
            }
        }
    }
    lines
}
