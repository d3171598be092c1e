//! TUI application state: input text, mode, pending request, current result.

use std::time::Instant;

use serde_json::Value;

use crate::core::analysis::{AnalysisMode, BiasResult, normalize};
use crate::core::api::HealthStatus;
use crate::core::examples::EXAMPLE_TEXTS;

pub struct App {
    /// Text to analyze, edited in the input pane.
    pub(crate) input: String,
    /// Cursor position in the input (byte index on a char boundary).
    pub(crate) input_cursor: usize,
    /// Mode used for the next request; toggled with Tab.
    pub(crate) mode: AnalysisMode,
    /// True while a request is in flight; the submit action is disabled.
    pub(crate) is_analyzing: bool,
    /// When the in-flight request started; drives the spinner.
    pub(crate) analysis_started_at: Option<Instant>,
    /// Result of the last completed request, replaced outright by the next.
    pub(crate) result: Option<BiasResult>,
    /// Normalization or transport error from the last request.
    pub(crate) error: Option<String>,
    /// Whether annotated segments are rendered with category colors.
    pub(crate) show_highlights: bool,
    /// Results pane scroll offset in lines.
    pub(crate) scroll: usize,
    /// Max scroll from last draw; used to clamp scroll_down.
    pub(crate) last_max_scroll: usize,
    pub(crate) health: Option<HealthStatus>,
    pub(crate) health_error: Option<String>,
    /// When health was last checked; for the 30 s refresh.
    pub(crate) health_checked_at: Option<Instant>,
    /// Index of the next example text inserted with Ctrl+E.
    pub(crate) next_example: usize,
}

impl App {
    pub fn new(mode: AnalysisMode) -> Self {
        Self {
            input: String::new(),
            input_cursor: 0,
            mode,
            is_analyzing: false,
            analysis_started_at: None,
            result: None,
            error: None,
            show_highlights: true,
            scroll: 0,
            last_max_scroll: 0,
            health: None,
            health_error: None,
            health_checked_at: None,
            next_example: 0,
        }
    }

    pub(crate) fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AnalysisMode::Quick => AnalysisMode::Comprehensive,
            AnalysisMode::Comprehensive => AnalysisMode::Quick,
        };
    }

    pub(crate) fn toggle_highlights(&mut self) {
        self.show_highlights = !self.show_highlights;
    }

    /// Clear the input and discard the current result and error.
    pub(crate) fn clear_input(&mut self) {
        self.input.clear();
        self.input_cursor = 0;
        self.result = None;
        self.error = None;
        self.scroll = 0;
    }

    /// Replace the input with the next example text, cycling through them.
    pub(crate) fn insert_example(&mut self) {
        let example = EXAMPLE_TEXTS[self.next_example % EXAMPLE_TEXTS.len()];
        self.next_example += 1;
        self.input = example.to_string();
        self.input_cursor = self.input.len();
        self.result = None;
        self.error = None;
        self.scroll = 0;
    }

    pub(crate) fn start_analysis(&mut self) {
        self.is_analyzing = true;
        self.analysis_started_at = Some(Instant::now());
    }

    /// Handle an arrived response: last response wins, the previous result is
    /// discarded either way. Normalization runs here, on the UI thread.
    pub(crate) fn finish_analysis(&mut self, mode: AnalysisMode, outcome: Result<Value, String>) {
        self.is_analyzing = false;
        self.analysis_started_at = None;
        self.result = None;
        self.scroll = 0;
        match outcome {
            Ok(raw) => match normalize(&raw, mode) {
                Ok(result) => {
                    self.error = None;
                    self.result = Some(result);
                }
                Err(e) => self.error = Some(e.to_string()),
            },
            Err(e) => self.error = Some(e),
        }
    }

    pub(crate) fn insert_char(&mut self, c: char) {
        self.input.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
    }

    pub(crate) fn backspace(&mut self) {
        if let Some((idx, c)) = self.input[..self.input_cursor].char_indices().next_back() {
            self.input.remove(idx);
            self.input_cursor -= c.len_utf8();
        }
    }

    pub(crate) fn cursor_left(&mut self) {
        if let Some((idx, _)) = self.input[..self.input_cursor].char_indices().next_back() {
            self.input_cursor = idx;
        }
    }

    pub(crate) fn cursor_right(&mut self) {
        if let Some(c) = self.input[self.input_cursor..].chars().next() {
            self.input_cursor += c.len_utf8();
        }
    }

    pub(crate) fn scroll_up(&mut self, n: usize) {
        self.scroll = self.scroll.saturating_sub(n);
    }

    pub(crate) fn scroll_down(&mut self, n: usize) {
        self.scroll = (self.scroll + n).min(self.last_max_scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_and_backspace_respect_char_boundaries() {
        let mut app = App::new(AnalysisMode::Quick);
        app.insert_char('é');
        app.insert_char('x');
        assert_eq!(app.input, "éx");
        app.backspace();
        app.backspace();
        assert!(app.input.is_empty());
        assert_eq!(app.input_cursor, 0);
    }

    #[test]
    fn cursor_moves_over_multibyte_chars() {
        let mut app = App::new(AnalysisMode::Quick);
        app.input = "aé".to_string();
        app.input_cursor = app.input.len();
        app.cursor_left();
        assert_eq!(app.input_cursor, 1);
        app.cursor_left();
        assert_eq!(app.input_cursor, 0);
        app.cursor_right();
        assert_eq!(app.input_cursor, 1);
    }

    #[test]
    fn finish_analysis_replaces_previous_result() {
        let mut app = App::new(AnalysisMode::Quick);
        let ok = json!({
            "text": "a",
            "has_bias": false,
            "timestamp": "2026-08-26T10:15:00"
        });
        app.finish_analysis(AnalysisMode::Quick, Ok(ok));
        assert!(app.result.is_some());
        assert!(app.error.is_none());

        // A later failure discards the stale result rather than keeping it.
        app.finish_analysis(AnalysisMode::Quick, Err("connection refused".to_string()));
        assert!(app.result.is_none());
        assert_eq!(app.error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn finish_analysis_surfaces_normalize_errors() {
        let mut app = App::new(AnalysisMode::Quick);
        let bad = json!({
            "text": "a",
            "has_bias": false,
            "severity": "severe",
            "timestamp": "2026-08-26T10:15:00"
        });
        app.finish_analysis(AnalysisMode::Quick, Ok(bad));
        assert!(app.result.is_none());
        assert!(app.error.as_deref().unwrap().contains("inconsistent"));
    }

    #[test]
    fn insert_example_cycles() {
        let mut app = App::new(AnalysisMode::Quick);
        app.insert_example();
        let first = app.input.clone();
        app.insert_example();
        assert_ne!(app.input, first);
    }
}
