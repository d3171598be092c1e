//! Event handlers for the TUI keyboard input.

mod analyze_spawn;

use std::sync::Arc;
use std::sync::mpsc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde_json::Value;
use tokio::runtime::Runtime;

use crate::core::analysis::AnalysisMode;
use crate::core::config::Config;

use super::app::App;
use super::constants;

/// Holds the receiver for an analysis request in progress, along with the
/// mode it was issued in (the user may toggle the mode while waiting).
pub struct PendingAnalysis {
    pub mode: AnalysisMode,
    pub result_rx: mpsc::Receiver<Result<Value, String>>,
}

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

/// Handle a key event for the main screen.
pub(crate) fn handle_key(
    key: KeyEvent,
    app: &mut App,
    config: &Arc<Config>,
    pending_analysis: &mut Option<PendingAnalysis>,
    rt: &Arc<Runtime>,
) -> HandleResult {
    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => HandleResult::Break,
        (KeyCode::Enter, _) => {
            // Submit is disabled while a request is pending (advisory gate,
            // one outstanding request at a time).
            let text = app.input.trim().to_string();
            if !text.is_empty() && pending_analysis.is_none() {
                let pa =
                    analyze_spawn::spawn_analysis(rt, Arc::clone(config), text, app.mode);
                *pending_analysis = Some(pa);
                app.start_analysis();
            }
            HandleResult::Continue
        }
        (KeyCode::Tab, _) => {
            app.toggle_mode();
            HandleResult::Continue
        }
        (KeyCode::Char('h'), KeyModifiers::CONTROL) => {
            app.toggle_highlights();
            HandleResult::Continue
        }
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => {
            app.clear_input();
            HandleResult::Continue
        }
        (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
            app.insert_example();
            HandleResult::Continue
        }
        (KeyCode::Backspace, _) => {
            app.backspace();
            HandleResult::Continue
        }
        (KeyCode::Left, _) => {
            app.cursor_left();
            HandleResult::Continue
        }
        (KeyCode::Right, _) => {
            app.cursor_right();
            HandleResult::Continue
        }
        (KeyCode::Up, _) => {
            app.scroll_up(constants::SCROLL_LINES_SMALL);
            HandleResult::Continue
        }
        (KeyCode::Down, _) => {
            app.scroll_down(constants::SCROLL_LINES_SMALL);
            HandleResult::Continue
        }
        (KeyCode::PageUp, _) => {
            app.scroll_up(constants::SCROLL_LINES_PAGE);
            HandleResult::Continue
        }
        (KeyCode::PageDown, _) => {
            app.scroll_down(constants::SCROLL_LINES_PAGE);
            HandleResult::Continue
        }
        (KeyCode::Char(c), mods) => {
            // Ignore Alt/Ctrl+key: user likely intended a shortcut
            if mods.contains(KeyModifiers::ALT) || mods.contains(KeyModifiers::CONTROL) {
                return HandleResult::Continue;
            }
            app.insert_char(c);
            HandleResult::Continue
        }
        _ => HandleResult::Continue,
    }
}
