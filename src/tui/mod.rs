//! TUI to submit text and view bias-analysis results.

mod app;
mod constants;
mod draw;
mod handlers;
mod theme;

pub use app::App;

use std::io;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use crossterm::execute;
use tokio::runtime::Runtime;

use crate::core::api::{ApiClient, HealthStatus};
use crate::core::config::Config;

use draw::draw;
use handlers::{HandleResult, PendingAnalysis};

const HEALTH_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Spawn a health check in the background. Returns a receiver for the status
/// or an error string.
fn spawn_health_fetch(
    config: Arc<Config>,
    rt: &Arc<Runtime>,
) -> mpsc::Receiver<Result<HealthStatus, String>> {
    let (tx, rx) = mpsc::channel();
    let rt_clone = Arc::clone(rt);
    thread::spawn(move || {
        let client = ApiClient::new(config.as_ref());
        let result = rt_clone.block_on(client.health()).map_err(|e| e.to_string());
        let _ = tx.send(result);
    });
    rx
}

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the TUI loop. Uses a dedicated Tokio runtime for async API calls.
pub fn run(config: Arc<Config>) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let rt = Arc::new(
        Runtime::new().map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?,
    );

    let mut app = App::new(config.default_mode);
    let mut pending_analysis: Option<PendingAnalysis> = None;

    // Start the first health check immediately
    let mut pending_health = Some(spawn_health_fetch(Arc::clone(&config), &rt));

    loop {
        if let Some(ref health_rx) = pending_health
            && let Ok(result) = health_rx.try_recv()
        {
            match result {
                Ok(health) => {
                    app.health = Some(health);
                    app.health_error = None;
                }
                Err(e) => {
                    app.health = None;
                    app.health_error = Some(e);
                }
            }
            app.health_checked_at = Some(Instant::now());
            pending_health = None;
        }

        if pending_health.is_none()
            && app
                .health_checked_at
                .is_some_and(|t| t.elapsed() >= HEALTH_REFRESH_INTERVAL)
        {
            pending_health = Some(spawn_health_fetch(Arc::clone(&config), &rt));
        }

        // Last response wins: the previous result is discarded outright.
        if let Some(ref pending) = pending_analysis
            && let Ok(outcome) = pending.result_rx.try_recv()
        {
            let mode = pending.mode;
            app.finish_analysis(mode, outcome);
            pending_analysis = None;
        }

        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))?
            && let Event::Key(key) = event::read()?
        {
            let result = handlers::handle_key(key, &mut app, &config, &mut pending_analysis, &rt);
            if result == HandleResult::Break {
                break;
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
