//! Application run modes: logger init, one-shot analysis, TUI launch.

use std::io;
use std::sync::Arc;

use crate::cli::Args;
use crate::core;
use crate::core::analysis::AnalysisMode;
use crate::core::config::Config;

/// Initialize env_logger. In TUI mode, output is discarded to avoid
/// corrupting the alternate screen.
pub fn init_logger(args: &Args) {
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()));
    if args.text.is_none() && args.command.is_none() {
        logger.target(env_logger::Target::Pipe(Box::new(io::sink())));
    }
    let _ = logger.try_init();
}

/// Run one-shot mode: analyze the text once and print a report (or the raw
/// payload with `--json`) to stdout.
pub async fn run_one_shot(args: &Args, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let text_arg = args.text.as_ref().expect("text is some");
    let text = if text_arg == "-" {
        io::read_to_string(io::stdin())?
    } else {
        text_arg.clone()
    };
    let text = text.trim();
    if text.is_empty() {
        eprintln!("Error: empty text");
        std::process::exit(1);
    }

    let mode = match &args.mode {
        Some(s) => s.parse::<AnalysisMode>().unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }),
        None => config.default_mode,
    };

    let client = core::api::ApiClient::new(config);
    let raw = client.analyze(text, mode).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&raw)?);
        return Ok(());
    }

    let result = core::analysis::normalize(&raw, mode)?;
    log::info!(
        "analysis complete: has_bias={} severity={}",
        result.has_bias,
        result.severity.label()
    );
    core::cli::print_report(&result);
    Ok(())
}

/// Launch the TUI in a blocking thread. Returns on panic or IO error.
pub async fn launch_tui(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(config);
    let join_result: Result<io::Result<()>, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || crate::tui::run(config)).await;

    match join_result {
        Ok(io_result) => io_result?,
        Err(join_err) => {
            if let Ok(panic) = join_err.try_into_panic() {
                let msg = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    format!("{:?}", panic)
                };
                eprintln!("TUI panic: {}", msg);
            }
            return Err(
                Box::new(io::Error::other("TUI thread panicked")) as Box<dyn std::error::Error>
            );
        }
    }
    Ok(())
}
