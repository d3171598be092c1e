//! # biaslens: terminal client for a text bias-analysis service
//!
//! Submit text to a remote bias-analysis service and view the normalized
//! result with inline highlight rendering.
//!
//! ## Modes
//! - One-shot analysis with `-t` / `--text` (report or `--json` dump)
//! - Interactive terminal UI (default)
//! - Service commands: `health`, `categories`, `config`, `completions`

mod cli;
mod core;
mod run;
mod tui;

use clap::Parser;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = cli::Args::parse();
    run::init_logger(&args);

    let config = core::config::load();

    if let Some(command) = &args.command {
        match command {
            cli::Commands::Health => core::cli::run_health(&config).await,
            cli::Commands::Categories => core::cli::run_categories(&config).await,
            cli::Commands::Config => core::cli::run_config(&config),
            cli::Commands::Completions { shell } => {
                use clap::CommandFactory;
                let mut cmd = cli::Args::command();
                let name = cmd.get_name().to_string();
                cli::generate(*shell, &mut cmd, name, &mut std::io::stdout());
            }
        }
        return Ok(());
    }

    if args.text.is_some() {
        return run::run_one_shot(&args, &config).await;
    }

    run::launch_tui(config).await
}
