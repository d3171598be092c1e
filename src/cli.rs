//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  biaslens                            Launch interactive TUI
  biaslens -t \"some text\"             Analyze once, print a report to stdout
  biaslens -t - --mode comprehensive  Read text from stdin, detailed analysis
  biaslens -t \"some text\" --json      Dump the raw service payload
  biaslens health                     Check service availability
  biaslens categories                 List bias categories
  biaslens completions bash           Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    version,
    about = "Terminal client for a text bias-analysis service",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Analyze a single text then exit (without opening the TUI)
    #[arg(
        short = 't',
        long,
        help = "Text to analyze for bias (use '-' to read from stdin)"
    )]
    pub text: Option<String>,

    /// Analysis mode for one-shot analysis
    #[arg(short = 'm', long, help = "Analysis mode: quick or comprehensive")]
    pub mode: Option<String>,

    /// Print the raw service payload instead of a report
    #[arg(long, help = "In one-shot mode, dump the raw JSON response")]
    pub json: bool,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check the analysis service health
    Health,
    /// List bias categories known to the service
    Categories,
    /// Show resolved configuration (API URL, timeout, default mode)
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).expect("args parse")
    }

    #[test]
    fn log_level_defaults_to_warn() {
        assert_eq!(args(&["biaslens"]).log_level(), "warn");
    }

    #[test]
    fn log_level_verbose_and_quiet() {
        assert_eq!(args(&["biaslens", "-v"]).log_level(), "info");
        assert_eq!(args(&["biaslens", "-vv"]).log_level(), "debug");
        assert_eq!(args(&["biaslens", "-q"]).log_level(), "error");
    }

    #[test]
    fn one_shot_flags_parse() {
        let a = args(&["biaslens", "-t", "hello", "--mode", "comprehensive", "--json"]);
        assert_eq!(a.text.as_deref(), Some("hello"));
        assert_eq!(a.mode.as_deref(), Some("comprehensive"));
        assert!(a.json);
    }
}
