use std::env;
use std::time::Duration;

use crate::core::analysis::AnalysisMode;

/// Default base URL of the bias-analysis service.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the analysis service, without a trailing slash.
    pub api_url: String,
    pub timeout: Duration,
    pub default_mode: AnalysisMode,
}

/// Load configuration from environment. Nothing is required: every setting
/// has a default, and unparsable values fall back to it.
pub fn load() -> Config {
    let api_url = env::var("BIASLENS_API_URL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let api_url = api_url.trim().trim_end_matches('/').to_string();

    let timeout = env::var("BIASLENS_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

    let default_mode = env::var("BIASLENS_MODE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(AnalysisMode::Quick);

    Config {
        api_url,
        timeout,
        default_mode,
    }
}
