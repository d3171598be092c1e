//! Spawns analysis requests in a background thread with a result channel.

use std::sync::Arc;
use std::sync::mpsc;
use tokio::runtime::Runtime;

use crate::core::analysis::AnalysisMode;
use crate::core::api::ApiClient;
use crate::core::config::Config;

use super::PendingAnalysis;

/// Spawn a new analysis request. The raw payload (or a transport error
/// message) arrives on the returned channel. There is no cancellation;
/// whichever response arrives last wins.
pub fn spawn_analysis(
    rt: &Arc<Runtime>,
    config: Arc<Config>,
    text: String,
    mode: AnalysisMode,
) -> PendingAnalysis {
    let (result_tx, result_rx) = mpsc::channel();
    let rt_clone = Arc::clone(rt);

    std::thread::spawn(move || {
        let client = ApiClient::new(config.as_ref());
        let result = rt_clone
            .block_on(client.analyze(&text, mode))
            .map_err(|e| e.to_string());
        let _ = result_tx.send(result);
    });

    PendingAnalysis { mode, result_rx }
}
