//! CLI-only commands: one-shot analysis report, health, categories, config.
//!
//! These run without opening the TUI and produce plain text output.

use crate::core::analysis::{BiasResult, Segment};
use crate::core::api::ApiClient;
use crate::core::config::Config;

/// Wrap width for the text section of the one-shot report.
const REPORT_WIDTH: usize = 78;

/// Print a plain-text report for a normalized result.
pub fn print_report(result: &BiasResult) {
    if result.has_bias {
        println!("Bias detected (severity: {})", result.severity.label());
    } else {
        println!("No significant bias detected");
    }
    if let Some(score) = result.overall_score {
        println!("Overall score: {:.0}%", score * 100.0);
    }

    if !result.scores.is_empty() {
        println!("\nCategory scores:");
        let width = result
            .scores
            .keys()
            .map(|c| c.len())
            .max()
            .unwrap_or(8)
            .max(8);
        for (category, score) in &result.scores {
            println!("  {:<width$}  {:>3.0}%", category, score * 100.0);
        }
    }
    let unscored: Vec<&str> = result
        .categories
        .iter()
        .filter(|c| !result.scores.contains_key(*c))
        .map(|c| c.as_str())
        .collect();
    if !unscored.is_empty() {
        println!("Flagged without score: {}", unscored.join(", "));
    }

    println!("\nText:");
    for line in marked_text(result).lines() {
        if line.is_empty() {
            println!();
            continue;
        }
        for chunk in textwrap::wrap(line, REPORT_WIDTH) {
            println!("  {}", chunk);
        }
    }

    if let Some(stats) = result.statistics {
        println!(
            "\nStatistics: {} words, {} chars, {} sentences",
            stats.word_count, stats.char_count, stats.sentence_count
        );
    }
    if !result.recommendations.is_empty() {
        println!("\nRecommendations:");
        for rec in &result.recommendations {
            println!("  - {}", rec);
        }
    }

    println!(
        "\nAnalyzed at {}",
        result.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    );
}

/// Render the analyzed text with `[term](category)` markers on annotated
/// segments.
fn marked_text(result: &BiasResult) -> String {
    result
        .segments()
        .iter()
        .map(|seg| match seg {
            Segment::Plain(text) => (*text).to_string(),
            Segment::Annotated { text, category } => format!("[{}]({})", text, category),
        })
        .collect()
}

/// Run the `health` command: query the service and report its status.
pub async fn run_health(config: &Config) {
    let client = ApiClient::new(config);
    match client.health().await {
        Ok(health) => {
            println!("Status:   {}", health.status);
            if !health.service.is_empty() {
                println!("Service:  {}", health.service);
            }
            if !health.version.is_empty() {
                println!("Version:  {}", health.version);
            }
            println!("Lexicons: {}", health.lexicons_loaded);
            println!("Model:    {}", if health.model_loaded { "loaded" } else { "not loaded" });
            if !health.is_healthy() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Run the `categories` command: list the service's bias taxonomy.
pub async fn run_categories(config: &Config) {
    let client = ApiClient::new(config);
    let taxonomy = match client.categories().await {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if taxonomy.categories.is_empty() {
        println!("No categories reported.");
        return;
    }

    let width = taxonomy
        .categories
        .iter()
        .map(|c| c.len())
        .max()
        .unwrap_or(12)
        .max(12);
    for category in &taxonomy.categories {
        match taxonomy.descriptions.get(category) {
            Some(description) => println!("{:<width$}  {}", category, description),
            None => println!("{}", category),
        }
    }
}

/// Run the `config` command: display the resolved settings.
pub fn run_config(config: &Config) {
    println!("API URL:      {}", config.api_url);
    println!("Timeout:      {}s", config.timeout.as_secs());
    println!("Default mode: {}", config.default_mode);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analysis::{AnalysisMode, normalize};
    use serde_json::json;

    #[test]
    fn marked_text_wraps_annotated_segments() {
        let raw = json!({
            "text": "The female nurse.",
            "has_bias": true,
            "severity": "mild",
            "highlights": [{"start": 4, "end": 10, "term": "female", "category": "gender"}],
            "timestamp": "2026-08-26T10:15:00"
        });
        let result = normalize(&raw, AnalysisMode::Quick).unwrap();
        assert_eq!(marked_text(&result), "The [female](gender) nurse.");
    }
}
