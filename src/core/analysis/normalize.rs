//! Normalization of raw service payloads into the canonical [`BiasResult`].
//!
//! The two response shapes are decoded as tagged variants with a total
//! mapping each into `BiasResult`; anything fitting neither shape is
//! rejected with a typed error and no partial result.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use super::{AnalysisMode, BiasResult, RawHighlight, Severity, TextStatistics};

/// Why a raw payload was rejected.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// A required field for the selected mode is missing or of the wrong type.
    #[error("malformed {mode} response: {detail}")]
    MalformedSchema { mode: AnalysisMode, detail: String },
    /// `has_bias` and `severity` contradict each other.
    #[error("inconsistent result: has_bias is {has_bias} but severity is {severity}")]
    InconsistentState { has_bias: bool, severity: String },
    /// A category or overall score is outside `[0, 1]`.
    #[error("score out of range for {field}: {value} (expected 0.0..=1.0)")]
    OutOfRangeScore { field: String, value: f64 },
}

/// Raw quick-detection shape: bias fields at top level.
#[derive(Deserialize)]
struct QuickRaw {
    text: String,
    has_bias: bool,
    severity: Option<Severity>,
    #[serde(default)]
    bias_categories: Vec<String>,
    #[serde(default)]
    bias_scores: BTreeMap<String, f64>,
    overall_score: Option<f64>,
    #[serde(default)]
    highlights: Vec<RawHighlight>,
    timestamp: String,
}

/// Raw comprehensive shape: bias fields nested under `bias_analysis`, plus
/// statistics and recommendations at top level.
#[derive(Deserialize)]
struct ComprehensiveRaw {
    text: String,
    bias_analysis: BiasAnalysisRaw,
    statistics: Option<TextStatistics>,
    #[serde(default)]
    recommendations: Vec<String>,
    #[serde(default)]
    highlights: Vec<RawHighlight>,
    timestamp: String,
}

#[derive(Deserialize)]
struct BiasAnalysisRaw {
    has_bias: bool,
    severity: Option<Severity>,
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    scores: BTreeMap<String, f64>,
    overall_score: Option<f64>,
}

/// Map a raw service payload into the canonical result for the given mode.
///
/// Pure and deterministic: no I/O, `raw` is not mutated, and validation
/// failures return a typed error without exposing any partial result.
pub fn normalize(raw: &Value, mode: AnalysisMode) -> Result<BiasResult, NormalizeError> {
    match mode {
        AnalysisMode::Quick => {
            let q = decode::<QuickRaw>(raw, mode)?;
            build(
                mode,
                q.text,
                q.has_bias,
                q.severity,
                q.bias_categories,
                q.bias_scores,
                q.overall_score,
                q.highlights,
                None,
                Vec::new(),
                &q.timestamp,
            )
        }
        AnalysisMode::Comprehensive => {
            let c = decode::<ComprehensiveRaw>(raw, mode)?;
            build(
                mode,
                c.text,
                c.bias_analysis.has_bias,
                c.bias_analysis.severity,
                c.bias_analysis.categories,
                c.bias_analysis.scores,
                c.bias_analysis.overall_score,
                c.highlights,
                c.statistics,
                c.recommendations,
                &c.timestamp,
            )
        }
    }
}

fn decode<'de, T: Deserialize<'de>>(
    raw: &'de Value,
    mode: AnalysisMode,
) -> Result<T, NormalizeError> {
    T::deserialize(raw).map_err(|e| NormalizeError::MalformedSchema {
        mode,
        detail: e.to_string(),
    })
}

#[allow(clippy::too_many_arguments)]
fn build(
    mode: AnalysisMode,
    text: String,
    has_bias: bool,
    severity: Option<Severity>,
    categories: Vec<String>,
    scores: BTreeMap<String, f64>,
    overall_score: Option<f64>,
    highlights: Vec<RawHighlight>,
    statistics: Option<TextStatistics>,
    recommendations: Vec<String>,
    timestamp: &str,
) -> Result<BiasResult, NormalizeError> {
    // Hard invariant: severity is None exactly when has_bias is false.
    // Conflicting input is an error, never silently corrected.
    let severity = match (has_bias, severity) {
        (false, None) | (false, Some(Severity::None)) => Severity::None,
        (false, Some(s)) => {
            return Err(NormalizeError::InconsistentState {
                has_bias: false,
                severity: s.label().to_string(),
            });
        }
        (true, Some(Severity::None)) => {
            return Err(NormalizeError::InconsistentState {
                has_bias: true,
                severity: Severity::None.label().to_string(),
            });
        }
        (true, Some(s)) => s,
        (true, None) => {
            return Err(NormalizeError::InconsistentState {
                has_bias: true,
                severity: "absent".to_string(),
            });
        }
    };

    for (category, &value) in &scores {
        if !(0.0..=1.0).contains(&value) {
            return Err(NormalizeError::OutOfRangeScore {
                field: category.clone(),
                value,
            });
        }
    }
    if let Some(value) = overall_score
        && !(0.0..=1.0).contains(&value)
    {
        return Err(NormalizeError::OutOfRangeScore {
            field: "overall_score".to_string(),
            value,
        });
    }

    let timestamp = parse_timestamp(timestamp, mode)?;

    Ok(BiasResult {
        text,
        has_bias,
        severity,
        categories: categories.into_iter().collect::<BTreeSet<_>>(),
        scores,
        overall_score,
        highlights,
        statistics,
        recommendations,
        timestamp,
    })
}

/// Parse the service timestamp. Accepts RFC 3339, or the naive ISO form the
/// reference backend emits (`datetime.now().isoformat()`, no offset), which
/// is interpreted as UTC.
fn parse_timestamp(s: &str, mode: AnalysisMode) -> Result<DateTime<Utc>, NormalizeError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| NormalizeError::MalformedSchema {
            mode,
            detail: format!("unparsable timestamp {:?}: {}", s, e),
        })
}
