//! Canonical analysis results: schema normalization and highlight span resolution.
//!
//! The service answers in two shapes (quick detection vs. comprehensive
//! analysis). [`normalize`] reconciles either shape into one [`BiasResult`];
//! [`resolve_segments`] turns its raw highlight spans into an ordered,
//! non-overlapping sequence of renderable segments.

mod normalize;
mod segments;

pub use normalize::{NormalizeError, normalize};
pub use segments::{Segment, resolve_segments};

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Which response shape to expect from the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisMode {
    Quick,
    Comprehensive,
}

impl AnalysisMode {
    pub fn label(self) -> &'static str {
        match self {
            AnalysisMode::Quick => "quick",
            AnalysisMode::Comprehensive => "comprehensive",
        }
    }
}

impl std::fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for AnalysisMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quick" | "detect" => Ok(AnalysisMode::Quick),
            "comprehensive" | "detailed" => Ok(AnalysisMode::Comprehensive),
            other => Err(format!(
                "unknown mode {:?} (expected quick or comprehensive)",
                other
            )),
        }
    }
}

/// Coarse summary of how strongly bias was detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::None => "none",
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

/// Highlight span as received from the service, untrusted: offsets may be
/// negative, out of bounds, unsorted, or overlapping. Offsets count Unicode
/// scalar values over [`BiasResult::text`], matching the upstream service's
/// code-point string indexing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawHighlight {
    pub start: i64,
    pub end: i64,
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub category: String,
}

/// Word/char/sentence counts reported by comprehensive analysis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TextStatistics {
    pub word_count: u64,
    pub char_count: u64,
    pub sentence_count: u64,
}

/// Canonical result of one analysis request. Immutable once produced; a new
/// request replaces it outright (last response wins).
#[derive(Clone, Debug, PartialEq)]
pub struct BiasResult {
    /// The analyzed input, verbatim.
    pub text: String,
    pub has_bias: bool,
    /// `Severity::None` iff `has_bias` is false; enforced by the normalizer.
    pub severity: Severity,
    /// Taxonomy members present in the result. Open-ended: unknown category
    /// strings are valid data.
    pub categories: BTreeSet<String>,
    /// Per-category scores in `[0, 1]`. Keys need not equal `categories`.
    pub scores: BTreeMap<String, f64>,
    pub overall_score: Option<f64>,
    /// As received, not yet validated; see [`resolve_segments`].
    pub highlights: Vec<RawHighlight>,
    pub statistics: Option<TextStatistics>,
    pub recommendations: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl BiasResult {
    /// Renderable segments, derived fresh on each call (never cached).
    pub fn segments(&self) -> Vec<Segment<'_>> {
        resolve_segments(&self.text, &self.highlights)
    }
}
