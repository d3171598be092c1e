//! HTTP client for the bias-analysis service.
//!
//! Transport and status handling only. Detect/analyze hand back the decoded
//! JSON payload untouched; [`crate::core::analysis::normalize`] is the schema
//! authority.

use std::collections::BTreeMap;

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::core::analysis::AnalysisMode;
use crate::core::config::Config;

/// Errors from the analysis API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service returned {status}: {detail}")]
    Status { status: StatusCode, detail: String },
}

/// Service health report from `GET /api/v1/health`.
#[derive(Clone, Debug, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub lexicons_loaded: u64,
    #[serde(default)]
    pub model_loaded: bool,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Category taxonomy from `GET /api/v1/categories`.
#[derive(Clone, Debug, Deserialize)]
pub struct CategoryTaxonomy {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub descriptions: BTreeMap<String, String>,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url: config.api_url.clone(),
        }
    }

    /// Submit text for analysis in the given mode. Returns the decoded JSON
    /// payload as-is for the normalizer to interpret.
    pub async fn analyze(&self, text: &str, mode: AnalysisMode) -> Result<Value, ApiError> {
        let (path, body) = match mode {
            AnalysisMode::Quick => ("/api/v1/detect", json!({ "text": text, "categories": null })),
            AnalysisMode::Comprehensive => {
                ("/api/v1/analyze", json!({ "text": text, "model_name": null }))
            }
        };
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status,
                detail: extract_detail(&body),
            });
        }
        Ok(response.json().await?)
    }

    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get_json("/api/v1/health").await
    }

    pub async fn categories(&self) -> Result<CategoryTaxonomy, ApiError> {
        self.get_json("/api/v1/categories").await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status,
                detail: extract_detail(&body),
            });
        }
        Ok(response.json().await?)
    }
}

/// Pull the service's `detail` message out of an error body when present
/// (the backend wraps errors as `{"detail": "..."}`); otherwise fall back to
/// a truncated form of the body itself.
fn extract_detail(body: &str) -> String {
    const MAX_DETAIL_LEN: usize = 200;
    if let Ok(value) = serde_json::from_str::<Value>(body)
        && let Some(detail) = value.get("detail").and_then(Value::as_str)
    {
        return detail.to_string();
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "no error detail".to_string();
    }
    let mut detail: String = trimmed.chars().take(MAX_DETAIL_LEN).collect();
    if trimmed.chars().count() > MAX_DETAIL_LEN {
        detail.push('…');
    }
    detail
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_detail_from_service_error_body() {
        let body = r#"{"detail": "Error during detection: boom"}"#;
        assert_eq!(extract_detail(body), "Error during detection: boom");
    }

    #[test]
    fn extract_detail_falls_back_to_body_text() {
        assert_eq!(extract_detail("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn extract_detail_empty_body() {
        assert_eq!(extract_detail("   "), "no error detail");
    }

    #[test]
    fn extract_detail_non_string_detail_uses_body() {
        let body = r#"{"detail": 42}"#;
        assert_eq!(extract_detail(body), body);
    }

    #[test]
    fn extract_detail_truncates_long_bodies() {
        let body = "x".repeat(500);
        let detail = extract_detail(&body);
        assert_eq!(detail.chars().count(), 201);
        assert!(detail.ends_with('…'));
    }
}
