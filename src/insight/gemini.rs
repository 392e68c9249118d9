//! Blocking client for the Gemini `generateContent` REST endpoint.

use super::TextGenerator;
use crate::config::InsightConfig;
use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

pub struct GeminiClient {
    endpoint: String,
    model: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(endpoint: &str, model: &str, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
            timeout,
        }
    }

    /// Build from configuration, reading the key from the configured env var.
    pub fn from_config(cfg: &InsightConfig) -> Self {
        let api_key = std::env::var(&cfg.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty());
        Self::new(
            &cfg.endpoint,
            &cfg.model,
            api_key,
            Duration::from_secs(cfg.timeout_secs),
        )
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, prompt: &str) -> AppResult<String> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::ExternalService("no API key configured".to_string()))?;

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| AppError::ExternalService(e.to_string()))?;

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        debug!(url = %self.url(), "requesting insight");
        let response = client
            .post(self.url())
            .header("x-goog-api-key", key)
            .json(&body)
            .send()
            .map_err(|e| AppError::ExternalService(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ExternalService(format!(
                "service answered {status}"
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| AppError::ExternalService(format!("unreadable response: {e}")))?;

        let text = parsed
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");

        Ok(text)
    }
}
