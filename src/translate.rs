//! Minimal client for a LibreTranslate-compatible translation service.
//!
//! One call: `POST {base_url}/translate` with `{q, source, target, format}` and
//! the translation in `translatedText`. The client carries a hard timeout; callers
//! decide what to do with errors (the request pipeline treats them as an empty
//! translation).
//!
//! NOTE: We never log the API key or the text itself, only sizes and status.

use std::{collections::HashMap, time::Duration};

use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument};

use crate::config::AppConfig;

/// Source language used when the caller does not know it.
pub const AUTO_SOURCE: &str = "auto";

#[derive(Debug, Error)]
pub enum TranslateError {
  #[error("HTTP client setup failed: {0}")]
  Client(String),

  #[error("request failed: {0}")]
  Request(#[from] reqwest::Error),

  #[error("translation service HTTP {status}: {message}")]
  Status { status: reqwest::StatusCode, message: String },

  #[error("malformed response: {0}")]
  Malformed(String),
}

#[derive(Clone)]
pub struct Translator {
  pub client: reqwest::Client,
  pub base_url: String,
  api_key: Option<String>,
  pub timeout: Duration,
  /// Client language code -> service language code.
  code_map: HashMap<String, String>,
}

impl Translator {
  pub fn from_config(cfg: &AppConfig) -> Result<Self, TranslateError> {
    let timeout = Duration::from_secs(cfg.translate_timeout_secs);
    let client = reqwest::Client::builder()
      .timeout(timeout)
      .build()
      .map_err(|e| TranslateError::Client(e.to_string()))?;

    let code_map = cfg
      .languages
      .iter()
      .filter_map(|l| l.service_code.as_ref().map(|sc| (l.code.to_ascii_lowercase(), sc.clone())))
      .collect();

    Ok(Self {
      client,
      base_url: cfg.translate_api_url.trim_end_matches('/').to_string(),
      api_key: cfg.translate_api_key.clone().filter(|k| !k.is_empty()),
      timeout,
      code_map,
    })
  }

  /// Language code as the service spells it. Unmapped codes pass through.
  pub fn service_code<'a>(&'a self, code: &'a str) -> &'a str {
    self.code_map.get(&code.to_ascii_lowercase()).map(String::as_str).unwrap_or(code)
  }

  /// Translate `text` from `source` (or "auto") into `target`.
  #[instrument(level = "info", skip(self, text, source, target), fields(text_len = text.len(), %source, %target))]
  pub async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, TranslateError> {
    let input = text.trim();
    if input.is_empty() { return Ok(String::new()); }

    let url = format!("{}/translate", self.base_url);
    let req = TranslateRequest {
      q: input,
      source: self.service_code(source),
      target: self.service_code(target),
      format: "text",
      api_key: self.api_key.as_deref(),
    };

    let start = std::time::Instant::now();
    let res = self.client.post(&url)
      .header(USER_AGENT, "vocab-quiz/0.1")
      .header(CONTENT_TYPE, "application/json")
      .json(&req).send().await?;

    let status = res.status();
    if !status.is_success() {
      let body = res.text().await.unwrap_or_default();
      let message = extract_service_error(&body).unwrap_or(body);
      return Err(TranslateError::Status { status, message });
    }

    let body: TranslateResponse = res.json().await.map_err(|e| TranslateError::Malformed(e.to_string()))?;
    let text = body.translated_text.trim().to_string();
    info!(elapsed = ?start.elapsed(), out_len = text.len(), "Translation received");
    Ok(text)
  }
}

// --- Wire DTOs ---

#[derive(Serialize)]
struct TranslateRequest<'a> {
  q: &'a str,
  source: &'a str,
  target: &'a str,
  format: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  api_key: Option<&'a str>,
}

#[derive(Deserialize)]
struct TranslateResponse {
  #[serde(rename = "translatedText")]
  translated_text: String,
}

/// Pull `error` out of a service error body, if it has one.
fn extract_service_error(body: &str) -> Option<String> {
  #[derive(Deserialize)]
  struct EBody { error: String }
  serde_json::from_str::<EBody>(body).ok().map(|e| e.error)
}
