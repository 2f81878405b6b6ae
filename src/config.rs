//! Service configuration: defaults, optional TOML file, environment overrides.
//!
//! Resolution order (later wins):
//!   1. built-in defaults
//!   2. TOML file named by APP_CONFIG_PATH (any subset of fields)
//!   3. environment variables (PORT, BIND_ADDR, TRANSLATE_API_URL, ...)
//!
//! A bad file or an unparsable env value is logged and ignored; configuration
//! never stops the service from starting.

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// Target language entry shown to clients.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Language {
  pub code: String,
  pub name: String,
  /// Code the translation service expects, when it differs from `code`.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub service_code: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
  pub bind_addr: String,
  pub port: u16,
  pub translate_api_url: String,
  pub translate_api_key: Option<String>,
  pub translate_timeout_secs: u64,
  pub wordlist_path: String,
  pub static_dir: String,
  pub default_target: String,
  pub default_quiz_size: usize,
  pub languages: Vec<Language>,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      bind_addr: "0.0.0.0".into(),
      port: 5000,
      translate_api_url: "https://libretranslate.com".into(),
      translate_api_key: None,
      translate_timeout_secs: 10,
      wordlist_path: "data/eiken_words.csv".into(),
      static_dir: "./static".into(),
      default_target: "en".into(),
      default_quiz_size: 5,
      languages: default_languages(),
    }
  }
}

fn default_languages() -> Vec<Language> {
  [
    ("en", "English"),
    ("ja", "日本語"),
    ("zh-CN", "中文"),
    ("ko", "한국어"),
    ("es", "Español"),
    ("fr", "Français"),
    ("de", "Deutsch"),
    ("it", "Italiano"),
    ("pt", "Português"),
    ("ru", "Русский"),
  ]
  .into_iter()
  .map(|(code, name)| Language {
    code: code.into(),
    name: name.into(),
    // LibreTranslate only knows the bare "zh".
    service_code: (code == "zh-CN").then(|| "zh".to_string()),
  })
  .collect()
}

impl AppConfig {
  /// Full resolution from the process environment.
  pub fn from_env() -> Self {
    let mut cfg = std::env::var("APP_CONFIG_PATH")
      .ok()
      .and_then(|path| load_config_file(&path))
      .unwrap_or_default();
    cfg.apply_env(|key| std::env::var(key).ok());
    cfg
  }

  pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
    toml::from_str(s)
  }

  /// Override fields from `lookup` (normally `std::env::var`).
  pub fn apply_env<F>(&mut self, lookup: F)
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    if let Some(v) = get("BIND_ADDR") { self.bind_addr = v; }
    if let Some(v) = get("TRANSLATE_API_URL") { self.translate_api_url = v; }
    if let Some(v) = get("TRANSLATE_API_KEY") { self.translate_api_key = Some(v); }
    if let Some(v) = get("WORDLIST_PATH") { self.wordlist_path = v; }
    if let Some(v) = get("STATIC_DIR") { self.static_dir = v; }
    if let Some(v) = get("DEFAULT_TARGET") { self.default_target = v; }

    parse_into(&get, "PORT", &mut self.port);
    parse_into(&get, "TRANSLATE_TIMEOUT_SECS", &mut self.translate_timeout_secs);
    parse_into(&get, "DEFAULT_QUIZ_SIZE", &mut self.default_quiz_size);
  }
}

fn parse_into<T, G>(get: &G, key: &str, slot: &mut T)
where
  T: std::str::FromStr,
  T::Err: std::fmt::Display,
  G: Fn(&str) -> Option<String>,
{
  if let Some(raw) = get(key) {
    match raw.parse::<T>() {
      Ok(v) => *slot = v,
      Err(e) => warn!(target: "vocab_quiz", %key, value = %raw, error = %e, "Ignoring unparsable env value"),
    }
  }
}

/// Read and parse the TOML file at `path`. On any IO/parse error, returns None.
fn load_config_file(path: &str) -> Option<AppConfig> {
  match std::fs::read_to_string(path) {
    Ok(s) => match AppConfig::from_toml_str(&s) {
      Ok(cfg) => {
        info!(target: "vocab_quiz", %path, "Loaded config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "vocab_quiz", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "vocab_quiz", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
