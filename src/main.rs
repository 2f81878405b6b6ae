//! Vocab Quiz · translation + vocabulary annotation backend
//!
//! - Axum HTTP JSON API
//! - Remote translation through a LibreTranslate-compatible service
//! - Static word list (CSV) with meaning + difficulty level per word
//! - Multiple-choice quiz generation from annotated words
//! - Static page fallback (./static/index.html)
//!
//! Important env variables:
//!   PORT                    : u16 (default 5000)
//!   BIND_ADDR               : listen address (default 0.0.0.0)
//!   TRANSLATE_API_URL       : translation service base URL
//!   TRANSLATE_API_KEY       : optional key sent with each translation request
//!   TRANSLATE_TIMEOUT_SECS  : per-request timeout (default 10)
//!   WORDLIST_PATH           : CSV with word,meaning,level (default data/eiken_words.csv)
//!   APP_CONFIG_PATH         : optional TOML file with the same settings
//!   LOG_LEVEL               : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT              : "pretty" (default) or "json"

mod annotate;
mod config;
mod domain;
mod error;
mod extract;
mod logic;
mod protocol;
mod quiz;
mod routes;
mod state;
mod telemetry;
mod translate;
mod vocab;

use std::{
  net::{IpAddr, Ipv4Addr, SocketAddr},
  sync::Arc,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  let config = AppConfig::from_env();

  let ip = config.bind_addr.parse::<IpAddr>().unwrap_or_else(|e| {
    warn!(target: "vocab_quiz", bind_addr = %config.bind_addr, error = %e, "Invalid BIND_ADDR; listening on all interfaces");
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
  });
  let addr = SocketAddr::new(ip, config.port);

  // Word list, translation client; read-only from here on.
  let state = Arc::new(AppState::new(config)?);

  let app = build_router(state);

  let listener = TcpListener::bind(addr).await?;
  info!(target: "vocab_quiz", %addr, "HTTP server listening");
  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  info!(target: "vocab_quiz", "HTTP server stopped");
  Ok(())
}

/// Resolves on Ctrl-C so in-flight requests can finish.
async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    warn!(target: "vocab_quiz", error = %e, "Ctrl-C handler unavailable; shutdown only by kill");
    std::future::pending::<()>().await;
  }
  info!(target: "vocab_quiz", "Shutdown signal received");
}
