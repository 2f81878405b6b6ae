//! Telemetry initialization (tracing/tracing-subscriber).
//!
//! Log targets used by this service:
//! - `vocab_quiz`: startup (config, word list inventory, listener), translation
//!   gateway failures, per-request annotation summaries.
//! - `quiz`: quiz building, including questions shipped with fewer options
//!   because the distractor pool ran short (debug).
//! - `tower_http`: one span per HTTP request from the router's TraceLayer.
//!
//! LOG_LEVEL overrides the filter (e.g. "warn,quiz=debug"); LOG_FORMAT=json
//! switches to structured JSON lines.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,quiz=info,vocab_quiz=debug,tower_http=info,axum=info";

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    // The two formats produce different subscriber types, so init in each arm.
    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}
