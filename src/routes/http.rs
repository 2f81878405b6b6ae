//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs basic result info, never payload text.

use std::sync::Arc;
use axum::{
  extract::{rejection::JsonRejection, Query, State},
  response::{IntoResponse, Response},
  Json,
};
use tracing::{info, instrument};

use crate::annotate::annotate_one;
use crate::error::{ApiError, Result};
use crate::logic::*;
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info", skip(state))]
pub async fn http_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(HealthOut { ok: true, vocabulary: state.vocab.len() })
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_post_translate(
  State(state): State<Arc<AppState>>,
  body: std::result::Result<Json<TranslateIn>, JsonRejection>,
) -> Result<Json<TranslateOut>> {
  let Json(body) = body?;
  let text = body.text.trim();
  if text.is_empty() {
    return Err(ApiError::BadRequest("no text".into()));
  }
  let target = body
    .target
    .as_deref()
    .map(str::trim)
    .filter(|t| !t.is_empty())
    .unwrap_or(state.config.default_target.as_str());

  let out = translate_and_annotate(&state, text, target).await;
  info!(target: "vocab_quiz", lang = %target, words = out.words.len(), "HTTP translate served");
  Ok(Json(out))
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_post_quiz(
  State(state): State<Arc<AppState>>,
  body: std::result::Result<Json<QuizIn>, JsonRejection>,
) -> Result<Json<QuizOut>> {
  let Json(body) = body?;
  let requested = match body.num {
    Some(n) => usize::try_from(n.max(0)).unwrap_or(usize::MAX),
    None => state.config.default_quiz_size,
  };

  let questions = build_quiz(&state, &body.words, requested);
  info!(target: "quiz", words = body.words.len(), requested, questions = questions.len(), "HTTP quiz served");
  Ok(Json(QuizOut { questions }))
}

#[instrument(level = "info", skip(state), fields(word = %q.word))]
pub async fn http_get_lookup(
  State(state): State<Arc<AppState>>,
  Query(q): Query<LookupQuery>,
) -> impl IntoResponse {
  let word = q.word.trim().to_lowercase();
  Json(annotate_one(&state.vocab, &word))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_languages(State(state): State<Arc<AppState>>) -> Response {
  let out = LanguagesOut {
    default_target: &state.config.default_target,
    languages: &state.config.languages,
  };
  let response = Json(out).into_response();
  response
}
