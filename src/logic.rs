//! Core behaviors behind the HTTP handlers.
//!
//! This includes:
//!   - Translating submitted text (soft-failing to an empty translation)
//!   - Extracting and annotating the words of the chosen text
//!   - Building a quiz from a resubmitted word list

use tracing::{debug, error, info, instrument};

use crate::annotate::annotate;
use crate::domain::{AnnotatedWord, QuizQuestion};
use crate::extract::extract_words;
use crate::protocol::TranslateOut;
use crate::quiz::generate_quiz;
use crate::state::AppState;
use crate::translate::AUTO_SOURCE;

/// Translate via the gateway. Any failure is logged and becomes "".
#[instrument(level = "info", skip(state, text, target), fields(text_len = text.len(), %target))]
pub async fn do_translate(state: &AppState, text: &str, target: &str) -> String {
  match state.translator.translate(text, AUTO_SOURCE, target).await {
    Ok(t) => t,
    Err(e) => {
      error!(target: "vocab_quiz", error = %e, "Translation failed; continuing with empty translation.");
      String::new()
    }
  }
}

/// Translate `text` into `target` and annotate the English side.
///
/// English target: the translation is annotated, or the submitted text when the
/// translation came back empty. Other targets: the submitted text is annotated.
#[instrument(level = "info", skip(state, text, target), fields(text_len = text.len(), %target))]
pub async fn translate_and_annotate(state: &AppState, text: &str, target: &str) -> TranslateOut {
  let translated = do_translate(state, text, target).await;

  let source_for_words = if target.eq_ignore_ascii_case("en") && !translated.is_empty() {
    translated.as_str()
  } else {
    text
  };
  let words = annotate(&state.vocab, &extract_words(source_for_words));

  let known = words.iter().filter(|w| w.has_meaning()).count();
  info!(target: "vocab_quiz", words = words.len(), known, translated_len = translated.len(), "Text annotated");
  TranslateOut { translated, words }
}

/// Build up to `requested` questions from `words`.
#[instrument(level = "info", skip(state, words), fields(words = words.len()))]
pub fn build_quiz(state: &AppState, words: &[AnnotatedWord], requested: usize) -> Vec<QuizQuestion> {
  let questions = generate_quiz(words, requested, &state.vocab, &mut rand::thread_rng());
  debug!(target: "quiz", questions = questions.len(), "Quiz built");
  questions
}
