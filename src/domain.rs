//! Domain models: vocabulary entries, annotated words and quiz questions.

use serde::{Deserialize, Serialize};

/// Level reported for words the vocabulary index does not know.
pub const UNKNOWN_LEVEL: &str = "Unknown";

fn unknown_level() -> String { UNKNOWN_LEVEL.to_string() }

/// One row of the static word list. `word` is lowercase and unique in the index.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VocabularyEntry {
  pub word: String,
  #[serde(default)] pub meaning: String,
  #[serde(default = "unknown_level")] pub level: String,
}

/// A word found in submitted text, joined against the vocabulary index.
/// Empty `meaning` means the index had no entry for it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnotatedWord {
  pub word: String,
  #[serde(default, alias = "jp")] pub meaning: String,
  #[serde(default = "unknown_level")] pub level: String,
}

impl AnnotatedWord {
  pub fn unknown(word: impl Into<String>) -> Self {
    Self { word: word.into(), meaning: String::new(), level: unknown_level() }
  }

  /// Eligible as a quiz candidate?
  pub fn has_meaning(&self) -> bool { !self.meaning.is_empty() }
}

impl From<&VocabularyEntry> for AnnotatedWord {
  fn from(e: &VocabularyEntry) -> Self {
    Self { word: e.word.clone(), meaning: e.meaning.clone(), level: e.level.clone() }
  }
}

/// Multiple-choice question. `answer` is always one of `options`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizQuestion {
  pub word: String,
  pub level: String,
  pub options: Vec<String>,
  pub answer: String,
}
