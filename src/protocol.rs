//! Public HTTP request/response structs (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::config::Language;
use crate::domain::{AnnotatedWord, QuizQuestion};

#[derive(Debug, Deserialize)]
pub struct TranslateIn {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub target: Option<String>,
}
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateOut {
    pub translated: String,
    pub words: Vec<AnnotatedWord>,
}

#[derive(Debug, Deserialize)]
pub struct QuizIn {
    #[serde(default)]
    pub words: Vec<AnnotatedWord>,
    /// Negative counts are treated as zero.
    #[serde(default)]
    pub num: Option<i64>,
}
#[derive(Debug, Serialize, Deserialize)]
pub struct QuizOut {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    pub word: String,
}

#[derive(Serialize)]
pub struct LanguagesOut<'a> {
    pub default_target: &'a str,
    pub languages: &'a [Language],
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
    pub vocabulary: usize,
}
