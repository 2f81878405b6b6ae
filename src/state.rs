//! Application state: configuration, the vocabulary index and the translation client.
//!
//! Everything here is built once before the server starts and only read afterwards,
//! so handlers share it through `Arc<AppState>` without locks.

use tracing::{error, info, instrument};

use crate::config::AppConfig;
use crate::translate::{TranslateError, Translator};
use crate::vocab::VocabularyIndex;

pub struct AppState {
    pub config: AppConfig,
    pub vocab: VocabularyIndex,
    pub translator: Translator,
}

impl AppState {
    /// Build state from config: load the word list and set up the translation client.
    #[instrument(level = "info", skip_all)]
    pub fn new(config: AppConfig) -> Result<Self, TranslateError> {
        let vocab = VocabularyIndex::load(&config.wordlist_path);
        if vocab.is_empty() {
            error!(target: "vocab_quiz", path = %config.wordlist_path, "Vocabulary is empty; every word will annotate as Unknown");
        }
        for (level, count) in vocab.level_counts() {
            info!(target: "vocab_quiz", %level, count, "Startup vocabulary inventory");
        }

        let translator = Translator::from_config(&config)?;
        info!(target: "vocab_quiz", base_url = %translator.base_url, timeout = ?translator.timeout, "Translation gateway configured");

        Ok(Self::with_parts(config, vocab, translator))
    }

    pub fn with_parts(config: AppConfig, vocab: VocabularyIndex, translator: Translator) -> Self {
        Self { config, vocab, translator }
    }
}
