//! Vocabulary index: the static word list, loaded once at startup.
//!
//! The CSV is expected to carry `word`, `meaning` and `level` columns. `jp` and
//! `japanese` are accepted for the meaning column; a header that names none of
//! these falls back to column positions 0/1/2. A missing file yields an empty index.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    io::Read,
    path::Path,
};

use tracing::{error, info, instrument, warn};

use crate::domain::{VocabularyEntry, UNKNOWN_LEVEL};

const WORD_COLUMNS: &[&str] = &["word"];
const MEANING_COLUMNS: &[&str] = &["meaning", "jp", "japanese"];
const LEVEL_COLUMNS: &[&str] = &["level"];

/// Read-only word -> {meaning, level} lookup.
#[derive(Clone, Debug, Default)]
pub struct VocabularyIndex {
    entries: HashMap<String, VocabularyEntry>,
    meaning_pool: Vec<String>,
}

impl VocabularyIndex {
    /// Build from entries; keys are normalized and the last duplicate wins.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = VocabularyEntry>,
    {
        let mut map = HashMap::new();
        for mut e in entries {
            let key = e.word.trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            e.word = key.clone();
            if e.level.trim().is_empty() {
                e.level = UNKNOWN_LEVEL.to_string();
            }
            map.insert(key, e);
        }

        let meaning_pool = map
            .values()
            .filter(|e| !e.meaning.is_empty())
            .map(|e| e.meaning.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Self { entries: map, meaning_pool }
    }

    /// Load the word list from disk. Never fails: a missing or unreadable file
    /// gives an empty index and every word will annotate as unknown.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::File::open(path) {
            Ok(file) => {
                let index = Self::from_reader(file);
                info!(target: "vocab_quiz", path = %path.display(), entries = index.len(), "Loaded word list");
                index
            }
            Err(e) => {
                error!(target: "vocab_quiz", path = %path.display(), error = %e, "Word list unavailable; continuing with empty vocabulary");
                Self::default()
            }
        }
    }

    /// Parse CSV from any reader. Malformed rows are skipped.
    pub fn from_reader<R: Read>(reader: R) -> Self {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = match rdr.headers() {
            Ok(h) => h.clone(),
            Err(e) => {
                warn!(target: "vocab_quiz", error = %e, "Word list header unreadable");
                return Self::default();
            }
        };

        let column = |names: &[&str], fallback: usize| -> usize {
            headers
                .iter()
                .position(|h| names.iter().any(|n| h.eq_ignore_ascii_case(n)))
                .unwrap_or(fallback)
        };
        let word_idx = column(WORD_COLUMNS, 0);
        let meaning_idx = column(MEANING_COLUMNS, 1);
        let level_idx = column(LEVEL_COLUMNS, 2);

        let mut entries = Vec::new();
        for (row, result) in rdr.records().enumerate() {
            let record = match result {
                Ok(r) => r,
                Err(e) => {
                    warn!(target: "vocab_quiz", row, error = %e, "Skipping malformed word list row");
                    continue;
                }
            };
            let field = |idx: usize| record.get(idx).map(str::trim).unwrap_or_default().to_string();
            entries.push(VocabularyEntry {
                word: field(word_idx),
                meaning: field(meaning_idx),
                level: field(level_idx),
            });
        }

        Self::from_entries(entries)
    }

    /// Case-insensitive lookup.
    pub fn lookup(&self, word: &str) -> Option<&VocabularyEntry> {
        self.entries.get(&word.trim().to_lowercase())
    }

    /// Distinct non-empty meanings across the whole index, in stable order.
    pub fn meaning_pool(&self) -> &[String] {
        &self.meaning_pool
    }

    /// Entry count per level, for the startup inventory log.
    pub fn level_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for e in self.entries.values() {
            *counts.entry(e.level.clone()).or_insert(0) += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_index() -> VocabularyIndex {
        VocabularyIndex::from_reader("word,meaning,level\ncat,猫,5\ndog,犬,4\nbird,鳥,3\n".as_bytes())
    }

    #[test]
    fn loads_rows_and_normalizes_keys() {
        let csv = "word,meaning,level\n  Cat ,猫,5\nDOG,犬,4\n";
        let index = VocabularyIndex::from_reader(csv.as_bytes());
        assert_eq!(index.len(), 2);
        let cat = index.lookup("cat").expect("cat");
        assert_eq!(cat.word, "cat");
        assert_eq!(cat.meaning, "猫");
        assert_eq!(cat.level, "5");
        assert!(index.lookup("Dog").is_some());
    }

    #[test]
    fn skips_empty_words_and_defaults_missing_fields() {
        let csv = "word,meaning,level\n   ,空,5\nrun,,\nwalk\n";
        let index = VocabularyIndex::from_reader(csv.as_bytes());
        assert_eq!(index.len(), 2);
        let run = index.lookup("run").unwrap();
        assert_eq!(run.meaning, "");
        assert_eq!(run.level, UNKNOWN_LEVEL);
        let walk = index.lookup("walk").unwrap();
        assert_eq!(walk.level, UNKNOWN_LEVEL);
    }

    #[test]
    fn last_duplicate_wins() {
        let csv = "word,meaning,level\ncat,ねこ,5\nCAT,猫,4\n";
        let index = VocabularyIndex::from_reader(csv.as_bytes());
        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup("cat").unwrap().meaning, "猫");
        assert_eq!(index.meaning_pool(), ["猫".to_string()]);
    }

    #[test]
    fn accepts_jp_header_in_any_column_order() {
        let csv = "level,jp,word\n2,挑戦,challenge\n";
        let index = VocabularyIndex::from_reader(csv.as_bytes());
        let e = index.lookup("challenge").unwrap();
        assert_eq!(e.meaning, "挑戦");
        assert_eq!(e.level, "2");
    }

    #[test]
    fn missing_file_gives_empty_index() {
        let index = VocabularyIndex::load("/definitely/not/here/words.csv");
        assert!(index.is_empty());
        assert!(index.meaning_pool().is_empty());
    }

    #[test]
    fn lookup_is_idempotent() {
        let index = sample_index();
        let first = index.lookup("bird").cloned();
        let second = index.lookup("BIRD").cloned();
        assert_eq!(first, second);
        assert!(index.lookup("fish").is_none());
    }

    #[test]
    fn pool_and_level_counts_cover_the_index() {
        let index = sample_index();
        assert_eq!(index.meaning_pool().len(), 3);
        let counts = index.level_counts();
        assert_eq!(counts.get("5"), Some(&1));
        assert_eq!(counts.values().sum::<usize>(), 3);
    }
}
