//! Join extracted words against the vocabulary index.

use crate::domain::AnnotatedWord;
use crate::vocab::VocabularyIndex;

/// Annotate each word in order. Unknown words get an empty meaning and the
/// "Unknown" level. No deduplication happens here.
pub fn annotate<S: AsRef<str>>(index: &VocabularyIndex, words: &[S]) -> Vec<AnnotatedWord> {
  words.iter().map(|w| annotate_one(index, w.as_ref())).collect()
}

pub fn annotate_one(index: &VocabularyIndex, word: &str) -> AnnotatedWord {
  index.lookup(word).map(AnnotatedWord::from).unwrap_or_else(|| AnnotatedWord::unknown(word))
}
