//! Word extraction: pull candidate dictionary words out of free text.

use std::collections::HashSet;

/// Split `text` into maximal runs of ASCII letters and apostrophes, strip quote
/// apostrophes from both ends, lowercase, drop tokens shorter than two characters
/// and keep the first occurrence of each.
///
/// Single letters ("a", "I") are always dropped.
pub fn extract_words(text: &str) -> Vec<String> {
  let mut seen = HashSet::new();
  let mut out = Vec::new();

  for token in text.split(|c: char| !(c.is_ascii_alphabetic() || c == '\'')) {
    let token = token.trim_matches('\'');
    if token.len() <= 1 {
      continue;
    }
    let lower = token.to_ascii_lowercase();
    if seen.insert(lower.clone()) {
      out.push(lower);
    }
  }
  out
}
