//! Multiple-choice quiz generation.
//!
//! Flow:
//! 1) Keep only words that carry a meaning (candidates).
//! 2) Sample up to `requested` candidates without replacement.
//! 3) For each, draw distractor meanings from the whole vocabulary index until
//!    three distinct ones are found or the draw budget runs out.
//! 4) Shuffle the correct meaning in with the distractors.
//!
//! Small or homogeneous vocabularies produce questions with fewer than four
//! options; an empty candidate list produces no questions.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, instrument};

use crate::domain::{AnnotatedWord, QuizQuestion};
use crate::vocab::VocabularyIndex;

/// Wrong options wanted per question.
pub const DISTRACTORS_PER_QUESTION: usize = 3;
/// Upper bound on random draws from the meaning pool per question.
pub const MAX_DISTRACTOR_ATTEMPTS: usize = 200;

/// Build up to `requested` questions from `words`, in sampling order.
#[instrument(level = "debug", skip(words, index, rng), fields(words = words.len(), pool = index.meaning_pool().len()))]
pub fn generate_quiz<R: Rng + ?Sized>(
  words: &[AnnotatedWord],
  requested: usize,
  index: &VocabularyIndex,
  rng: &mut R,
) -> Vec<QuizQuestion> {
  let candidates: Vec<&AnnotatedWord> = words.iter().filter(|w| w.has_meaning()).collect();
  if candidates.is_empty() {
    debug!(target: "quiz", "No candidates with a meaning; empty quiz");
    return Vec::new();
  }

  let n = requested.min(candidates.len());
  let picked: Vec<&AnnotatedWord> = candidates.choose_multiple(rng, n).copied().collect();

  picked
    .into_iter()
    .map(|w| build_question(w, index.meaning_pool(), rng))
    .collect()
}

fn build_question<R: Rng + ?Sized>(word: &AnnotatedWord, pool: &[String], rng: &mut R) -> QuizQuestion {
  let answer = word.meaning.clone();
  let mut options = pick_distractors(&answer, pool, rng);
  if options.len() < DISTRACTORS_PER_QUESTION {
    debug!(target: "quiz", word = %word.word, found = options.len(), "Distractor pool too small; shipping fewer options");
  }
  options.push(answer.clone());
  options.shuffle(rng);

  QuizQuestion { word: word.word.clone(), level: word.level.clone(), options, answer }
}

/// Distinct meanings other than `correct`, at most `DISTRACTORS_PER_QUESTION`.
fn pick_distractors<R: Rng + ?Sized>(correct: &str, pool: &[String], rng: &mut R) -> Vec<String> {
  let mut picked: Vec<String> = Vec::with_capacity(DISTRACTORS_PER_QUESTION);
  let mut attempts = 0;
  while picked.len() < DISTRACTORS_PER_QUESTION && attempts < MAX_DISTRACTOR_ATTEMPTS {
    attempts += 1;
    let Some(m) = pool.choose(rng) else { break };
    if m != correct && !picked.contains(m) {
      picked.push(m.clone());
    }
  }
  picked
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use rand::rngs::StdRng;
  use rand::SeedableRng;

  use super::*;
  use crate::domain::VocabularyEntry;
  use crate::vocab::tests::sample_index;

  fn entry(word: &str, meaning: &str, level: &str) -> VocabularyEntry {
    VocabularyEntry { word: word.into(), meaning: meaning.into(), level: level.into() }
  }

  fn word(word: &str, meaning: &str) -> AnnotatedWord {
    AnnotatedWord { word: word.into(), meaning: meaning.into(), level: "3".into() }
  }

  fn big_index() -> VocabularyIndex {
    VocabularyIndex::from_entries(vec![
      entry("cat", "猫", "5"),
      entry("dog", "犬", "5"),
      entry("bird", "鳥", "4"),
      entry("fish", "魚", "4"),
      entry("horse", "馬", "3"),
      entry("cow", "牛", "3"),
    ])
  }

  #[test]
  fn no_candidates_gives_empty_quiz() {
    let mut rng = StdRng::seed_from_u64(7);
    let words = vec![AnnotatedWord::unknown("the"), AnnotatedWord::unknown("ran")];
    assert!(generate_quiz(&words, 5, &big_index(), &mut rng).is_empty());
    assert!(generate_quiz(&[], 5, &big_index(), &mut rng).is_empty());
  }

  #[test]
  fn question_count_is_capped_by_candidates() {
    let mut rng = StdRng::seed_from_u64(1);
    let words = vec![word("cat", "猫"), AnnotatedWord::unknown("the"), word("dog", "犬")];
    let qs = generate_quiz(&words, 5, &big_index(), &mut rng);
    assert_eq!(qs.len(), 2);
    let asked: HashSet<_> = qs.iter().map(|q| q.word.as_str()).collect();
    assert_eq!(asked, HashSet::from(["cat", "dog"]));
  }

  #[test]
  fn question_count_is_capped_by_request() {
    let mut rng = StdRng::seed_from_u64(2);
    let words = vec![word("cat", "猫"), word("dog", "犬"), word("bird", "鳥"), word("fish", "魚")];
    assert_eq!(generate_quiz(&words, 2, &big_index(), &mut rng).len(), 2);
    assert!(generate_quiz(&words, 0, &big_index(), &mut rng).is_empty());
  }

  #[test]
  fn options_are_unique_and_contain_answer() {
    let index = big_index();
    let words = vec![word("cat", "猫"), word("dog", "犬"), word("bird", "鳥"), word("cow", "牛")];
    for seed in 0..50 {
      let mut rng = StdRng::seed_from_u64(seed);
      for q in generate_quiz(&words, 4, &index, &mut rng) {
        assert_eq!(q.options.len(), DISTRACTORS_PER_QUESTION + 1, "{q:?}");
        assert!(q.options.contains(&q.answer));
        let unique: HashSet<_> = q.options.iter().collect();
        assert_eq!(unique.len(), q.options.len());
      }
    }
  }

  #[test]
  fn answer_and_level_come_from_the_submitted_word() {
    let mut rng = StdRng::seed_from_u64(3);
    let words = vec![AnnotatedWord { word: "cat".into(), meaning: "ねこ".into(), level: "pre-2".into() }];
    let qs = generate_quiz(&words, 1, &big_index(), &mut rng);
    assert_eq!(qs[0].answer, "ねこ");
    assert_eq!(qs[0].level, "pre-2");
    assert!(qs[0].options.contains(&"ねこ".to_string()));
  }

  #[test]
  fn tiny_pool_yields_fewer_options() {
    let index = VocabularyIndex::from_entries(vec![entry("cat", "猫", "5"), entry("dog", "犬", "5")]);
    let mut rng = StdRng::seed_from_u64(4);
    let qs = generate_quiz(&[word("cat", "猫")], 1, &index, &mut rng);
    assert_eq!(qs.len(), 1);
    assert!(qs[0].options.len() <= 2);
    assert_eq!(HashSet::<_>::from_iter(qs[0].options.iter().cloned()), HashSet::from(["猫".to_string(), "犬".to_string()]));
  }

  #[test]
  fn empty_index_still_ships_answer_only_questions() {
    let mut rng = StdRng::seed_from_u64(5);
    let qs = generate_quiz(&[word("cat", "猫")], 3, &VocabularyIndex::default(), &mut rng);
    assert_eq!(qs.len(), 1);
    assert_eq!(qs[0].options, vec!["猫".to_string()]);
  }

  #[test]
  fn distractors_never_repeat_the_correct_meaning() {
    let index = sample_index();
    let mut rng = StdRng::seed_from_u64(6);
    let picked = pick_distractors("猫", index.meaning_pool(), &mut rng);
    assert!(!picked.iter().any(|m| m == "猫"));
    assert_eq!(picked.len(), 2);
  }

  #[test]
  fn sampling_is_without_replacement() {
    let index = big_index();
    let words = vec![word("cat", "猫"), word("dog", "犬"), word("bird", "鳥")];
    for seed in 0..20 {
      let mut rng = StdRng::seed_from_u64(seed);
      let qs = generate_quiz(&words, 3, &index, &mut rng);
      let asked: HashSet<_> = qs.iter().map(|q| q.word.clone()).collect();
      assert_eq!(asked.len(), 3);
    }
  }
}
