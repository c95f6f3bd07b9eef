//! Multiple choice quiz: a German word and four English translations to choose from.

use super::VocabularyItem;
use crate::error::{AppError, Result};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::SeedableRng;

pub const OPTIONS_PER_ROUND: usize = 4;

#[derive(Clone, Debug)]
pub struct QuizRound {
    pub word: VocabularyItem,
    pub options: Vec<String>,
    /// Option picked by the learner and whether it was right.
    pub answer: Option<(String, bool)>,
}

impl QuizRound {
    pub fn is_answered(&self) -> bool {
        self.answer.is_some()
    }
}

pub struct MultipleChoiceQuiz {
    words: Vec<VocabularyItem>,
    round: Option<QuizRound>,
    pub score: u32,
    pub total: u32,
    rng: StdRng,
}

impl MultipleChoiceQuiz {
    pub fn new(words: Vec<VocabularyItem>) -> Result<Self> {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    pub fn with_rng(words: Vec<VocabularyItem>, rng: StdRng) -> Result<Self> {
        if words.len() < OPTIONS_PER_ROUND {
            return Err(AppError::NotEnoughWords {
                needed: OPTIONS_PER_ROUND,
                available: words.len(),
            });
        }
        let mut quiz = Self {
            words,
            round: None,
            score: 0,
            total: 0,
            rng,
        };
        quiz.next_round();
        Ok(quiz)
    }

    pub fn round(&self) -> Option<&QuizRound> {
        self.round.as_ref()
    }

    /// Picks a new word and builds its shuffled answer options.
    pub fn next_round(&mut self) {
        let Some(word) = self.words.choose(&mut self.rng).cloned() else {
            self.round = None;
            return;
        };

        let mut candidates: Vec<&str> = self
            .words
            .iter()
            .filter(|w| w.id != word.id && w.target_translation != word.target_translation)
            .map(|w| w.target_translation.as_str())
            .collect();
        candidates.sort_unstable();
        candidates.dedup();

        let mut options: Vec<String> = candidates
            .choose_multiple(&mut self.rng, OPTIONS_PER_ROUND - 1)
            .map(|s| s.to_string())
            .collect();
        options.push(word.target_translation.clone());
        options.shuffle(&mut self.rng);

        tracing::debug!(word = %word.source_word, ?options, "quiz round");
        self.round = Some(QuizRound {
            word,
            options,
            answer: None,
        });
    }

    /// Scores `option` for the current round.
    /// Returns `None` when there is no round or it was already answered.
    pub fn answer(&mut self, option: &str) -> Option<bool> {
        let round = self.round.as_mut()?;
        if round.is_answered() {
            return None;
        }

        let is_correct = option == round.word.target_translation;
        round.answer = Some((option.to_string(), is_correct));
        self.total += 1;
        if is_correct {
            self.score += 1;
        }
        Some(is_correct)
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.total = 0;
        self.next_round();
    }
}
