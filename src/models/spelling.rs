//! Spelling practice: the English word is shown and the German one has to be typed.

use super::VocabularyItem;
use crate::error::{AppError, Result};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

pub struct SpellingDrill {
    words: Vec<VocabularyItem>,
    current: Option<VocabularyItem>,
    pub input: String,
    /// Set once the current word has been checked.
    pub outcome: Option<bool>,
    pub score: u32,
    pub total: u32,
    rng: StdRng,
}

/// Case-insensitive comparison of the typed answer, ignoring surrounding whitespace.
pub fn is_correct_spelling(input: &str, expected: &str) -> bool {
    input.trim().to_lowercase() == expected.to_lowercase()
}

impl SpellingDrill {
    pub fn new(words: Vec<VocabularyItem>) -> Result<Self> {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    pub fn with_rng(words: Vec<VocabularyItem>, rng: StdRng) -> Result<Self> {
        if words.is_empty() {
            return Err(AppError::NotEnoughWords {
                needed: 1,
                available: 0,
            });
        }
        let mut drill = Self {
            words,
            current: None,
            input: String::new(),
            outcome: None,
            score: 0,
            total: 0,
            rng,
        };
        drill.next_word();
        Ok(drill)
    }

    pub fn current_word(&self) -> Option<&VocabularyItem> {
        self.current.as_ref()
    }

    pub fn next_word(&mut self) {
        self.current = self.words.choose(&mut self.rng).cloned();
        self.input.clear();
        self.outcome = None;
    }

    /// Checks the typed input against the current word. Only the first submission counts.
    pub fn submit(&mut self) -> Option<bool> {
        let word = self.current.as_ref()?;
        if self.outcome.is_some() {
            return None;
        }

        let correct = is_correct_spelling(&self.input, &word.source_word);
        self.outcome = Some(correct);
        self.total += 1;
        if correct {
            self.score += 1;
        }
        Some(correct)
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.total = 0;
        self.next_word();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CefrLevel;

    fn drill() -> SpellingDrill {
        let words = vec![
            VocabularyItem::new(1, "Straße", "street", CefrLevel::A1),
            VocabularyItem::new(2, "Straße", "road", CefrLevel::A1),
        ];
        SpellingDrill::with_rng(words, StdRng::seed_from_u64(9)).unwrap()
    }

    #[test]
    fn test_spelling_comparison() {
        assert!(is_correct_spelling("  straße ", "Straße"));
        assert!(is_correct_spelling("HAUS", "Haus"));
        assert!(!is_correct_spelling("strasse", "Straße"));
        assert!(!is_correct_spelling("", "Haus"));
    }

    #[test]
    fn test_empty_word_list_is_rejected() {
        assert!(SpellingDrill::with_rng(Vec::new(), StdRng::seed_from_u64(1)).is_err());
    }

    #[test]
    fn test_submit_counts_once() {
        let mut drill = drill();
        drill.input = "straße".to_string();
        assert_eq!(drill.submit(), Some(true));
        assert_eq!(drill.submit(), None);
        assert_eq!((drill.score, drill.total), (1, 1));

        drill.next_word();
        assert!(drill.input.is_empty());
        assert_eq!(drill.outcome, None);
        drill.input = "Strase".to_string();
        assert_eq!(drill.submit(), Some(false));
        assert_eq!((drill.score, drill.total), (1, 2));
    }

    #[test]
    fn test_reset_clears_score() {
        let mut drill = drill();
        drill.input = "Straße".to_string();
        drill.submit();
        drill.reset();
        assert_eq!((drill.score, drill.total), (0, 0));
        assert!(drill.current_word().is_some());
    }
}
