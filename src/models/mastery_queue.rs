//! Flashcard drill session management.
//! Every word is repeated until it has been answered correctly twice in a row.

use super::{DrillItem, VocabularyItem};
use crate::services::SessionRecorder;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tracing::{debug, info};

/// Activity kind reported to the session recorder when a flashcard session completes.
pub const FLASHCARDS_ACTIVITY: &str = "flashcards";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// A card is being shown.
    Active,
    /// The last card was answered and the next one has not been drawn yet.
    AwaitingSelection,
    /// Every card has been mastered (or the session started empty).
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// There was no current card; nothing changed.
    Ignored,
    /// The card stays in the session with the given streak.
    Repeating { streak: u32 },
    /// The card reached the mastery streak and left the session.
    Mastered,
    /// The card was mastered and it was the last one.
    SessionCompleted,
}

/// Working set of a flashcard drill.
/// `current` always refers to an item in `remaining`; mastered items are dropped from `remaining`.
pub struct MasteryQueue {
    original: Vec<VocabularyItem>,
    remaining: Vec<DrillItem>,
    current: Option<i64>,
    completion_recorded: bool,
    recorder: Arc<dyn SessionRecorder>,
    rng: StdRng,
}

impl MasteryQueue {
    /// Starts a session over `items` and draws the first card.
    pub fn start(items: Vec<VocabularyItem>, recorder: Arc<dyn SessionRecorder>) -> Self {
        Self::start_with_rng(items, recorder, StdRng::from_os_rng())
    }

    /// Same as [`MasteryQueue::start`] with a caller-supplied random source.
    pub fn start_with_rng(
        items: Vec<VocabularyItem>,
        recorder: Arc<dyn SessionRecorder>,
        rng: StdRng,
    ) -> Self {
        let mut queue = Self {
            original: items,
            remaining: Vec::new(),
            current: None,
            completion_recorded: false,
            recorder,
            rng,
        };
        queue.reset();
        queue
    }

    /// Discards all progress and starts over with the original word list.
    pub fn reset(&mut self) {
        self.remaining = self.original.iter().cloned().map(DrillItem::new).collect();
        self.current = None;
        self.completion_recorded = false;
        debug!(cards = self.remaining.len(), "flashcard session started");
        self.select_next();
    }

    /// Draws the next card uniformly from the remaining ones, if none is shown.
    pub fn select_next(&mut self) {
        if self.current.is_some() || self.remaining.is_empty() {
            return;
        }
        let index = self.rng.random_range(0..self.remaining.len());
        self.current = Some(self.remaining[index].id());
    }

    /// Records the learner's answer for the current card.
    ///
    /// The card is taken out of the working set and put back at the end unless it
    /// just reached the mastery streak. Afterwards no card is current; call
    /// [`MasteryQueue::select_next`] to draw the next one.
    pub fn answer(&mut self, was_correct: bool) -> AnswerOutcome {
        let Some(current_id) = self.current.take() else {
            return AnswerOutcome::Ignored;
        };
        let Some(position) = self.remaining.iter().position(|c| c.id() == current_id) else {
            return AnswerOutcome::Ignored;
        };

        let mut card = self.remaining.remove(position);
        if was_correct {
            card.mark_correct();
        } else {
            card.mark_wrong();
        }

        if !card.is_mastered() {
            let streak = card.correct_streak;
            self.remaining.push(card);
            return AnswerOutcome::Repeating { streak };
        }

        debug!(word = %card.item.source_word, "card mastered");
        if self.remaining.is_empty() {
            self.record_completion();
            AnswerOutcome::SessionCompleted
        } else {
            AnswerOutcome::Mastered
        }
    }

    fn record_completion(&mut self) {
        if self.completion_recorded {
            return;
        }
        self.completion_recorded = true;
        info!(cards = self.original.len(), "flashcard session completed");
        self.recorder.record(FLASHCARDS_ACTIVITY);
    }

    pub fn state(&self) -> SessionState {
        if self.remaining.is_empty() {
            SessionState::Completed
        } else if self.current.is_some() {
            SessionState::Active
        } else {
            SessionState::AwaitingSelection
        }
    }

    pub fn current_card(&self) -> Option<&DrillItem> {
        let id = self.current?;
        self.remaining.iter().find(|c| c.id() == id)
    }

    pub fn remaining(&self) -> &[DrillItem] {
        &self.remaining
    }

    pub fn is_completed(&self) -> bool {
        self.remaining.is_empty()
    }

    /// True when the session was started without any words.
    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    pub fn total_count(&self) -> usize {
        self.original.len()
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    pub fn mastered_count(&self) -> usize {
        self.total_count() - self.remaining_count()
    }

    pub fn progress_message(&self) -> String {
        format!(
            "Progress: {} / {} mastered ({} remaining)",
            self.mastered_count(),
            self.total_count(),
            self.remaining_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CefrLevel;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CountingRecorder {
        calls: Mutex<Vec<String>>,
    }

    impl CountingRecorder {
        fn count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl SessionRecorder for CountingRecorder {
        fn record(&self, activity_kind: &str) {
            self.calls.lock().unwrap().push(activity_kind.to_string());
        }
    }

    fn words(n: i64) -> Vec<VocabularyItem> {
        (1..=n)
            .map(|id| VocabularyItem::new(id, &format!("wort{id}"), &format!("word{id}"), CefrLevel::A1))
            .collect()
    }

    fn queue(n: i64) -> (MasteryQueue, Arc<CountingRecorder>) {
        let recorder = Arc::new(CountingRecorder::default());
        let queue = MasteryQueue::start_with_rng(words(n), recorder.clone(), StdRng::seed_from_u64(7));
        (queue, recorder)
    }

    fn streak_of(queue: &MasteryQueue, id: i64) -> Option<u32> {
        queue.remaining().iter().find(|c| c.id() == id).map(|c| c.correct_streak)
    }

    /// Keeps drawing until the card with `id` is current.
    fn draw(queue: &mut MasteryQueue, id: i64) {
        for _ in 0..1000 {
            queue.select_next();
            if queue.current_card().map(|c| c.id()) == Some(id) {
                return;
            }
            queue.current = None;
        }
        panic!("card {id} never drawn");
    }

    #[test]
    fn test_start_builds_one_card_per_word() {
        let (queue, _) = queue(5);
        assert_eq!(queue.remaining().len(), 5);
        assert!(queue.remaining().iter().all(|c| c.correct_streak == 0));
        assert_eq!(queue.state(), SessionState::Active);
        assert!(queue.current_card().is_some());
    }

    #[test]
    fn test_start_with_no_words_is_completed() {
        let (mut queue, recorder) = queue(0);
        assert!(queue.is_empty());
        assert_eq!(queue.state(), SessionState::Completed);
        assert!(queue.current_card().is_none());
        assert_eq!(queue.answer(true), AnswerOutcome::Ignored);
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn test_answer_without_current_is_ignored() {
        let (mut queue, _) = queue(3);
        queue.answer(true);
        assert_eq!(queue.state(), SessionState::AwaitingSelection);
        assert_eq!(queue.answer(true), AnswerOutcome::Ignored);
        assert_eq!(queue.remaining().iter().map(|c| c.correct_streak).sum::<u32>(), 1);
    }

    #[test]
    fn test_two_consecutive_correct_answers_master_a_card() {
        let (mut queue, _) = queue(3);
        draw(&mut queue, 2);
        assert_eq!(queue.answer(true), AnswerOutcome::Repeating { streak: 1 });
        draw(&mut queue, 2);
        assert_eq!(queue.answer(true), AnswerOutcome::Mastered);
        assert_eq!(streak_of(&queue, 2), None);
        assert_eq!(queue.mastered_count(), 1);
    }

    #[test]
    fn test_wrong_answer_resets_streak_and_keeps_card() {
        let (mut queue, _) = queue(2);
        draw(&mut queue, 1);
        queue.answer(true);
        draw(&mut queue, 1);
        assert_eq!(queue.answer(false), AnswerOutcome::Repeating { streak: 0 });
        assert_eq!(streak_of(&queue, 1), Some(0));
        assert_eq!(queue.remaining().len(), 2);

        // mastery still needs two consecutive corrects after the reset
        draw(&mut queue, 1);
        queue.answer(true);
        assert_eq!(streak_of(&queue, 1), Some(1));
        draw(&mut queue, 1);
        assert_eq!(queue.answer(true), AnswerOutcome::Mastered);
    }

    #[test]
    fn test_answered_card_moves_to_the_end() {
        let (mut queue, _) = queue(3);
        draw(&mut queue, 1);
        queue.answer(false);
        assert_eq!(queue.remaining().last().map(|c| c.id()), Some(1));
    }

    #[test]
    fn test_select_next_keeps_current_card() {
        let (mut queue, _) = queue(4);
        let first = queue.current_card().map(|c| c.id());
        queue.select_next();
        assert_eq!(queue.current_card().map(|c| c.id()), first);
    }

    #[test]
    fn test_two_word_scenario() {
        let (mut queue, recorder) = queue(2);
        let (a, b) = (1, 2);

        draw(&mut queue, a);
        queue.answer(true);
        assert_eq!(streak_of(&queue, a), Some(1));
        assert!(queue.current_card().is_none());

        draw(&mut queue, b);
        queue.answer(true);
        assert_eq!(streak_of(&queue, b), Some(1));

        draw(&mut queue, a);
        assert_eq!(queue.answer(true), AnswerOutcome::Mastered);
        assert_eq!(queue.remaining().len(), 1);

        queue.select_next();
        assert_eq!(queue.current_card().map(|c| c.id()), Some(b));
        queue.answer(false);
        assert_eq!(streak_of(&queue, b), Some(0));

        queue.select_next();
        queue.answer(true);
        assert_eq!(streak_of(&queue, b), Some(1));
        assert_eq!(recorder.count(), 0);

        queue.select_next();
        assert_eq!(queue.answer(true), AnswerOutcome::SessionCompleted);
        assert!(queue.is_completed());
        assert_eq!(queue.state(), SessionState::Completed);
        assert_eq!(recorder.count(), 1);
        assert_eq!(recorder.calls.lock().unwrap()[0], FLASHCARDS_ACTIVITY);

        queue.select_next();
        assert_eq!(queue.answer(true), AnswerOutcome::Ignored);
        assert_eq!(recorder.count(), 1);
    }

    #[test]
    fn test_reset_restores_initial_shape() {
        let (mut queue, recorder) = queue(1);
        queue.answer(true);
        queue.select_next();
        queue.answer(true);
        assert!(queue.is_completed());
        assert_eq!(recorder.count(), 1);

        queue.reset();
        assert_eq!(queue.remaining().len(), 1);
        assert!(queue.remaining().iter().all(|c| c.correct_streak == 0));
        assert_eq!(queue.state(), SessionState::Active);

        // a reset session reports its own completion again
        queue.answer(true);
        queue.select_next();
        queue.answer(true);
        assert_eq!(recorder.count(), 2);
    }

    #[test]
    fn test_every_card_eventually_drawn() {
        let (mut queue, _) = queue(4);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            if let Some(card) = queue.current_card() {
                seen.insert(card.id());
            }
            queue.answer(false);
            queue.select_next();
        }
        assert_eq!(seen.len(), 4);
    }
}
