//! Wrapper for vocabulary items that tracks in-session mastery progress.
use super::VocabularyItem;

/// Consecutive correct answers needed before an item leaves the session.
pub const MASTERY_STREAK: u32 = 2;

#[derive(Clone, Debug)]
pub struct DrillItem {
    pub item: VocabularyItem,
    pub correct_streak: u32,
}

impl DrillItem {
    pub fn new(item: VocabularyItem) -> Self {
        Self {
            item,
            correct_streak: 0,
        }
    }

    pub fn id(&self) -> i64 {
        self.item.id
    }

    pub fn mark_correct(&mut self) {
        self.correct_streak += 1;
    }

    pub fn mark_wrong(&mut self) {
        self.correct_streak = 0;
    }

    pub fn is_mastered(&self) -> bool {
        self.correct_streak >= MASTERY_STREAK
    }
}
