//! Collaborator interfaces used by the drill engines and screens.

use crate::error::Result;
use crate::models::{LevelFilter, VocabularyItem};

/// Supplies the vocabulary list for a level filter.
pub trait VocabularySource: Send + Sync {
    fn fetch(&self, level: LevelFilter) -> Result<Vec<VocabularyItem>>;
}

/// Receives a notification each time a drill session is completed.
///
/// Implementations must return promptly and handle their own failures:
/// a failed recording is logged, never reported back to the caller.
pub trait SessionRecorder: Send + Sync {
    fn record(&self, activity_kind: &str);
}

/// Speaks a German word aloud. Fire-and-forget.
pub trait SpeechService: Send + Sync {
    fn speak(&self, word: &str);
}
