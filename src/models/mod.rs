pub mod drill_item;
pub mod level;
pub mod mastery_queue;
pub mod profile;
pub mod quiz;
pub mod spelling;
pub mod vocabulary_item;
pub mod vocabulary_view;
pub mod word_list;

pub use drill_item::DrillItem;
pub use level::{CefrLevel, LevelFilter};
pub use mastery_queue::{AnswerOutcome, MasteryQueue, SessionState};
pub use profile::ProfileSettings;
pub use quiz::{MultipleChoiceQuiz, QuizRound};
pub use spelling::SpellingDrill;
pub use vocabulary_item::VocabularyItem;
pub use vocabulary_view::{ThemeFilter, VocabularyView};
pub use word_list::WordList;
