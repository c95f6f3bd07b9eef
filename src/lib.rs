pub mod api;
pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod models;
pub mod poller;
pub mod services;
pub mod speech;
pub mod tasks;

pub use error::AppError;
pub use models::{
    CefrLevel, DrillItem, LevelFilter, MasteryQueue, MultipleChoiceQuiz, SpellingDrill,
    VocabularyItem, VocabularyView,
};
