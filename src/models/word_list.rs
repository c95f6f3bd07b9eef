//! Named list of vocabulary items, the unit of JSON import and export
use super::VocabularyItem;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WordList {
    pub name: String,
    pub items: Vec<VocabularyItem>,
}
