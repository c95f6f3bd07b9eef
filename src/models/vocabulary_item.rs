//! VocabularyItem is a German word with its English translation, as served by the word-list API
use super::CefrLevel;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VocabularyItem {
    pub id: i64,
    #[serde(rename = "german_word")]
    pub source_word: String,
    #[serde(rename = "english_translation")]
    pub target_translation: String,
    pub theme: String,
    #[serde(rename = "cefr_level")]
    pub level: CefrLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_sentence: Option<String>,
    #[serde(
        rename = "example_sentence_translation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub example_translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_group_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

impl VocabularyItem {
    pub fn new(id: i64, source_word: &str, target_translation: &str, level: CefrLevel) -> Self {
        Self {
            id,
            source_word: source_word.to_string(),
            target_translation: target_translation.to_string(),
            theme: "General".to_string(),
            level,
            example_sentence: None,
            example_translation: None,
            word_group_id: None,
            word_group_name: None,
            is_favorite: None,
        }
    }

    /// Example sentence and its translation, only when the sentence is present.
    pub fn example(&self) -> Option<(&str, Option<&str>)> {
        self.example_sentence
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(|s| (s, self.example_translation.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_item() {
        let json = r#"{
            "id": 7,
            "german_word": "das Brot",
            "english_translation": "bread",
            "theme": "Food",
            "cefr_level": "A1",
            "word_group_id": null,
            "example_sentence": "Ich esse Brot.",
            "example_sentence_translation": "I eat bread."
        }"#;

        let item: VocabularyItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.source_word, "das Brot");
        assert_eq!(item.target_translation, "bread");
        assert_eq!(item.level, CefrLevel::A1);
        assert_eq!(item.word_group_id, None);
        assert_eq!(item.example(), Some(("Ich esse Brot.", Some("I eat bread."))));
    }

    #[test]
    fn test_missing_optional_fields() {
        let json = r#"{"id": 1, "german_word": "ja", "english_translation": "yes",
                       "theme": "General", "cefr_level": "A1"}"#;

        let item: VocabularyItem = serde_json::from_str(json).unwrap();
        assert!(item.example().is_none());
        assert!(item.is_favorite.is_none());
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let item = VocabularyItem::new(3, "danke", "thanks", CefrLevel::A1);
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["german_word"], "danke");
        assert_eq!(value["english_translation"], "thanks");
        assert_eq!(value["cefr_level"], "A1");
        assert!(value.get("example_sentence").is_none());
    }
}
