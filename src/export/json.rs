//! JSON import/export of word lists.
//! Also provides a vocabulary source backed by a local word list file.

use crate::error::Result;
use crate::models::{LevelFilter, VocabularyItem, WordList};
use crate::services::VocabularySource;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Exports a word list to a JSON file at the specified path.
pub fn export_json_to_path(list: &WordList, path: &Path) -> Result<()> {
    let json_string = serde_json::to_string_pretty(list)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    info!("Word list '{}' exported to '{}'", list.name, path.display());
    Ok(())
}

/// Imports a word list from a JSON file.
///
/// Accepts either a `{"name": ..., "items": [...]}` object or a bare array of
/// items in the API's format; a bare array is named after the file.
pub fn import_json(path: &Path) -> Result<WordList> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let list = match serde_json::from_str::<WordList>(&contents) {
        Ok(list) => list,
        Err(_) => {
            let items: Vec<VocabularyItem> = serde_json::from_str(&contents)?;
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            WordList { name, items }
        }
    };

    info!(
        "Word list '{}' imported from '{}' ({} words)",
        list.name,
        path.display(),
        list.items.len()
    );
    Ok(list)
}

/// Vocabulary source reading a word list file on every fetch.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl VocabularySource for FileSource {
    fn fetch(&self, level: LevelFilter) -> Result<Vec<VocabularyItem>> {
        let list = import_json(&self.path)?;
        Ok(list
            .items
            .into_iter()
            .filter(|item| level.matches(item.level))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CefrLevel;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wortwunder_{}_{}", std::process::id(), name))
    }

    fn create_test_list() -> WordList {
        WordList {
            name: "Test Words".to_string(),
            items: vec![
                VocabularyItem::new(1, "hallo", "hello", CefrLevel::A1),
                VocabularyItem::new(2, "die Verantwortung", "responsibility", CefrLevel::B2),
            ],
        }
    }

    #[test]
    fn test_export_and_import_roundtrip() {
        let original = create_test_list();
        let path = temp_path("roundtrip.json");

        export_json_to_path(&original, &path).unwrap();
        let imported = import_json(&path).unwrap();

        assert_eq!(imported.name, original.name);
        assert_eq!(imported.items, original.items);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_import_bare_api_array() {
        let json_content = r#"[
  {"id": 5, "german_word": "der Zug", "english_translation": "train",
   "theme": "Travel", "cefr_level": "A1"}
]"#;
        let path = temp_path("travel.json");
        fs::write(&path, json_content).unwrap();

        let list = import_json(&path).unwrap();
        assert!(list.name.ends_with("travel"));
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].source_word, "der Zug");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_import_nonexistent_file() {
        assert!(import_json(Path::new("nonexistent_file_xyz123.json")).is_err());
    }

    #[test]
    fn test_import_invalid_json() {
        let path = temp_path("invalid.json");
        fs::write(&path, "{ this is not valid json }").unwrap();

        assert!(import_json(&path).is_err());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_source_filters_by_level() {
        let path = temp_path("source.json");
        export_json_to_path(&create_test_list(), &path).unwrap();
        let source = FileSource::new(path.clone());

        assert_eq!(source.fetch(LevelFilter::All).unwrap().len(), 2);
        let b2 = source.fetch(LevelFilter::Only(CefrLevel::B2)).unwrap();
        assert_eq!(b2.len(), 1);
        assert_eq!(b2[0].target_translation, "responsibility");
        assert!(source.fetch(LevelFilter::Only(CefrLevel::C1)).unwrap().is_empty());

        let _ = fs::remove_file(&path);
    }
}
