//! Background work for the UI.
//!
//! Network calls run on worker threads; their results come back through a
//! channel that the app drains once per frame.

use crate::api::ApiClient;
use crate::error::AppError;
use crate::models::{LevelFilter, VocabularyItem};
use crate::services::VocabularySource;
use std::collections::HashSet;
use std::sync::{Arc, mpsc};
use std::thread;
use tracing::error;

/// Screen a vocabulary request was made for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VocabularyTarget {
    Browser,
    Flashcards,
    Quiz,
    Spelling,
}

pub enum TaskResult {
    Vocabulary {
        target: VocabularyTarget,
        level: LevelFilter,
        result: Result<Vec<VocabularyItem>, AppError>,
    },
    Favorites(Result<Vec<VocabularyItem>, AppError>),
    FavoriteIds(Result<HashSet<i64>, AppError>),
    FavoriteChanged {
        id: i64,
        favorite: bool,
        result: Result<(), AppError>,
    },
}

pub struct TaskManager {
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskManager {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn spawn<F>(&self, name: &str, job: F)
    where
        F: FnOnce() -> TaskResult + Send + 'static,
    {
        let sender = self.sender.clone();
        let spawned = thread::Builder::new().name(name.to_string()).spawn(move || {
            let _ = sender.send(job());
        });
        if let Err(e) = spawned {
            error!("Could not start {name} task: {e}");
        }
    }

    pub fn load_vocabulary(
        &self,
        source: Arc<dyn VocabularySource>,
        target: VocabularyTarget,
        level: LevelFilter,
    ) {
        self.spawn("load-vocabulary", move || TaskResult::Vocabulary {
            target,
            level,
            result: source.fetch(level),
        });
    }

    pub fn load_favorites(&self, client: ApiClient) {
        self.spawn("load-favorites", move || {
            TaskResult::Favorites(client.get_favorites())
        });
    }

    /// Fetches only the ids of the stored favorites, for marking stars.
    pub fn load_favorite_ids(&self, client: ApiClient) {
        self.spawn("load-favorite-ids", move || {
            TaskResult::FavoriteIds(
                client
                    .get_favorites()
                    .map(|items| items.into_iter().map(|i| i.id).collect()),
            )
        });
    }

    pub fn set_favorite(&self, client: ApiClient, id: i64, favorite: bool) {
        self.spawn("set-favorite", move || {
            let result = if favorite {
                client.add_favorite(id)
            } else {
                client.remove_favorite(id)
            };
            TaskResult::FavoriteChanged { id, favorite, result }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CefrLevel;
    use std::time::{Duration, Instant};

    struct StaticSource(Vec<VocabularyItem>);

    impl VocabularySource for StaticSource {
        fn fetch(&self, level: LevelFilter) -> crate::error::Result<Vec<VocabularyItem>> {
            Ok(self.0.iter().filter(|i| level.matches(i.level)).cloned().collect())
        }
    }

    fn wait_for_results(manager: &mut TaskManager) -> Vec<TaskResult> {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let results = manager.poll_results();
            if !results.is_empty() || Instant::now() > deadline {
                return results;
            }
            thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_vocabulary_result_is_delivered() {
        let mut manager = TaskManager::new();
        let source = Arc::new(StaticSource(vec![
            VocabularyItem::new(1, "eins", "one", CefrLevel::A1),
            VocabularyItem::new(2, "zwei", "two", CefrLevel::A2),
        ]));

        manager.load_vocabulary(source, VocabularyTarget::Quiz, LevelFilter::Only(CefrLevel::A2));

        let results = wait_for_results(&mut manager);
        assert_eq!(results.len(), 1);
        match &results[0] {
            TaskResult::Vocabulary { target, level, result } => {
                assert_eq!(*target, VocabularyTarget::Quiz);
                assert_eq!(*level, LevelFilter::Only(CefrLevel::A2));
                let items = result.as_ref().unwrap();
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].source_word, "zwei");
            }
            _ => panic!("unexpected task result"),
        }
    }

    #[test]
    fn test_favorite_ids_failure_is_delivered() {
        let mut manager = TaskManager::new();
        manager.load_favorite_ids(ApiClient::new("http://127.0.0.1:9").unwrap());

        let results = wait_for_results(&mut manager);
        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], TaskResult::FavoriteIds(Err(_))));
    }

    #[test]
    fn test_poll_without_tasks_is_empty() {
        let mut manager = TaskManager::new();
        assert!(manager.poll_results().is_empty());
    }
}
