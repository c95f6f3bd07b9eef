//! Favorite words of the learner.

use super::vocabulary::export_list;
use super::{Load, ScreenEnv, show_load_state, speak_button};
use eframe::egui;
use wortwunder_app::error::AppError;
use wortwunder_app::models::{VocabularyItem, WordList};

#[derive(Default)]
pub struct FavoritesScreen {
    favorites: Load<Vec<VocabularyItem>>,
}

impl FavoritesScreen {
    /// Favorites can change from other screens, so they are fetched on every visit.
    pub fn reload(&mut self, env: &ScreenEnv) {
        self.favorites = Load::Loading;
        env.tasks.load_favorites(env.services.api.clone());
    }

    pub fn on_favorites(&mut self, result: Result<Vec<VocabularyItem>, AppError>) {
        self.favorites = match result {
            Ok(items) => Load::Ready(items),
            Err(e) => {
                tracing::error!("Error fetching favorites: {e}");
                Load::Failed(format!("Failed to fetch favorites: {e}"))
            }
        };
    }

    pub fn on_favorite_changed(&mut self, id: i64, favorite: bool) {
        if favorite {
            return;
        }
        if let Load::Ready(items) = &mut self.favorites {
            items.retain(|item| item.id != id);
        }
    }

    pub fn render(&mut self, ui: &mut egui::Ui, env: &mut ScreenEnv) {
        let mut action_reload = false;
        ui.horizontal(|ui| {
            ui.heading("Favorites");
            if ui.button("⟲ Refresh").clicked() {
                action_reload = true;
            }
        });
        ui.label("Words you marked with a star in the vocabulary list.");
        ui.add_space(8.0);

        if action_reload {
            self.reload(env);
        }
        let Some(items) = show_load_state(ui, &mut self.favorites) else {
            return;
        };

        if items.is_empty() {
            ui.label("No favorites yet.");
            return;
        }

        let mut action_remove: Option<i64> = None;
        egui::ScrollArea::vertical()
            .id_source("favorites_list")
            .show(ui, |ui| {
                for item in items.iter() {
                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            speak_button(ui, env.services.speech.as_ref(), &item.source_word);
                            ui.strong(&item.source_word);
                            ui.label(format!("– {}", item.target_translation));
                            ui.weak(format!("{} · {}", item.theme, item.level));
                            if ui.small_button("Remove").clicked() {
                                action_remove = Some(item.id);
                            }
                        });
                    });
                }
            });

        ui.separator();
        if ui.button("Export...").clicked() {
            let list = WordList {
                name: "Favorites".to_string(),
                items: items.clone(),
            };
            export_list(&list, env.notice);
        }

        if let Some(id) = action_remove {
            env.tasks.set_favorite(env.services.api.clone(), id, false);
        }
    }
}
