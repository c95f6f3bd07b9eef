//! Vocabulary by level: the full word list with level/theme filters and paging.

use super::{Load, ScreenEnv, level_selector, show_load_state, speak_button};
use eframe::egui;
use std::collections::HashSet;
use wortwunder_app::error::AppError;
use wortwunder_app::export::json::export_json_to_path;
use wortwunder_app::models::{
    CefrLevel, LevelFilter, ThemeFilter, VocabularyItem, VocabularyView, WordList,
};
use wortwunder_app::tasks::VocabularyTarget;

#[derive(Default)]
pub struct VocabularyScreen {
    view: Load<VocabularyView>,
    favorite_ids: Option<HashSet<i64>>,
}

fn level_color(level: CefrLevel) -> egui::Color32 {
    match level {
        CefrLevel::A1 => egui::Color32::from_rgb(30, 130, 60),
        CefrLevel::A2 => egui::Color32::from_rgb(40, 90, 200),
        CefrLevel::B1 => egui::Color32::from_rgb(170, 140, 0),
        CefrLevel::B2 => egui::Color32::from_rgb(210, 110, 20),
        CefrLevel::C1 => egui::Color32::from_rgb(200, 40, 40),
        CefrLevel::C2 => egui::Color32::from_rgb(130, 50, 180),
    }
}

impl VocabularyScreen {
    pub fn ensure_loaded(&mut self, env: &ScreenEnv) {
        if self.view.is_idle() {
            self.request(env);
        }
    }

    fn request(&mut self, env: &ScreenEnv) {
        self.view = Load::Loading;
        // filtering happens locally, so always fetch every level
        env.tasks
            .load_vocabulary(env.services.vocabulary.clone(), VocabularyTarget::Browser, LevelFilter::All);
        // the vocabulary payload carries no favorite flag
        env.tasks.load_favorite_ids(env.services.api.clone());
    }

    pub fn on_vocabulary(&mut self, result: Result<Vec<VocabularyItem>, AppError>) {
        self.view = match result {
            Ok(items) => {
                let mut view = VocabularyView::new(items);
                if let Some(ids) = &self.favorite_ids {
                    view.mark_favorites(ids);
                }
                Load::Ready(view)
            }
            Err(e) => {
                tracing::error!("Error fetching vocabulary: {e}");
                Load::Failed(format!(
                    "Error Loading Vocabulary: {e}\nUnable to connect to the vocabulary server."
                ))
            }
        };
    }

    pub fn on_favorite_ids(&mut self, result: Result<HashSet<i64>, AppError>) {
        match result {
            Ok(ids) => {
                if let Load::Ready(view) = &mut self.view {
                    view.mark_favorites(&ids);
                }
                self.favorite_ids = Some(ids);
            }
            Err(e) => tracing::warn!("Could not load favorites for the vocabulary list: {e}"),
        }
    }

    /// Keeps the star of a word in sync after a favorite was added or removed.
    pub fn on_favorite_changed(&mut self, id: i64, favorite: bool) {
        if let Some(ids) = &mut self.favorite_ids {
            if favorite {
                ids.insert(id);
            } else {
                ids.remove(&id);
            }
        }
        if let Load::Ready(view) = &mut self.view {
            if let Some(item) = view.items_mut().iter_mut().find(|i| i.id == id) {
                item.is_favorite = Some(favorite);
            }
        }
    }

    pub fn render(&mut self, ui: &mut egui::Ui, env: &mut ScreenEnv) {
        ui.heading("German Vocabulary by Level");
        ui.label("Master essential German vocabulary organized by CEFR proficiency levels and themes.");
        ui.add_space(8.0);

        if let Load::Failed(_) = self.view {
            if ui.button("Retry").clicked() {
                self.request(env);
            }
        }
        let Some(view) = show_load_state(ui, &mut self.view) else {
            return;
        };

        let mut level = view.level();
        let mut theme = view.theme().clone();
        let themes = view.themes();
        let mut action_export = false;

        ui.horizontal(|ui| {
            level_selector(ui, &mut level);
            egui::ComboBox::from_label("Theme")
                .selected_text(theme.label().to_string())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut theme, ThemeFilter::All, "All Themes");
                    for name in &themes {
                        ui.selectable_value(&mut theme, ThemeFilter::Only(name.clone()), name.as_str());
                    }
                });
            if ui.button("Export...").clicked() {
                action_export = true;
            }
        });
        view.set_level(level);
        view.set_theme(theme);

        ui.weak(view.range_message());
        ui.separator();

        let mut action_favorite: Option<(i64, bool)> = None;
        egui::ScrollArea::vertical()
            .id_source("vocabulary_list")
            .max_height((ui.available_height() - 40.0).max(120.0))
            .show(ui, |ui| {
                egui::Grid::new("vocabulary_grid")
                    .striped(true)
                    .num_columns(6)
                    .show(ui, |ui| {
                        ui.label("");
                        ui.strong("German");
                        ui.strong("English");
                        ui.strong("Theme");
                        ui.strong("Level");
                        ui.label("");
                        ui.end_row();

                        for item in view.page_items() {
                            speak_button(ui, env.services.speech.as_ref(), &item.source_word);
                            ui.strong(&item.source_word);
                            ui.label(&item.target_translation);
                            ui.weak(&item.theme);
                            ui.colored_label(level_color(item.level), item.level.as_str());

                            let is_favorite = item.is_favorite.unwrap_or(false);
                            let star = if is_favorite { "★" } else { "☆" };
                            if ui
                                .small_button(star)
                                .on_hover_text("Toggle favorite")
                                .clicked()
                            {
                                action_favorite = Some((item.id, !is_favorite));
                            }
                            ui.end_row();
                        }
                    });
            });

        if view.page_count() > 1 {
            ui.separator();
            ui.horizontal(|ui| {
                if ui.add_enabled(view.page() > 1, egui::Button::new("◀ Previous")).clicked() {
                    view.previous_page();
                }
                ui.label(format!("Page {} of {}", view.page(), view.page_count()));
                if ui
                    .add_enabled(view.page() < view.page_count(), egui::Button::new("Next ▶"))
                    .clicked()
                {
                    view.next_page();
                }
            });
        }

        if let Some((id, favorite)) = action_favorite {
            env.tasks.set_favorite(env.services.api.clone(), id, favorite);
        }
        if action_export {
            let list = WordList {
                name: format!("{} - {}", view.level(), view.theme().label()),
                items: view.filtered().into_iter().cloned().collect(),
            };
            export_list(&list, env.notice);
        }
    }
}

/// Asks for a file name and writes `list` there, reporting the outcome in `notice`.
pub fn export_list(list: &WordList, notice: &mut Option<String>) {
    let Some(path) = rfd::FileDialog::new()
        .set_file_name(format!("{}.json", list.name))
        .add_filter("JSON files", &["json"])
        .save_file()
    else {
        return;
    };

    *notice = Some(match export_json_to_path(list, &path) {
        Ok(()) => format!("Exported {} words to {}", list.items.len(), path.display()),
        Err(e) => {
            tracing::error!("Export failed: {e}");
            format!("Export failed: {e}")
        }
    });
}
