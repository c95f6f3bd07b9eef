//! Spelling Bee: write the German word for the English one shown.

use super::{ERROR_COLOR, Load, SUCCESS_COLOR, ScreenEnv, level_selector, show_load_state, speak_button};
use eframe::egui;
use wortwunder_app::error::AppError;
use wortwunder_app::models::{LevelFilter, SpellingDrill, VocabularyItem};
use wortwunder_app::tasks::VocabularyTarget;

pub struct SpellingScreen {
    level: LevelFilter,
    drill: Load<SpellingDrill>,
}

impl SpellingScreen {
    pub fn new(level: LevelFilter) -> Self {
        Self {
            level,
            drill: Load::Idle,
        }
    }

    pub fn set_level(&mut self, level: LevelFilter) {
        self.level = level;
        self.drill = Load::Idle;
    }

    pub fn ensure_loaded(&mut self, env: &ScreenEnv) {
        if self.drill.is_idle() {
            self.request(env);
        }
    }

    fn request(&mut self, env: &ScreenEnv) {
        self.drill = Load::Loading;
        env.tasks
            .load_vocabulary(env.services.vocabulary.clone(), VocabularyTarget::Spelling, self.level);
    }

    pub fn on_vocabulary(&mut self, level: LevelFilter, result: Result<Vec<VocabularyItem>, AppError>) {
        if level != self.level {
            return;
        }
        self.drill = match result.and_then(SpellingDrill::new) {
            Ok(drill) => Load::Ready(drill),
            Err(AppError::NotEnoughWords { .. }) => {
                Load::Failed("No vocabulary items found for this level".to_string())
            }
            Err(e) => {
                tracing::error!("Failed to load vocabulary: {e}");
                Load::Failed("Failed to load vocabulary".to_string())
            }
        };
    }

    pub fn render(&mut self, ui: &mut egui::Ui, env: &mut ScreenEnv) {
        ui.horizontal(|ui| {
            ui.heading("Spelling Bee");
            ui.add_space(20.0);
            if level_selector(ui, &mut self.level) {
                self.request(env);
            }
        });
        ui.label(
            "You'll see an English word - try to write its German translation. \
             Need help? Click the speaker button to hear the German word pronounced.",
        );
        ui.add_space(12.0);

        let Some(drill) = show_load_state(ui, &mut self.drill) else {
            return;
        };
        let Some(word) = drill.current_word().cloned() else {
            ui.label("No words available. Try selecting a different level.");
            return;
        };

        ui.label("Write the German word for:");
        ui.label(egui::RichText::new(&word.target_translation).size(28.0).strong());
        ui.add_space(12.0);

        let checked = drill.outcome.is_some();
        let mut action_submit = false;
        let mut action_next = false;

        ui.horizontal(|ui| {
            let response = ui.add_enabled(
                !checked,
                egui::TextEdit::singleline(&mut drill.input).hint_text("Type the German word..."),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                action_submit = true;
            }
            speak_button(ui, env.services.speech.as_ref(), &word.source_word);
        });

        match drill.outcome {
            Some(correct) => {
                let (color, verdict) = if correct {
                    (SUCCESS_COLOR, "Correct!")
                } else {
                    (ERROR_COLOR, "Incorrect!")
                };
                ui.colored_label(color, format!("{verdict} The answer is: {}", word.source_word));
                if ui.button("Next Word").clicked() {
                    action_next = true;
                }
            }
            None => {
                if ui.button("Check Answer").clicked() {
                    action_submit = true;
                }
            }
        }

        if action_submit {
            drill.submit();
        }
        if action_next {
            drill.next_word();
        }

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("Score: {} / {}", drill.score, drill.total)).size(18.0));
            if ui.button("⟲ Reset").clicked() {
                drill.reset();
            }
        });
    }
}
