//! Flashcards: flip a card, say whether you knew it, repeat until every word is mastered.

use super::{Load, ScreenEnv, level_selector, show_load_state, speak_button};
use eframe::egui;
use wortwunder_app::error::AppError;
use wortwunder_app::models::drill_item::MASTERY_STREAK;
use wortwunder_app::models::{LevelFilter, MasteryQueue, SessionState, VocabularyItem};
use wortwunder_app::tasks::VocabularyTarget;

pub struct FlashcardsScreen {
    level: LevelFilter,
    session: Load<MasteryQueue>,
    is_flipped: bool,
    show_german_first: bool,
}

impl FlashcardsScreen {
    pub fn new(level: LevelFilter) -> Self {
        Self {
            level,
            session: Load::Idle,
            is_flipped: false,
            show_german_first: false,
        }
    }

    pub fn set_level(&mut self, level: LevelFilter) {
        self.level = level;
        self.session = Load::Idle;
    }

    pub fn ensure_loaded(&mut self, env: &ScreenEnv) {
        if self.session.is_idle() {
            self.request(env);
        }
    }

    fn request(&mut self, env: &ScreenEnv) {
        self.session = Load::Loading;
        self.is_flipped = false;
        env.tasks
            .load_vocabulary(env.services.vocabulary.clone(), VocabularyTarget::Flashcards, self.level);
    }

    pub fn on_vocabulary(
        &mut self,
        env: &ScreenEnv,
        level: LevelFilter,
        result: Result<Vec<VocabularyItem>, AppError>,
    ) {
        if level != self.level {
            return;
        }
        self.session = match result {
            Ok(items) if items.is_empty() => Load::Failed("No vocabulary items found".to_string()),
            Ok(items) => Load::Ready(MasteryQueue::start(items, env.services.recorder.clone())),
            Err(e) => {
                tracing::error!("Failed to load vocabulary: {e}");
                Load::Failed("Failed to load vocabulary".to_string())
            }
        };
    }

    pub fn render(&mut self, ui: &mut egui::Ui, env: &mut ScreenEnv) {
        let mut action_reset = false;

        ui.horizontal(|ui| {
            ui.heading("Flashcards");
            ui.add_space(20.0);
            if level_selector(ui, &mut self.level) {
                self.request(env);
            }
            ui.checkbox(&mut self.show_german_first, "German first");
            if ui.button("⟲ Reset").clicked() {
                action_reset = true;
            }
        });
        ui.label("Learn words using interactive flashcards.");

        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong("How it works:");
            ui.label("• Click a card to flip it and see the translation");
            ui.label("• Each word needs to be answered correctly twice to be mastered");
            ui.label("• If you get a word wrong, your progress for that word resets");
            ui.label("• Words will keep appearing until you master them");
        });
        ui.add_space(12.0);

        let show_german_first = self.show_german_first;
        let Some(session) = show_load_state(ui, &mut self.session) else {
            return;
        };

        if action_reset {
            session.reset();
            self.is_flipped = false;
        }

        // draw the next card once the previous answer has been recorded
        session.select_next();

        ui.label(session.progress_message());
        ui.add_space(12.0);

        if session.state() == SessionState::Completed {
            ui.heading("Congratulations! 🎉");
            ui.label("You've mastered all the words in this set!");
            if ui.button("Practice Again").clicked() {
                session.reset();
                self.is_flipped = false;
            }
            return;
        }

        let Some(card) = session.current_card() else {
            return;
        };
        // Clone values to avoid borrowing issues
        let item = card.item.clone();
        let streak = card.correct_streak;

        let german_visible = self.is_flipped != show_german_first;
        let (prompt, shown) = match (self.is_flipped, show_german_first) {
            (false, false) => ("What's the German word for:", &item.target_translation),
            (false, true) => ("What's the English word for:", &item.source_word),
            (true, false) => ("German Translation:", &item.source_word),
            (true, true) => ("English Translation:", &item.target_translation),
        };

        let card_response = egui::Frame::group(ui.style())
            .show(ui, |ui| {
                ui.set_min_height(200.0);
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.label(prompt);
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(shown.as_str()).size(32.0).strong());
                        if german_visible {
                            speak_button(ui, env.services.speech.as_ref(), &item.source_word);
                        }
                    });

                    if self.is_flipped {
                        if let Some((sentence, translation)) = item.example() {
                            ui.add_space(16.0);
                            ui.label("Example:");
                            ui.label(egui::RichText::new(sentence).size(18.0));
                            if let Some(translation) = translation {
                                ui.weak(translation);
                            }
                        }
                    }
                    ui.add_space(20.0);
                    ui.weak(format!("Streak: {streak} / {MASTERY_STREAK}"));
                });
            })
            .response
            .interact(egui::Sense::click());

        if card_response.clicked() {
            self.is_flipped = !self.is_flipped;
        }

        ui.add_space(12.0);

        let mut action_answer: Option<bool> = None;
        ui.horizontal(|ui| {
            if ui.button("👎 Didn't Know").clicked() {
                action_answer = Some(false);
            }
            if ui.button("👍 Knew It").clicked() {
                action_answer = Some(true);
            }
        });

        if let Some(was_correct) = action_answer {
            session.answer(was_correct);
            self.is_flipped = false;
        }
    }
}
