//! Multiple choice quiz screen.

use super::{ERROR_COLOR, Load, SUCCESS_COLOR, ScreenEnv, level_selector, show_load_state};
use eframe::egui;
use std::time::Duration;
use wortwunder_app::error::AppError;
use wortwunder_app::models::{LevelFilter, MultipleChoiceQuiz, VocabularyItem};
use wortwunder_app::tasks::VocabularyTarget;

/// How long the answer feedback stays visible before the next word.
const FEEDBACK_DELAY: Duration = Duration::from_secs(1);

pub struct QuizScreen {
    level: LevelFilter,
    quiz: Load<MultipleChoiceQuiz>,
    /// Frame time at which the current round was answered.
    answered_at: Option<f64>,
}

impl QuizScreen {
    pub fn new(level: LevelFilter) -> Self {
        Self {
            level,
            quiz: Load::Idle,
            answered_at: None,
        }
    }

    pub fn set_level(&mut self, level: LevelFilter) {
        self.level = level;
        self.quiz = Load::Idle;
    }

    pub fn ensure_loaded(&mut self, env: &ScreenEnv) {
        if self.quiz.is_idle() {
            self.request(env);
        }
    }

    fn request(&mut self, env: &ScreenEnv) {
        self.quiz = Load::Loading;
        self.answered_at = None;
        env.tasks
            .load_vocabulary(env.services.vocabulary.clone(), VocabularyTarget::Quiz, self.level);
    }

    pub fn on_vocabulary(&mut self, level: LevelFilter, result: Result<Vec<VocabularyItem>, AppError>) {
        if level != self.level {
            return;
        }
        self.quiz = match result.and_then(MultipleChoiceQuiz::new) {
            Ok(quiz) => Load::Ready(quiz),
            Err(AppError::NotEnoughWords { .. }) => {
                Load::Failed("Not enough vocabulary items for this level".to_string())
            }
            Err(e) => {
                tracing::error!("Failed to load vocabulary: {e}");
                Load::Failed("Failed to load vocabulary".to_string())
            }
        };
    }

    pub fn render(&mut self, ui: &mut egui::Ui, env: &mut ScreenEnv) {
        ui.horizontal(|ui| {
            ui.heading("Multiple Choice Quiz");
            ui.add_space(20.0);
            if level_selector(ui, &mut self.level) {
                self.request(env);
            }
        });
        ui.label(
            "You'll be shown a German word and need to select its correct English \
             translation from four options.",
        );
        ui.add_space(12.0);

        let now = ui.input(|i| i.time);
        let Some(quiz) = show_load_state(ui, &mut self.quiz) else {
            return;
        };

        if let Some(answered_at) = self.answered_at {
            let waited = now - answered_at;
            if waited >= FEEDBACK_DELAY.as_secs_f64() {
                quiz.next_round();
                self.answered_at = None;
            } else {
                ui.ctx()
                    .request_repaint_after(Duration::from_secs_f64(FEEDBACK_DELAY.as_secs_f64() - waited));
            }
        }

        let Some(round) = quiz.round().cloned() else {
            ui.label("No questions available. Try selecting a different level.");
            return;
        };

        ui.label("Translate to English:");
        ui.label(egui::RichText::new(&round.word.source_word).size(28.0).strong());
        ui.add_space(12.0);

        let mut action_answer: Option<String> = None;
        egui::Grid::new("quiz_options")
            .num_columns(2)
            .spacing([12.0, 12.0])
            .show(ui, |ui| {
                for (i, option) in round.options.iter().enumerate() {
                    let mut text = egui::RichText::new(option).size(18.0);
                    if let Some((picked, is_correct)) = &round.answer {
                        if picked == option {
                            text = text.color(if *is_correct { SUCCESS_COLOR } else { ERROR_COLOR });
                        }
                    }
                    let button = egui::Button::new(text).min_size(egui::vec2(180.0, 40.0));
                    if ui.add_enabled(!round.is_answered(), button).clicked() {
                        action_answer = Some(option.clone());
                    }
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });

        if let Some(option) = action_answer {
            if quiz.answer(&option).is_some() {
                self.answered_at = Some(now);
                ui.ctx().request_repaint_after(FEEDBACK_DELAY);
            }
        }

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("Score: {} / {}", quiz.score, quiz.total)).size(18.0));
            if ui.button("⟲ Reset").clicked() {
                quiz.reset();
                self.answered_at = None;
            }
        });
    }
}
