//! One module per sidebar entry, plus the widgets they share.

pub mod favorites;
pub mod flashcards;
pub mod home;
pub mod profile;
pub mod quiz;
pub mod spelling;
pub mod vocabulary;

use eframe::egui;
use wortwunder_app::config::Services;
use wortwunder_app::models::LevelFilter;
use wortwunder_app::services::SpeechService;
use wortwunder_app::tasks::TaskManager;

/// Loading state of the data behind a screen.
pub enum Load<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for Load<T> {
    fn default() -> Self {
        Load::Idle
    }
}

impl<T> Load<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Load::Idle)
    }
}

/// Shared resources handed to a screen while it renders.
pub struct ScreenEnv<'a> {
    pub services: &'a Services,
    pub tasks: &'a TaskManager,
    /// Message shown in a dialog after the frame.
    pub notice: &'a mut Option<String>,
}

pub const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 40, 40);
pub const SUCCESS_COLOR: egui::Color32 = egui::Color32::from_rgb(30, 130, 60);

/// Level drop-down; returns true when the selection changed.
pub fn level_selector(ui: &mut egui::Ui, selected: &mut LevelFilter) -> bool {
    let before = *selected;
    egui::ComboBox::from_label("Level")
        .selected_text(selected.to_string())
        .show_ui(ui, |ui| {
            for option in LevelFilter::options() {
                ui.selectable_value(selected, option, option.to_string());
            }
        });
    before != *selected
}

pub fn speak_button(ui: &mut egui::Ui, speech: &dyn SpeechService, word: &str) {
    if ui
        .small_button("🔊")
        .on_hover_text("Listen to the German word")
        .clicked()
    {
        speech.speak(word);
    }
}

/// Spinner, error message, or nothing, for the non-ready states.
/// Returns the ready value when there is one.
pub fn show_load_state<'a, T>(ui: &mut egui::Ui, load: &'a mut Load<T>) -> Option<&'a mut T> {
    match load {
        Load::Idle | Load::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading...");
            });
            None
        }
        Load::Failed(message) => {
            ui.colored_label(ERROR_COLOR, message.as_str());
            None
        }
        Load::Ready(value) => Some(value),
    }
}
