//! Profile settings, stored in the local database.

use super::{ERROR_COLOR, ScreenEnv};
use chrono::Local;
use eframe::egui;
use rusqlite::Connection;
use wortwunder_app::database::db;
use wortwunder_app::models::{CefrLevel, ProfileSettings};

pub struct ProfileScreen {
    draft: ProfileSettings,
    error: Option<String>,
}

impl ProfileScreen {
    pub fn new(profile: ProfileSettings) -> Self {
        Self {
            draft: profile,
            error: None,
        }
    }

    /// Renders the form; returns the saved profile when "Save Changes" succeeded.
    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        env: &mut ScreenEnv,
        conn: &mut Connection,
    ) -> Option<ProfileSettings> {
        ui.heading("Profile Settings");
        ui.add_space(12.0);

        egui::Grid::new("profile_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Display Name");
                ui.add(egui::TextEdit::singleline(&mut self.draft.display_name).hint_text("Enter your display name"));
                ui.end_row();

                ui.label("Email");
                ui.add(egui::TextEdit::singleline(&mut self.draft.email).hint_text("Enter your email"));
                ui.end_row();

                ui.label("Preferred Language Level");
                let current = self.draft.preferred_level;
                egui::ComboBox::from_id_source("preferred_level")
                    .selected_text(format!("{} - {}", current, current.description()))
                    .show_ui(ui, |ui| {
                        for level in CefrLevel::ALL {
                            ui.selectable_value(
                                &mut self.draft.preferred_level,
                                level,
                                format!("{} - {}", level, level.description()),
                            );
                        }
                    });
                ui.end_row();
            });

        ui.add_space(12.0);
        if let Some(updated_at) = self.draft.updated_at {
            ui.weak(format!("Last saved {}", updated_at.format("%Y-%m-%d %H:%M")));
        }
        if let Some(error) = &self.error {
            ui.colored_label(ERROR_COLOR, error.as_str());
        }

        if !ui.button("💾 Save Changes").clicked() {
            return None;
        }

        let mut profile = self.draft.clone();
        profile.updated_at = Some(Local::now());
        match db::save_profile(&profile, conn) {
            Ok(()) => {
                tracing::info!("profile settings saved");
                self.draft = profile.clone();
                self.error = None;
                *env.notice = Some("Your profile settings have been updated successfully.".to_string());
                Some(profile)
            }
            Err(e) => {
                tracing::error!("Failed to save profile settings: {e}");
                self.error = Some(format!("Failed to save settings: {e}"));
                None
            }
        }
    }
}
