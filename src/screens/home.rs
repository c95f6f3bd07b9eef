//! Launchpad: progress overview and shortcuts to the games.

use super::ScreenEnv;
use eframe::egui;
use wortwunder_app::poller::Poller;

pub struct HomeScreen {
    /// Refreshes the session count while the home screen is shown.
    stats: Option<Poller<u64>>,
    study_sessions: Option<u64>,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            stats: None,
            study_sessions: None,
        }
    }

    pub fn enter(&mut self, env: &ScreenEnv) {
        let client = env.services.api.clone();
        self.stats = Some(Poller::start(
            "study-stats",
            env.services.stats_interval,
            move || client.study_sessions_count(),
        ));
    }

    pub fn leave(&mut self) {
        if let Some(mut poller) = self.stats.take() {
            poller.stop();
        }
    }

    /// Renders the dashboard; returns the screen picked from the shortcuts.
    pub fn render<S: Copy>(
        &mut self,
        ui: &mut egui::Ui,
        env: &ScreenEnv,
        shortcuts: &[(S, &str, &str)],
    ) -> Option<S> {
        if let Some(count) = self.stats.as_mut().and_then(|p| p.latest()) {
            self.study_sessions = Some(count);
        }
        // keep polling the channel even when nothing else repaints
        ui.ctx().request_repaint_after(std::time::Duration::from_secs(1));

        ui.heading("WortWunder Launchpad");
        ui.label("Your central hub for German language learning");
        ui.add_space(16.0);

        ui.heading("Your Progress");
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label("Study Sessions");
            let text = match self.study_sessions {
                Some(count) => count.to_string(),
                None => "…".to_string(),
            };
            ui.label(egui::RichText::new(text).size(28.0).strong());
            ui.weak(format!("Server: {}", env.services.api.base_url()));
        });
        ui.add_space(16.0);

        ui.heading("Learning Games");
        let mut picked = None;
        for (screen, title, description) in shortcuts {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.strong(*title);
                        ui.weak(*description);
                    });
                    if ui.button("Start").clicked() {
                        picked = Some(*screen);
                    }
                });
            });
        }
        picked
    }
}

impl Drop for HomeScreen {
    fn drop(&mut self) {
        self.leave();
    }
}
