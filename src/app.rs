//! Main application UI and state management.
//! Handles sidebar navigation, background task results, and the shared dialogs.

use crate::screens::favorites::FavoritesScreen;
use crate::screens::flashcards::FlashcardsScreen;
use crate::screens::home::HomeScreen;
use crate::screens::profile::ProfileScreen;
use crate::screens::quiz::QuizScreen;
use crate::screens::spelling::SpellingScreen;
use crate::screens::vocabulary::VocabularyScreen;
use crate::screens::ScreenEnv;
use eframe::egui;
use rusqlite::Connection;
use tracing::warn;
use wortwunder_app::config::Services;
use wortwunder_app::models::{LevelFilter, ProfileSettings};
use wortwunder_app::tasks::{TaskManager, TaskResult, VocabularyTarget};

/// Application screens, one per sidebar entry
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum AppScreen {
    #[default]
    Home,
    CommonWords,
    Favorites,
    Flashcards,
    SpellingBee,
    MultipleChoiceQuiz,
    ProfileSettings,
}

const VOCABULARY_ENTRIES: [(AppScreen, &str); 2] = [
    (AppScreen::CommonWords, "📖 Common Words"),
    (AppScreen::Favorites, "★ Favorites"),
];

const GAME_ENTRIES: [(AppScreen, &str, &str); 3] = [
    (
        AppScreen::Flashcards,
        "Flashcards",
        "Practice vocabulary with interactive flashcards",
    ),
    (AppScreen::SpellingBee, "Spelling Bee", "Test your spelling skills"),
    (
        AppScreen::MultipleChoiceQuiz,
        "Multiple Choice Quiz",
        "Test your vocabulary knowledge with multiple choice questions",
    ),
];

/// Main application state
pub struct WortWunderApp {
    show_confirmation_dialog: bool,
    allowed_to_close: bool,
    services: Services,
    tasks: TaskManager,
    conn: Connection,

    current_screen: AppScreen,
    home: HomeScreen,
    vocabulary: VocabularyScreen,
    favorites: FavoritesScreen,
    flashcards: FlashcardsScreen,
    quiz: QuizScreen,
    spelling: SpellingScreen,
    profile: ProfileScreen,

    notice: Option<String>,
}

impl eframe::App for WortWunderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_task_results();

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .default_width(210.0)
            .show(ctx, |ui| {
                if let Some(screen) = self.render_sidebar(ui) {
                    self.navigate(screen);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| self.render_current_screen(ui));

        // Handle window close requests with confirmation dialog
        if ctx.input(|i| i.viewport().close_requested()) {
            if self.allowed_to_close {
                self.home.leave();
            } else {
                ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
                self.show_confirmation_dialog = true;
            }
        }

        if self.show_confirmation_dialog {
            egui::Window::new("Do you want to quit?")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("No").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = false;
                        }

                        if ui.button("Yes").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = true;
                            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
        }

        if let Some(message) = self.notice.clone() {
            egui::Window::new("WortWunder")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&message);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.notice = None;
                    }
                });
        }

        // worker threads report through a channel; make sure it gets drained
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}

impl WortWunderApp {
    /// Creates the application with the stored profile applied to every drill screen
    pub fn new(services: Services, conn: Connection, profile: ProfileSettings) -> Self {
        let level = LevelFilter::Only(profile.preferred_level);
        let mut app = Self {
            show_confirmation_dialog: false,
            allowed_to_close: false,
            services,
            tasks: TaskManager::new(),
            conn,
            current_screen: AppScreen::Home,
            home: HomeScreen::new(),
            vocabulary: VocabularyScreen::default(),
            favorites: FavoritesScreen::default(),
            flashcards: FlashcardsScreen::new(level),
            quiz: QuizScreen::new(level),
            spelling: SpellingScreen::new(level),
            profile: ProfileScreen::new(profile),
            notice: None,
        };
        let env = ScreenEnv {
            services: &app.services,
            tasks: &app.tasks,
            notice: &mut app.notice,
        };
        app.home.enter(&env);
        app
    }

    fn render_sidebar(&mut self, ui: &mut egui::Ui) -> Option<AppScreen> {
        let mut picked = None;

        ui.add_space(8.0);
        ui.heading("WortWunder");
        ui.separator();

        ui.strong("Vocabulary");
        for (screen, label) in VOCABULARY_ENTRIES {
            if ui.selectable_label(self.current_screen == screen, label).clicked() {
                picked = Some(screen);
            }
        }

        ui.add_space(12.0);
        ui.strong("Games");
        for (screen, label, description) in GAME_ENTRIES {
            if ui
                .selectable_label(self.current_screen == screen, label)
                .on_hover_text(description)
                .clicked()
            {
                picked = Some(screen);
            }
        }

        ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
            ui.add_space(8.0);
            if ui
                .selectable_label(self.current_screen == AppScreen::Home, "🚀 Back to Launchpad")
                .clicked()
            {
                picked = Some(AppScreen::Home);
            }
            if ui
                .selectable_label(
                    self.current_screen == AppScreen::ProfileSettings,
                    "⚙ Profile Settings",
                )
                .clicked()
            {
                picked = Some(AppScreen::ProfileSettings);
            }
            ui.separator();
        });

        picked
    }

    fn render_current_screen(&mut self, ui: &mut egui::Ui) {
        let mut env = ScreenEnv {
            services: &self.services,
            tasks: &self.tasks,
            notice: &mut self.notice,
        };

        let mut action_navigate: Option<AppScreen> = None;
        let mut saved_profile: Option<ProfileSettings> = None;

        egui::ScrollArea::vertical()
            .id_source("screen")
            .show(ui, |ui| match self.current_screen {
                AppScreen::Home => {
                    action_navigate = self.home.render(ui, &env, &GAME_ENTRIES);
                }
                AppScreen::CommonWords => self.vocabulary.render(ui, &mut env),
                AppScreen::Favorites => self.favorites.render(ui, &mut env),
                AppScreen::Flashcards => self.flashcards.render(ui, &mut env),
                AppScreen::SpellingBee => self.spelling.render(ui, &mut env),
                AppScreen::MultipleChoiceQuiz => self.quiz.render(ui, &mut env),
                AppScreen::ProfileSettings => {
                    saved_profile = self.profile.render(ui, &mut env, &mut self.conn);
                }
            });

        // Execute deferred actions
        if let Some(profile) = saved_profile {
            self.apply_preferred_level(LevelFilter::Only(profile.preferred_level));
        }
        if let Some(screen) = action_navigate {
            self.navigate(screen);
        }
    }

    /// Switches screens, stopping the home poller when leaving and loading data on first visit
    fn navigate(&mut self, screen: AppScreen) {
        if screen == self.current_screen {
            return;
        }
        if self.current_screen == AppScreen::Home {
            self.home.leave();
        }
        self.current_screen = screen;

        let env = ScreenEnv {
            services: &self.services,
            tasks: &self.tasks,
            notice: &mut self.notice,
        };
        match screen {
            AppScreen::Home => self.home.enter(&env),
            AppScreen::CommonWords => self.vocabulary.ensure_loaded(&env),
            AppScreen::Favorites => self.favorites.reload(&env),
            AppScreen::Flashcards => self.flashcards.ensure_loaded(&env),
            AppScreen::SpellingBee => self.spelling.ensure_loaded(&env),
            AppScreen::MultipleChoiceQuiz => self.quiz.ensure_loaded(&env),
            AppScreen::ProfileSettings => {}
        }
    }

    /// New preferred level: drill screens start over with it on their next visit
    fn apply_preferred_level(&mut self, level: LevelFilter) {
        self.flashcards.set_level(level);
        self.quiz.set_level(level);
        self.spelling.set_level(level);
    }

    fn handle_task_results(&mut self) {
        for result in self.tasks.poll_results() {
            match result {
                TaskResult::Vocabulary {
                    target,
                    level,
                    result,
                } => {
                    let env = ScreenEnv {
                        services: &self.services,
                        tasks: &self.tasks,
                        notice: &mut self.notice,
                    };
                    match target {
                        VocabularyTarget::Browser => self.vocabulary.on_vocabulary(result),
                        VocabularyTarget::Flashcards => {
                            self.flashcards.on_vocabulary(&env, level, result)
                        }
                        VocabularyTarget::Quiz => self.quiz.on_vocabulary(level, result),
                        VocabularyTarget::Spelling => self.spelling.on_vocabulary(level, result),
                    }
                }
                TaskResult::Favorites(result) => self.favorites.on_favorites(result),
                TaskResult::FavoriteIds(result) => self.vocabulary.on_favorite_ids(result),
                TaskResult::FavoriteChanged {
                    id,
                    favorite,
                    result,
                } => match result {
                    Ok(()) => {
                        self.vocabulary.on_favorite_changed(id, favorite);
                        self.favorites.on_favorite_changed(id, favorite);
                    }
                    Err(e) => {
                        warn!("Error updating favorite {id}: {e}");
                        let action = if favorite { "add to" } else { "remove from" };
                        self.notice = Some(format!("Failed to {action} favorites: {e}"));
                    }
                },
            }
        }
    }
}
