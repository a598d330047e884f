//! Main application state and egui integration.

use std::time::Duration;

use eframe::egui;
use ttpro::data::APP_NAME;
use ttpro::storage::config::{AppConfig, UserProfile};
use ttpro::strategy::{AdviceKind, StrategyService};
use ttpro::ui::screens::{
    AeroScreen, DocsScreen, FitnessScreen, StrategyAction, StrategyScreen, View,
};
use ttpro::ui::theme::Theme;

/// Main application state.
pub struct TtProApp {
    /// Current view
    current_view: View,
    /// UI theme
    theme: Theme,
    /// User profile
    profile: UserProfile,
    /// Application configuration
    config: AppConfig,
    /// Strategy generation service
    strategy_service: StrategyService,
    /// Fitness screen state
    fitness_screen: FitnessScreen,
    /// Aero screen state
    aero_screen: AeroScreen,
    /// Strategy screen state
    strategy_screen: StrategyScreen,
    /// Docs screen state
    docs_screen: DocsScreen,
}

impl TtProApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = ttpro::storage::config::load_config().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        });

        let profile = UserProfile::default();

        let theme = Theme::Dark;
        cc.egui_ctx.set_visuals(theme.visuals());
        if (config.ui.font_scale - 1.0).abs() > f32::EPSILON {
            cc.egui_ctx.set_zoom_factor(config.ui.font_scale);
        }

        let strategy_service = StrategyService::new(&config.strategy);

        Self {
            current_view: View::Fitness,
            theme,
            profile,
            config,
            strategy_service,
            fitness_screen: FitnessScreen::new(),
            aero_screen: AeroScreen::new(),
            strategy_screen: StrategyScreen::new(),
            docs_screen: DocsScreen::new(),
        }
    }

    /// Drain finished strategy outcomes from the service.
    fn process_strategy_outcomes(&mut self) {
        while let Some(outcome) = self.strategy_service.poll() {
            tracing::debug!("Strategy outcome delivered: {}", outcome.kind);
            self.strategy_screen.set_outcome(outcome);
        }
    }

    /// Navigate to a different view.
    fn navigate(&mut self, view: View) {
        tracing::debug!("Navigating from {:?} to {:?}", self.current_view, view);
        self.current_view = view;
    }

    /// Toggle the theme between dark and light.
    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = match self.theme {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
        ctx.set_visuals(self.theme.visuals());
    }

    /// Dispatch a requested strategy action to the service.
    fn handle_strategy_action(&mut self, action: StrategyAction) {
        if action == StrategyAction::None || self.strategy_screen.is_loading() {
            return;
        }

        let Some(race) = self.strategy_screen.selected_race().cloned() else {
            return;
        };

        match action {
            StrategyAction::GenerateAdvice => {
                self.strategy_service
                    .request_advice(&race, self.profile.ftp, self.profile.weight_kg);
                self.strategy_screen.set_loading(AdviceKind::Strategy);
            }
            StrategyAction::GenerateWorkout => {
                self.strategy_service.request_workout(&race);
                self.strategy_screen.set_loading(AdviceKind::Workout);
            }
            StrategyAction::None => {}
        }
    }

    /// Render the navigation sidebar.
    fn show_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("nav_panel")
            .resizable(false)
            .exact_width(220.0)
            .show(ctx, |ui| {
                ui.add_space(16.0);
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.heading(egui::RichText::new(APP_NAME).size(22.0).strong());
                });
                ui.add_space(24.0);

                for view in View::all() {
                    let selected = self.current_view == view;
                    if ui
                        .selectable_label(selected, egui::RichText::new(view.label()).size(14.0))
                        .clicked()
                    {
                        self.navigate(view);
                    }
                    ui.add_space(2.0);
                }

                ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!("v{} Beta", self.config.version))
                                .size(11.0)
                                .weak(),
                        );
                        let theme_icon = match self.theme {
                            Theme::Dark => "🌙",
                            Theme::Light => "☀",
                        };
                        if ui.small_button(theme_icon).clicked() {
                            self.toggle_theme(ctx);
                        }
                    });
                    ui.label(
                        egui::RichText::new("Powered by Gemini 2.5")
                            .size(11.0)
                            .weak(),
                    );
                    ui.separator();
                });
            });
    }
}

impl eframe::App for TtProApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Deliver any finished strategy requests before drawing
        self.process_strategy_outcomes();

        // Poll again soon while a request is in flight
        if self.strategy_screen.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // Handle keyboard shortcuts
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && self.current_view != View::Fitness {
            self.navigate(View::Fitness);
        }

        self.show_sidebar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.current_view {
            View::Fitness => {
                self.fitness_screen.show(ui, &self.profile);
            }
            View::Aero => {
                self.aero_screen.show(ui, self.config.ui.show_aero_overlay);
            }
            View::Strategy => {
                let action = self.strategy_screen.show(ui, &self.profile);
                self.handle_strategy_action(action);
            }
            View::Docs => {
                self.docs_screen.show(ui);
            }
        });
    }
}
