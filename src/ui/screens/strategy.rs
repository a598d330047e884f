//! Race strategy screen.
//!
//! Race selector on the left, AI actions and generated text on the right.
//! The screen itself never touches the network; it reports the requested
//! action to the app, which drives the strategy service and feeds finished
//! outcomes back via [`StrategyScreen::set_outcome`].

use egui::{RichText, ScrollArea, Stroke, Ui};

use crate::data::{self, RaceProfile};
use crate::storage::config::UserProfile;
use crate::strategy::{AdviceKind, AdviceOutcome};
use crate::ui::theme::{badge_colors, DarkTheme};
use crate::ui::widgets::markdown_lite;

/// Action requested from the strategy screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyAction {
    /// Nothing requested this frame
    None,
    /// Generate gear and pacing advice for the selected race
    GenerateAdvice,
    /// Generate a race-specific workout for the selected race
    GenerateWorkout,
}

/// Strategy screen state.
pub struct StrategyScreen {
    /// Races shown in the selector
    races: Vec<RaceProfile>,
    /// Index of the selected race
    selected: usize,
    /// Last finished outcome
    output: Option<AdviceOutcome>,
    /// In-flight request, if any
    loading: Option<AdviceKind>,
}

impl Default for StrategyScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl StrategyScreen {
    /// Create a strategy screen seeded with the mock races.
    pub fn new() -> Self {
        Self {
            races: data::races(),
            selected: 0,
            output: None,
            loading: None,
        }
    }

    /// The currently selected race.
    pub fn selected_race(&self) -> Option<&RaceProfile> {
        self.races.get(self.selected)
    }

    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    /// Mark a request as started.
    pub fn set_loading(&mut self, kind: AdviceKind) {
        self.loading = Some(kind);
        self.output = None;
    }

    /// Deliver a finished outcome.
    pub fn set_outcome(&mut self, outcome: AdviceOutcome) {
        self.loading = None;
        self.output = Some(outcome);
    }

    /// Render the strategy screen.
    pub fn show(&mut self, ui: &mut Ui, profile: &UserProfile) -> StrategyAction {
        let mut action = StrategyAction::None;

        ui.horizontal_top(|ui| {
            self.show_race_selector(ui);
            ui.separator();
            action = self.show_main(ui, profile);
        });

        action
    }

    fn show_race_selector(&mut self, ui: &mut Ui) {
        let mut newly_selected = None;

        ui.vertical(|ui| {
            ui.set_width(260.0);
            ui.add_space(8.0);
            ui.label(RichText::new("Your Races").size(18.0).strong());
            ui.add_space(8.0);

            ScrollArea::vertical()
                .id_salt("race_selector")
                .show(ui, |ui| {
                    for (index, race) in self.races.iter().enumerate() {
                        let selected = index == self.selected;

                        let response = egui::Frame::new()
                            .stroke(Stroke::new(
                                1.0,
                                if selected {
                                    DarkTheme::ACCENT
                                } else {
                                    DarkTheme::BORDER
                                },
                            ))
                            .inner_margin(12.0)
                            .corner_radius(6.0)
                            .show(ui, |ui| {
                                ui.set_width(220.0);
                                ui.label(RichText::new(&race.name).strong());
                                ui.horizontal(|ui| {
                                    ui.label(
                                        RichText::new(format!("{} km", race.distance_km))
                                            .size(11.0)
                                            .color(DarkTheme::TEXT_MUTED),
                                    );
                                    ui.label(
                                        RichText::new(format!("{} m", race.elevation_gain_m))
                                            .size(11.0)
                                            .color(DarkTheme::TEXT_MUTED),
                                    );
                                });
                                ui.label(
                                    RichText::new(race.race_type.display_name().to_uppercase())
                                        .size(10.0)
                                        .color(badge_colors::race_type_color(race.race_type)),
                                );
                            })
                            .response;

                        if response.interact(egui::Sense::click()).clicked() && !selected {
                            newly_selected = Some(index);
                        }
                        ui.add_space(6.0);
                    }
                });
        });

        if let Some(index) = newly_selected {
            self.selected = index;
            self.output = None;
        }
    }

    fn show_main(&mut self, ui: &mut Ui, profile: &UserProfile) -> StrategyAction {
        let mut action = StrategyAction::None;

        let Some(race) = self.races.get(self.selected) else {
            ui.label("No races available.");
            return action;
        };
        let race_name = race.name.clone();
        let race_description = race.description.clone();

        ui.vertical(|ui| {
            ScrollArea::vertical()
                .id_salt("strategy_main")
                .show(ui, |ui| {
                    ui.add_space(8.0);
                    ui.heading(RichText::new(race_name).size(26.0));
                    ui.label(RichText::new(race_description).color(DarkTheme::TEXT_SECONDARY));
                    ui.add_space(16.0);

                    ui.horizontal(|ui| {
                        let loading = self.loading;

                        ui.add_enabled_ui(loading.is_none(), |ui| {
                            if ui
                                .button(RichText::new("AI Gear & Strategy").size(15.0))
                                .clicked()
                            {
                                action = StrategyAction::GenerateAdvice;
                            }
                            if ui
                                .button(RichText::new("AI Race-Spec Workout").size(15.0))
                                .clicked()
                            {
                                action = StrategyAction::GenerateWorkout;
                            }
                        });

                        if let Some(kind) = loading {
                            ui.spinner();
                            ui.label(
                                RichText::new(format!("Generating {}...", kind))
                                    .color(DarkTheme::TEXT_SECONDARY),
                            );
                        }
                    });
                    ui.add_space(16.0);

                    match &self.output {
                        Some(outcome) => {
                            egui::Frame::new()
                                .stroke(Stroke::new(1.0, DarkTheme::BORDER))
                                .inner_margin(16.0)
                                .corner_radius(6.0)
                                .show(ui, |ui| {
                                    ui.set_min_width(ui.available_width());
                                    ui.label(RichText::new("Gemini Analysis").size(16.0).strong());
                                    ui.label(
                                        RichText::new(format!(
                                            "Based on your fitness profile ({}W FTP / {}kg)",
                                            profile.ftp, profile.weight_kg
                                        ))
                                        .size(11.0)
                                        .color(DarkTheme::TEXT_MUTED),
                                    );
                                    ui.separator();
                                    ui.add_space(8.0);
                                    markdown_lite(ui, &outcome.text);
                                });
                        }
                        None if self.loading.is_none() => {
                            ui.add_space(32.0);
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    RichText::new(
                                        "Select an AI action above to analyze this race.",
                                    )
                                    .color(DarkTheme::TEXT_MUTED),
                                );
                            });
                        }
                        None => {}
                    }
                    ui.add_space(16.0);
                });
        });

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_starts_at_first_race() {
        let screen = StrategyScreen::new();
        assert_eq!(
            screen.selected_race().map(|r| r.id.as_str()),
            Some("r1")
        );
    }

    #[test]
    fn test_outcome_clears_loading() {
        let mut screen = StrategyScreen::new();
        screen.set_loading(AdviceKind::Strategy);
        assert!(screen.is_loading());

        screen.set_outcome(AdviceOutcome {
            kind: AdviceKind::Strategy,
            text: "## Pacing".to_string(),
        });
        assert!(!screen.is_loading());
    }
}
