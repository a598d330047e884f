//! Fitness and conditioning screen.
//!
//! Headline stats, the weight progression chart, and the training library
//! list.

use egui::{RichText, ScrollArea, Stroke, Ui};

use crate::data::{self, RaceProfile, TrainingMenu, WeightRecord};
use crate::storage::config::UserProfile;
use crate::ui::theme::{badge_colors, DarkTheme};
use crate::ui::widgets::{StatCard, WeightChart};

/// Fitness screen state.
pub struct FitnessScreen {
    /// Training menus shown in the library list
    menus: Vec<TrainingMenu>,
    /// Weight history backing the chart
    weight_history: Vec<WeightRecord>,
    /// Next race on the calendar
    next_race: Option<RaceProfile>,
}

impl Default for FitnessScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl FitnessScreen {
    /// Create a fitness screen seeded with the mock fixtures.
    pub fn new() -> Self {
        Self {
            menus: data::training_menus(),
            weight_history: data::weight_history(),
            next_race: data::races().into_iter().next(),
        }
    }

    /// Latest recorded weight, falling back to the profile weight.
    fn current_weight_kg(&self, profile: &UserProfile) -> f32 {
        self.weight_history
            .last()
            .map(|record| record.weight_kg)
            .unwrap_or(profile.weight_kg)
    }

    /// Render the fitness screen.
    pub fn show(&mut self, ui: &mut Ui, profile: &UserProfile) {
        ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(8.0);
            ui.heading(RichText::new("Fitness & Conditioning").size(26.0));
            ui.label(
                RichText::new("Manage your physical baseline and training load.")
                    .color(DarkTheme::TEXT_SECONDARY),
            );
            ui.add_space(16.0);

            self.show_stat_cards(ui, profile);
            ui.add_space(16.0);

            self.show_weight_chart(ui);
            ui.add_space(16.0);

            self.show_training_library(ui);
            ui.add_space(16.0);
        });
    }

    fn show_stat_cards(&self, ui: &mut Ui, profile: &UserProfile) {
        let weight = self.current_weight_kg(profile);
        let w_per_kg = profile.ftp as f32 / weight;

        ui.horizontal(|ui| {
            StatCard::new("Current FTP", profile.ftp.to_string(), "W")
                .with_sub_line("+5W from last month", DarkTheme::SUCCESS)
                .show(ui);

            StatCard::new("Weight", format!("{:.1}", weight), "kg")
                .with_sub_line(format!("{:.2} W/kg", w_per_kg), DarkTheme::TEXT_SECONDARY)
                .show(ui);

            let (race_name, days_out) = match &self.next_race {
                Some(race) => (race.name.as_str(), "14 days out"),
                None => ("No race planned", ""),
            };
            StatCard::new("Next Race", race_name, "")
                .with_sub_line(days_out, DarkTheme::ACCENT)
                .show(ui);
        });
    }

    fn show_weight_chart(&self, ui: &mut Ui) {
        egui::Frame::new()
            .stroke(Stroke::new(1.0, DarkTheme::BORDER))
            .inner_margin(16.0)
            .corner_radius(6.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(RichText::new("Weight Progression").size(16.0).strong());
                ui.add_space(8.0);
                WeightChart::new(&self.weight_history).show(ui);
            });
    }

    fn show_training_library(&self, ui: &mut Ui) {
        egui::Frame::new()
            .stroke(Stroke::new(1.0, DarkTheme::BORDER))
            .inner_margin(16.0)
            .corner_radius(6.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(RichText::new("Training Library").size(16.0).strong());
                ui.add_space(8.0);

                for menu in &self.menus {
                    ui.separator();
                    ui.add_space(6.0);

                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&menu.title).strong());
                                ui.label(
                                    RichText::new(menu.menu_type.display_name())
                                        .size(11.0)
                                        .color(badge_colors::menu_type_color(menu.menu_type)),
                                );
                            });
                            ui.label(
                                RichText::new(&menu.description)
                                    .size(13.0)
                                    .color(DarkTheme::TEXT_SECONDARY),
                            );
                        });

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.vertical(|ui| {
                                ui.label(RichText::new(format!("{}", menu.tss)).monospace());
                                ui.label(
                                    RichText::new("TSS").size(11.0).color(DarkTheme::TEXT_MUTED),
                                );
                            });
                            ui.add_space(16.0);
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(format!("{} min", menu.duration_min)).monospace(),
                                );
                                ui.label(
                                    RichText::new("Duration")
                                        .size(11.0)
                                        .color(DarkTheme::TEXT_MUTED),
                                );
                            });
                        });
                    });
                    ui.add_space(6.0);
                }
            });
    }
}
