//! Stat card widget for headline fitness numbers.

use egui::{Color32, RichText, Stroke, Ui};

use crate::ui::theme::DarkTheme;

/// A card showing one headline stat with an optional trend line.
pub struct StatCard<'a> {
    /// Uppercase label above the value
    label: &'a str,
    /// The stat value
    value: String,
    /// Unit shown after the value
    unit: &'a str,
    /// Optional secondary line under the value
    sub_line: Option<(String, Color32)>,
    /// Minimum card width
    min_width: f32,
}

impl<'a> StatCard<'a> {
    /// Create a new stat card.
    pub fn new(label: &'a str, value: impl Into<String>, unit: &'a str) -> Self {
        Self {
            label,
            value: value.into(),
            unit,
            sub_line: None,
            min_width: 200.0,
        }
    }

    /// Add a colored secondary line.
    pub fn with_sub_line(mut self, text: impl Into<String>, color: Color32) -> Self {
        self.sub_line = Some((text.into(), color));
        self
    }

    /// Set the minimum card width.
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = width;
        self
    }

    /// Show the card.
    pub fn show(self, ui: &mut Ui) {
        egui::Frame::new()
            .stroke(Stroke::new(1.0, DarkTheme::BORDER))
            .inner_margin(16.0)
            .corner_radius(6.0)
            .show(ui, |ui| {
                ui.set_min_width(self.min_width);

                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(self.label.to_uppercase())
                            .size(11.0)
                            .color(DarkTheme::TEXT_MUTED)
                            .strong(),
                    );
                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&self.value).size(28.0).strong());
                        if !self.unit.is_empty() {
                            ui.label(
                                RichText::new(self.unit)
                                    .size(13.0)
                                    .color(DarkTheme::TEXT_SECONDARY),
                            );
                        }
                    });

                    if let Some((text, color)) = self.sub_line {
                        ui.add_space(4.0);
                        ui.label(RichText::new(text).size(13.0).color(color));
                    }
                });
            });
    }
}
