//! Developer documentation screen.

use egui::{RichText, ScrollArea, Stroke, Ui};

use crate::data;
use crate::ui::theme::DarkTheme;

/// Documentation screen.
#[derive(Default)]
pub struct DocsScreen;

impl DocsScreen {
    /// Create a docs screen.
    pub fn new() -> Self {
        Self
    }

    /// Render the documentation screen.
    pub fn show(&self, ui: &mut Ui) {
        ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(8.0);
            egui::Frame::new()
                .stroke(Stroke::new(1.0, DarkTheme::BORDER))
                .inner_margin(24.0)
                .corner_radius(6.0)
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(data::DOCUMENTATION)
                            .monospace()
                            .size(13.0)
                            .color(DarkTheme::TEXT_SECONDARY),
                    );
                });
            ui.add_space(16.0);
        });
    }
}
