//! Aero lab screen.
//!
//! Left pane: simulated motion-analysis viewport with the tracking overlay.
//! Right pane: the virtual CdA estimator form.

use egui::{Align2, Color32, FontId, Pos2, RichText, ScrollArea, Sense, Stroke, Ui, Vec2};

use crate::aero::overlay::{OverlayGeometry, MARKER_RADIUS, STROKE_WIDTH};
use crate::aero::{estimate_cda, format_cda, CdaInputs, ModelInfeasible};
use crate::ui::theme::DarkTheme;

/// Aero screen state.
pub struct AeroScreen {
    /// Current estimator inputs
    inputs: CdaInputs,
    /// Input buffers for numeric fields
    power_input: String,
    speed_input: String,
    crr_input: String,
    air_density_input: String,
    /// Last computed estimate
    result: Option<Result<f64, ModelInfeasible>>,
    /// Whether the analysis overlay is drawn
    overlay_active: bool,
}

impl Default for AeroScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl AeroScreen {
    /// Create an aero screen with default estimator inputs.
    pub fn new() -> Self {
        let inputs = CdaInputs::default();

        Self {
            power_input: format!("{}", inputs.power_watts),
            speed_input: format!("{}", inputs.speed_kmh),
            crr_input: format!("{}", inputs.crr),
            air_density_input: format!("{}", inputs.air_density_kg_m3),
            inputs,
            result: None,
            overlay_active: false,
        }
    }

    /// Current estimator inputs (parsed from the form).
    pub fn inputs(&self) -> &CdaInputs {
        &self.inputs
    }

    /// Render the aero screen.
    pub fn show(&mut self, ui: &mut Ui, show_overlay_setting: bool) {
        ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(8.0);
            ui.heading(RichText::new("Aero Lab").size(26.0));
            ui.label(
                RichText::new("Analyze position and estimate aerodynamic efficiency.")
                    .color(DarkTheme::TEXT_SECONDARY),
            );
            ui.add_space(16.0);

            ui.columns(2, |columns| {
                self.show_motion_analysis(&mut columns[0], show_overlay_setting);
                self.show_estimator(&mut columns[1]);
            });
            ui.add_space(16.0);
        });
    }

    fn show_motion_analysis(&mut self, ui: &mut Ui, show_overlay_setting: bool) {
        egui::Frame::new()
            .stroke(Stroke::new(1.0, DarkTheme::BORDER))
            .inner_margin(16.0)
            .corner_radius(6.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Motion Analysis").size(16.0).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let label = if self.overlay_active {
                            "AI Overlay On"
                        } else {
                            "AI Overlay Off"
                        };
                        if ui.selectable_label(self.overlay_active, label).clicked() {
                            self.overlay_active = !self.overlay_active;
                        }
                    });
                });
                ui.add_space(8.0);

                self.show_viewport(ui, show_overlay_setting);

                ui.add_space(8.0);
                ui.label(
                    RichText::new(
                        "* AI pose estimation is simulated in this demo. A real \
                         implementation would run a pose model over the video.",
                    )
                    .size(11.0)
                    .color(DarkTheme::TEXT_MUTED),
                );
            });
    }

    fn show_viewport(&self, ui: &mut Ui, show_overlay_setting: bool) {
        let width = ui.available_width();
        let size = Vec2::new(width, width * 9.0 / 16.0);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, 6.0, Color32::BLACK);

        if !(self.overlay_active && show_overlay_setting) {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "Upload side-view video to analyze",
                FontId::proportional(14.0),
                DarkTheme::TEXT_MUTED,
            );
            return;
        }

        let elapsed = ui.input(|i| i.time);
        let frame = OverlayGeometry::new(rect.width(), rect.height()).frame_at(elapsed);

        let hip = Pos2::new(rect.min.x + frame.hip.0, rect.min.y + frame.hip.1);
        let knee = Pos2::new(rect.min.x + frame.knee.0, rect.min.y + frame.knee.1);
        let stroke = Stroke::new(STROKE_WIDTH, DarkTheme::OVERLAY);

        painter.circle_stroke(hip, MARKER_RADIUS, stroke);
        painter.circle_stroke(knee, MARKER_RADIUS, stroke);
        painter.line_segment([hip, knee], stroke);

        painter.text(
            Pos2::new(rect.min.x + 16.0, rect.min.y + 24.0),
            Align2::LEFT_CENTER,
            format!("Hip Angle: {:.1}°", frame.hip_angle_deg),
            FontId::monospace(16.0),
            DarkTheme::OVERLAY,
        );

        // Keep the animation moving
        ui.ctx().request_repaint();
    }

    fn show_estimator(&mut self, ui: &mut Ui) {
        egui::Frame::new()
            .stroke(Stroke::new(1.0, DarkTheme::BORDER))
            .inner_margin(16.0)
            .corner_radius(6.0)
            .show(ui, |ui| {
                ui.label(RichText::new("Virtual CdA Estimator").size(16.0).strong());
                ui.add_space(12.0);

                Self::numeric_field(
                    ui,
                    "Avg Power (Watts)",
                    &mut self.power_input,
                    &mut self.inputs.power_watts,
                );
                Self::numeric_field(
                    ui,
                    "Speed (km/h)",
                    &mut self.speed_input,
                    &mut self.inputs.speed_kmh,
                );
                Self::numeric_field(ui, "Crr", &mut self.crr_input, &mut self.inputs.crr);
                Self::numeric_field(
                    ui,
                    "Air Density (kg/m³)",
                    &mut self.air_density_input,
                    &mut self.inputs.air_density_kg_m3,
                );

                ui.add_space(16.0);

                egui::Frame::new()
                    .fill(DarkTheme::BACKGROUND)
                    .inner_margin(16.0)
                    .corner_radius(6.0)
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(
                                RichText::new("Estimated CdA")
                                    .size(13.0)
                                    .color(DarkTheme::TEXT_MUTED),
                            );

                            let (text, color) = match &self.result {
                                None => ("0.000".to_string(), DarkTheme::ACCENT),
                                Some(result @ Ok(_)) => (format_cda(result), DarkTheme::ACCENT),
                                Some(result @ Err(_)) => (format_cda(result), DarkTheme::ERROR),
                            };
                            ui.label(RichText::new(text).size(36.0).monospace().color(color));
                            ui.label(
                                RichText::new("m²").size(11.0).color(DarkTheme::TEXT_MUTED),
                            );

                            ui.add_space(12.0);
                            if ui.button(RichText::new("Calculate").size(15.0)).clicked() {
                                self.calculate();
                            }
                        });
                    });

                ui.add_space(12.0);
                ui.label(
                    RichText::new(
                        "This simple model assumes 0% gradient and 0 wind speed. For \
                         accurate field testing, conduct \"Chung Method\" loops using a \
                         dedicated power meter and speed sensor data.",
                    )
                    .size(11.0)
                    .color(DarkTheme::TEXT_MUTED),
                );
            });
    }

    fn numeric_field(ui: &mut Ui, label: &str, buffer: &mut String, value: &mut f64) {
        ui.label(
            RichText::new(label)
                .size(12.0)
                .color(DarkTheme::TEXT_SECONDARY),
        );

        let response = ui.add(egui::TextEdit::singleline(buffer).desired_width(140.0));
        if response.changed() {
            if let Ok(parsed) = buffer.parse::<f64>() {
                *value = parsed;
            }
        }
        ui.add_space(8.0);
    }

    /// Run the estimator on the current inputs.
    pub fn calculate(&mut self) {
        let result = estimate_cda(&self.inputs);
        tracing::debug!("CdA estimate for {:?}: {:?}", self.inputs, result);
        self.result = Some(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_updates_result() {
        let mut screen = AeroScreen::new();
        screen.calculate();

        let result = screen.result.expect("result set after calculate");
        assert!((result.unwrap() - 0.315).abs() < 0.001);
    }

    #[test]
    fn test_defaults_match_estimator_defaults() {
        let screen = AeroScreen::new();
        assert_eq!(*screen.inputs(), CdaInputs::default());
    }
}
