//! Weight progression chart widget.

use egui::{Response, Ui};
use egui_plot::{Line, Plot, PlotPoints};

use crate::data::WeightRecord;
use crate::ui::theme::DarkTheme;

/// Area chart of body weight over time.
pub struct WeightChart<'a> {
    /// The records to display, oldest first
    records: &'a [WeightRecord],
    /// Chart height
    height: f32,
}

impl<'a> WeightChart<'a> {
    /// Create a new weight chart.
    pub fn new(records: &'a [WeightRecord]) -> Self {
        Self {
            records,
            height: 260.0,
        }
    }

    /// Set chart height.
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Show the chart in the UI.
    pub fn show(self, ui: &mut Ui) -> Response {
        if self.records.is_empty() {
            return ui.label("No weight records yet.");
        }

        let coords: Vec<[f64; 2]> = self
            .records
            .iter()
            .enumerate()
            .map(|(i, record)| [i as f64, record.weight_kg as f64])
            .collect();

        let min_weight = coords.iter().map(|p| p[1]).fold(f64::INFINITY, f64::min);
        let max_weight = coords
            .iter()
            .map(|p| p[1])
            .fold(f64::NEG_INFINITY, f64::max);

        let date_labels: Vec<String> = self
            .records
            .iter()
            .map(|record| record.date.format("%Y-%m-%d").to_string())
            .collect();
        let axis_labels = date_labels.clone();

        let line = Line::new("Weight", PlotPoints::new(coords))
            .color(DarkTheme::ACCENT)
            .width(2.0)
            .fill((min_weight - 1.0) as f32);

        Plot::new("weight_chart")
            .height(self.height)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .include_y(min_weight - 1.0)
            .include_y(max_weight + 1.0)
            .y_axis_label("Weight (kg)")
            .x_axis_formatter(move |mark, _range| {
                let index = mark.value.round() as usize;
                if (mark.value - index as f64).abs() < 1e-6 {
                    axis_labels.get(index).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .label_formatter(move |name, value| {
                let index = value.x.round().max(0.0) as usize;
                let date = date_labels.get(index).cloned().unwrap_or_default();
                if name.is_empty() {
                    format!("{}: {:.1} kg", date, value.y)
                } else {
                    format!("{}\n{}: {:.1} kg", name, date, value.y)
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.line(line);
            })
            .response
    }
}
