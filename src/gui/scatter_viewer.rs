//! Scatter Viewer Widget
//! Interactive wage vs. value scatter using egui_plot.
//! Hovering a point shows its rank index, exact (wage, value) pair and name.

use crate::charts::format_money;
use crate::data::PlayerRecord;
use egui::Color32;
use egui_plot::{Plot, PlotPoint, PlotPoints, Points};
use std::sync::Arc;

const MARKER_COLOR: Color32 = Color32::from_rgb(76, 114, 176);
const MARKER_RADIUS: f32 = 5.0;
const SERIES_NAME: &str = "Players";

/// Central scatter plot over all ranked players.
pub struct ScatterViewer {
    records: Arc<[PlayerRecord]>,
    /// Largest |wage| and |value|, used to compare distances on both axes
    scale: (f64, f64),
}

impl ScatterViewer {
    pub fn new(records: Arc<[PlayerRecord]>) -> Self {
        let scale = axis_scale(&records);
        Self { records, scale }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        if self.records.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new("No Data").size(20.0));
            });
            return;
        }

        let points: PlotPoints = self.records.iter().map(|r| [r.wage, r.value]).collect();

        let records = Arc::clone(&self.records);
        let scale = self.scale;

        Plot::new("wage_value_scatter")
            .x_axis_label("Wage")
            .y_axis_label("Value")
            .x_axis_formatter(|mark, _range| format_money(mark.value))
            .y_axis_formatter(|mark, _range| format_money(mark.value))
            .label_formatter(move |name, point| {
                if name.is_empty() {
                    return String::new();
                }
                hovered_text(&nearest_records(&records, point, scale))
            })
            .show(ui, |plot_ui| {
                plot_ui.points(
                    Points::new(points)
                        .radius(MARKER_RADIUS)
                        .color(MARKER_COLOR)
                        .name(SERIES_NAME),
                );
            });
    }
}

/// Tooltip body for every player under the pointer, one block each.
pub fn hovered_text(records: &[&PlayerRecord]) -> String {
    records
        .iter()
        .map(|r| hover_text(r))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Tooltip body for a hovered player.
pub fn hover_text(record: &PlayerRecord) -> String {
    format!(
        "index: {}\n(Wage, Value): ({}, {})\nName: {}",
        record.rank, record.wage, record.value, record.name
    )
}

fn axis_scale(records: &[PlayerRecord]) -> (f64, f64) {
    let (x, y) = records.iter().fold((0.0_f64, 0.0_f64), |(x, y), r| {
        (x.max(r.wage.abs()), y.max(r.value.abs()))
    });
    (if x > 0.0 { x } else { 1.0 }, if y > 0.0 { y } else { 1.0 })
}

/// All records at the smallest distance from `point`, in rank order.
/// Distance on each axis is relative to that axis' scale, so players sharing
/// one (wage, value) point are all returned.
pub fn nearest_records<'a>(
    records: &'a [PlayerRecord],
    point: &PlotPoint,
    scale: (f64, f64),
) -> Vec<&'a PlayerRecord> {
    let distance = |r: &PlayerRecord| {
        let dx = (r.wage - point.x) / scale.0;
        let dy = (r.value - point.y) / scale.1;
        dx * dx + dy * dy
    };

    let Some(best) = records
        .iter()
        .map(distance)
        .filter(|d| !d.is_nan())
        .min_by(|a, b| a.total_cmp(b))
    else {
        return Vec::new();
    };

    records.iter().filter(|r| distance(*r) == best).collect()
}
