//! Superstar Scout Main Application
//! Main window with the ranking summary panel and two views of the same
//! scatter: the interactive plot and the static plotters figure.

use crate::charts::{format_money, StaticChart};
use crate::data::{top_n, PlayerRecord};
use crate::gui::ScatterViewer;
use crate::scouting::ScoutingReport;
use egui::{ColorImage, RichText, ScrollArea, SidePanel, TextureHandle, TextureOptions};
use std::sync::Arc;

/// Which view fills the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ViewTab {
    #[default]
    Interactive,
    Static,
}

/// Main application window.
pub struct ScoutApp {
    source: String,
    records: Arc<[PlayerRecord]>,
    top: usize,
    viewer: ScatterViewer,
    static_chart: TextureHandle,
    tab: ViewTab,
}

impl ScoutApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        report: ScoutingReport,
        chart: &StaticChart,
        top: usize,
    ) -> Self {
        let records: Arc<[PlayerRecord]> = report.records.into();
        let static_chart = cc.egui_ctx.load_texture(
            "static_scatter",
            chart_image(chart),
            TextureOptions::LINEAR,
        );
        Self {
            source: report.source.display().to_string(),
            viewer: ScatterViewer::new(Arc::clone(&records)),
            records,
            top,
            static_chart,
            tab: ViewTab::default(),
        }
    }

    fn draw_summary(&self, ui: &mut egui::Ui) {
        ui.heading("Soccer 2019");
        ui.add_space(6.0);
        ui.label(RichText::new(format!("Source: {}", self.source)).size(12.0));
        ui.label(RichText::new(format!("Players: {}", self.records.len())).size(12.0));
        ui.add_space(10.0);

        ui.label(RichText::new("Top by Value - Wage").strong());
        ui.add_space(4.0);

        egui::Grid::new("top_players")
            .striped(true)
            .min_col_width(40.0)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label(RichText::new("#").strong().size(11.0));
                ui.label(RichText::new("Name").strong().size(11.0));
                ui.label(RichText::new("Wage").strong().size(11.0));
                ui.label(RichText::new("Value").strong().size(11.0));
                ui.label(RichText::new("Diff").strong().size(11.0));
                ui.end_row();

                for player in top_n(&self.records, self.top) {
                    ui.label(RichText::new(player.rank.to_string()).size(11.0));
                    ui.label(RichText::new(&player.name).size(11.0));
                    ui.label(RichText::new(format_money(player.wage)).size(11.0));
                    ui.label(RichText::new(format_money(player.value)).size(11.0));
                    ui.label(RichText::new(format_money(player.difference)).size(11.0));
                    ui.end_row();
                }
            });
    }
}

impl eframe::App for ScoutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        SidePanel::left("summary_panel")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    self.draw_summary(ui);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, ViewTab::Interactive, "Interactive");
                ui.selectable_value(&mut self.tab, ViewTab::Static, "Static");
            });
            ui.separator();

            match self.tab {
                ViewTab::Interactive => self.viewer.show(ui),
                ViewTab::Static => {
                    ScrollArea::both().show(ui, |ui| {
                        ui.add(egui::Image::new(&self.static_chart).shrink_to_fit());
                    });
                }
            }
        });
    }
}

/// Wrap the rendered RGB buffer as an egui image.
fn chart_image(chart: &StaticChart) -> ColorImage {
    ColorImage::from_rgb([chart.width as usize, chart.height as usize], &chart.pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_image_keeps_size_and_pixels() {
        let chart = StaticChart {
            width: 2,
            height: 1,
            pixels: vec![76, 114, 176, 255, 255, 255],
            markers: vec![(0, 0)],
        };

        let image = chart_image(&chart);

        assert_eq!(image.size, [2, 1]);
        assert_eq!(image.pixels[0], egui::Color32::from_rgb(76, 114, 176));
        assert_eq!(image.pixels[1], egui::Color32::WHITE);
    }
}
