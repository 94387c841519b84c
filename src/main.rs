//! Superstar Scout - Player Wage & Value Scouting
//!
//! Loads a player CSV, turns "€1.5M"-style wages and values into numbers,
//! ranks players by value minus wage and plots wage against value, once as
//! a static figure and once as an interactive plot, both shown in one window.
//! Nothing is written to disk unless `--output` is given.

mod charts;
mod cli;
mod data;
mod gui;
mod logging;
mod scouting;

use anyhow::{anyhow, Context};
use charts::{format_money, ScatterStyle, StaticChartRenderer};
use clap::Parser;
use cli::Args;
use data::top_n;
use eframe::egui;
use gui::ScoutApp;
use scouting::ScoutingReport;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::configure_logging(args.verbose);

    let report = ScoutingReport::from_csv(&args.input)
        .with_context(|| format!("Failed to prepare players from {}", args.input.display()))?;
    tracing::info!(players = report.row_count(), "scouting report ready");

    for player in top_n(&report.records, args.top) {
        tracing::info!(
            rank = player.rank,
            name = %player.name,
            wage = %format_money(player.wage),
            value = %format_money(player.value),
            difference = %format_money(player.difference),
            "top player"
        );
    }

    let style = ScatterStyle {
        width: args.width,
        height: args.height,
        ..ScatterStyle::default()
    };
    let chart = StaticChartRenderer::render_image(&report.records, &style)
        .context("Failed to render static scatter")?;
    tracing::debug!(points = chart.markers.len(), "rendered static scatter in memory");

    if let Some(output) = &args.output {
        StaticChartRenderer::render_png(&report.records, output, &style)
            .with_context(|| format!("Failed to write {}", output.display()))?;

        if args.open {
            open::that(output).with_context(|| format!("Failed to open {}", output.display()))?;
        }
    }

    if args.no_viewer {
        return Ok(());
    }

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title(style.title.as_str()),
        ..Default::default()
    };

    let top = args.top;
    eframe::run_native(
        "Superstar Scout",
        options,
        Box::new(move |cc| Ok(Box::new(ScoutApp::new(cc, report, &chart, top)))),
    )
    .map_err(|e| anyhow!("Interactive viewer failed: {}", e))
}
