//! Static Scatter Renderer
//! Draws the wage vs. value scatter with plotters, into memory or to a PNG.
//!
//! Layout follows the seaborn "darkgrid" look:
//! 1. Title centered above the plot
//! 2. Grey plot area with white grid lines
//! 3. Money-formatted tick labels, "Wage" on x and "Value" on y

use crate::charts::format_money;
use crate::data::PlayerRecord;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;
use thiserror::Error;

// Colors
const PLOT_BG: RGBColor = RGBColor(234, 234, 242);
const MARKER: RGBColor = RGBColor(76, 114, 176);

/// Extra room added past the largest point on each axis.
const AXIS_HEADROOM: f64 = 0.05;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to draw chart: {0}")]
    Draw(String),
}

fn draw_err<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> RenderError {
    RenderError::Draw(err.to_string())
}

/// Size and title of the static figure.
#[derive(Debug, Clone)]
pub struct ScatterStyle {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub marker_size: u32,
}

impl Default for ScatterStyle {
    fn default() -> Self {
        Self {
            title: "Soccer 2019".to_string(),
            width: 700,
            height: 700,
            marker_size: 4,
        }
    }
}

/// A rendered static chart held in memory as packed RGB pixels.
#[derive(Debug, Clone)]
pub struct StaticChart {
    pub width: u32,
    pub height: u32,
    /// Row-major RGB, 3 bytes per pixel
    pub pixels: Vec<u8>,
    /// Pixel centre of each plotted player, in record order
    pub markers: Vec<(i32, i32)>,
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render wage (x) against value (y) for every record into an RGB buffer.
    pub fn render_image(
        records: &[PlayerRecord],
        style: &ScatterStyle,
    ) -> Result<StaticChart, RenderError> {
        let mut pixels = vec![0u8; (style.width * style.height * 3) as usize];

        let markers = {
            let root = BitMapBackend::with_buffer(&mut pixels, (style.width, style.height))
                .into_drawing_area();
            let markers = Self::draw_scatter(&root, records, style)?;
            root.present().map_err(draw_err)?;
            markers
        };

        Ok(StaticChart {
            width: style.width,
            height: style.height,
            pixels,
            markers,
        })
    }

    /// Render the same chart straight to a PNG file.
    pub fn render_png(
        records: &[PlayerRecord],
        path: &Path,
        style: &ScatterStyle,
    ) -> Result<(), RenderError> {
        let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
        let markers = Self::draw_scatter(&root, records, style)?;
        root.present().map_err(draw_err)?;

        tracing::info!(
            path = %path.display(),
            points = markers.len(),
            "wrote static scatter"
        );
        Ok(())
    }

    /// Draw the scatter onto any backend and return each marker's pixel centre.
    fn draw_scatter<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        records: &[PlayerRecord],
        style: &ScatterStyle,
    ) -> Result<Vec<(i32, i32)>, RenderError> {
        root.fill(&WHITE).map_err(draw_err)?;

        let plotted: Vec<(f64, f64)> = records
            .iter()
            .map(|r| (r.wage, r.value))
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .collect();

        let x_range = axis_range(plotted.iter().map(|p| p.0));
        let y_range = axis_range(plotted.iter().map(|p| p.1));

        let mut chart = ChartBuilder::on(root)
            .caption(&style.title, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(80)
            .build_cartesian_2d(x_range, y_range)
            .map_err(draw_err)?;

        chart.plotting_area().fill(&PLOT_BG).map_err(draw_err)?;

        chart
            .configure_mesh()
            .bold_line_style(WHITE)
            .light_line_style(WHITE.mix(0.6))
            .x_desc("Wage")
            .y_desc("Value")
            .x_label_formatter(&|x| format_money(*x))
            .y_label_formatter(&|y| format_money(*y))
            .draw()
            .map_err(draw_err)?;

        chart
            .draw_series(
                plotted
                    .iter()
                    .map(|&point| Circle::new(point, style.marker_size, MARKER.filled())),
            )
            .map_err(draw_err)?;

        Ok(plotted.iter().map(|point| chart.backend_coord(point)).collect())
    }
}

/// Axis interval covering zero and every value, with headroom.
/// Never returns an empty interval.
pub fn axis_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if max <= min {
        return min..min + 1.0;
    }

    let pad = (max - min) * AXIS_HEADROOM;
    let lower = if min < 0.0 { min - pad } else { min };
    lower..max + pad
}

#[cfg(test)]
mod tests {
    use super::*;

    impl StaticChart {
        fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
            if x >= self.width || y >= self.height {
                return None;
            }
            let offset = ((y * self.width + x) * 3) as usize;
            self.pixels
                .get(offset..offset + 3)
                .map(|rgb| [rgb[0], rgb[1], rgb[2]])
        }
    }

    fn record(rank: usize, name: &str, wage: f64, value: f64) -> PlayerRecord {
        PlayerRecord {
            rank,
            name: name.to_string(),
            wage,
            value,
            difference: value - wage,
        }
    }

    #[test]
    fn test_render_image_draws_markers() {
        let records = vec![
            record(0, "A", 1_000.0, 5_000.0),
            record(1, "B", 10_000_000.0, 1_000_000.0),
            record(2, "C", 5_000_000.0, 8_000_000.0),
        ];
        let style = ScatterStyle {
            width: 400,
            height: 300,
            ..ScatterStyle::default()
        };

        let chart = StaticChartRenderer::render_image(&records, &style).unwrap();

        assert_eq!((chart.width, chart.height), (400, 300));
        assert_eq!(chart.pixels.len(), 400 * 300 * 3);
        assert_eq!(chart.markers.len(), 3);

        let (x, y) = chart.markers[2];
        let marker = [MARKER.0, MARKER.1, MARKER.2];
        assert_eq!(chart.pixel(x as u32, y as u32), Some(marker));

        assert_ne!(chart.pixel(x as u32, y as u32), Some([PLOT_BG.0, PLOT_BG.1, PLOT_BG.2]));

        // Outer margin stays white.
        assert_eq!(chart.pixel(0, 0), Some([255, 255, 255]));
    }

    #[test]
    fn test_render_image_skips_non_finite_points() {
        let records = vec![
            record(0, "A", 1_000.0, 5_000.0),
            record(1, "nan", f64::NAN, 1_000.0),
        ];

        let chart = StaticChartRenderer::render_image(&records, &ScatterStyle::default()).unwrap();
        assert_eq!(chart.markers.len(), 1);
    }

    #[test]
    fn test_render_png_writes_file() {
        let path = std::env::temp_dir().join(format!(
            "superstar_scout_render_{}.png",
            std::process::id()
        ));
        let records = vec![record(0, "A", 1_000.0, 5_000.0)];

        StaticChartRenderer::render_png(&records, &path, &ScatterStyle::default()).unwrap();

        let written = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        std::fs::remove_file(&path).ok();
        assert!(written > 0);
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let chart = StaticChart {
            width: 2,
            height: 1,
            pixels: vec![1, 2, 3, 4, 5, 6],
            markers: Vec::new(),
        };
        assert_eq!(chart.pixel(1, 0), Some([4, 5, 6]));
        assert_eq!(chart.pixel(2, 0), None);
        assert_eq!(chart.pixel(0, 1), None);
    }

    #[test]
    fn test_axis_range_starts_at_zero() {
        let range = axis_range([100.0, 200.0].into_iter());
        assert_eq!(range.start, 0.0);
        assert!((range.end - 210.0).abs() < 1e-9);
    }

    #[test]
    fn test_axis_range_empty_and_flat() {
        assert_eq!(axis_range(std::iter::empty()), 0.0..1.0);
        assert_eq!(axis_range([0.0, 0.0].into_iter()), 0.0..1.0);
    }

    #[test]
    fn test_axis_range_negative() {
        let range = axis_range([-10.0, 10.0].into_iter());
        assert!(range.start < -10.0);
        assert!(range.end > 10.0);
    }
}
