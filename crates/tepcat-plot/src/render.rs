//! Chart rendering with plotters. Each `draw_*` function paints one panel
//! onto any drawing area; the `render_*` functions pick a backend and write
//! a figure to disk.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::{PlotError, Result};
use crate::stats::{Histogram, Summary};

const OVERVIEW_SIZE: (u32, u32) = (1200, 1500);
const HISTOGRAM_SIZE: (u32, u32) = (1600, 900);
const PERIOD_LABEL: &str = "Orbital period (days)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageKind {
    #[default]
    Png,
    Svg,
}

impl ImageKind {
    pub fn extension(self) -> &'static str {
        match self {
            ImageKind::Png => "png",
            ImageKind::Svg => "svg",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum PanelStyle {
    Line(RGBColor),
    Points(RGBColor),
}

fn render_err<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Render(err.to_string())
}

fn padded_range(values: &[f64]) -> (f64, f64) {
    let (lo, hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if lo == hi {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad, hi + pad)
}

/// Values against their position in `values`.
pub fn draw_series_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    values: &[f64],
    style: PanelStyle,
    title: &str,
) -> Result<()> {
    let (y_min, y_max) = padded_range(values);
    let x_max = values.len().max(1) as f64;

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(35)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..x_max, y_min..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Index")
        .y_desc(PERIOD_LABEL)
        .draw()
        .map_err(render_err)?;

    let points = values.iter().enumerate().map(|(i, v)| (i as f64, *v));
    match style {
        PanelStyle::Line(color) => {
            chart
                .draw_series(LineSeries::new(points, &color))
                .map_err(render_err)?;
        }
        PanelStyle::Points(color) => {
            chart
                .draw_series(points.map(|coord| Circle::new(coord, 1, color.filled())))
                .map_err(render_err)?;
        }
    }
    Ok(())
}

/// Bars per bin with a `count (pct%)` label above every non-empty bin.
pub fn draw_histogram_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    histogram: &Histogram,
    summary: &Summary,
) -> Result<()> {
    let (Some(first), Some(last)) = (histogram.bins.first(), histogram.bins.last()) else {
        return Err(PlotError::EmptyDataset);
    };
    let y_max = (histogram.max_count().max(1) as f64) * 1.2;
    let stdev = summary
        .stdev
        .map(|s| format!("{s:.2}"))
        .unwrap_or_else(|| "n/a".to_string());

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!(
                "Histogram of orbital periods of {} exoplanets (μ = {:.2}, σ = {})",
                histogram.total, summary.mean, stdev
            ),
            ("sans-serif", 26),
        )
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(first.lower..last.upper, 0f64..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(PERIOD_LABEL)
        .y_desc("n_samples")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(histogram.bins.iter().map(|bin| {
            Rectangle::new(
                [(bin.lower, 0.0), (bin.upper, bin.count as f64)],
                GREEN.mix(0.75).filled(),
            )
        }))
        .map_err(render_err)?;

    let label_style = ("sans-serif", 12)
        .into_font()
        .color(&BLUE)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart
        .draw_series(histogram.bins.iter().filter(|bin| bin.count > 0).map(|bin| {
            Text::new(
                format!("{} ({:.1}%)", bin.count, histogram.percentage(bin)),
                (bin.center(), bin.count as f64),
                label_style.clone(),
            )
        }))
        .map_err(render_err)?;

    Ok(())
}

fn draw_overview<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    periods: &[f64],
    shuffled: &[f64],
    sorted: &[f64],
) -> Result<()> {
    root.fill(&WHITE).map_err(render_err)?;
    let panels = root.split_evenly((3, 1));
    draw_series_panel(
        &panels[0],
        periods,
        PanelStyle::Line(BLUE),
        "Orbital periods in order of dataset",
    )?;
    draw_series_panel(
        &panels[1],
        shuffled,
        PanelStyle::Line(GREEN),
        "Orbital periods in another random order",
    )?;
    draw_series_panel(
        &panels[2],
        sorted,
        PanelStyle::Points(RED),
        "Sorted orbital periods",
    )?;
    root.present().map_err(render_err)
}

fn draw_histogram<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    histogram: &Histogram,
    summary: &Summary,
) -> Result<()> {
    root.fill(&WHITE).map_err(render_err)?;
    draw_histogram_panel(&root, histogram, summary)?;
    root.present().map_err(render_err)
}

/// Sequential, shuffled and sorted panels stacked in one figure.
pub fn render_overview(
    path: &Path,
    kind: ImageKind,
    periods: &[f64],
    shuffled: &[f64],
    sorted: &[f64],
) -> Result<()> {
    match kind {
        ImageKind::Png => draw_overview(
            BitMapBackend::new(path, OVERVIEW_SIZE).into_drawing_area(),
            periods,
            shuffled,
            sorted,
        ),
        ImageKind::Svg => draw_overview(
            SVGBackend::new(path, OVERVIEW_SIZE).into_drawing_area(),
            periods,
            shuffled,
            sorted,
        ),
    }
}

pub fn render_histogram(
    path: &Path,
    kind: ImageKind,
    histogram: &Histogram,
    summary: &Summary,
) -> Result<()> {
    match kind {
        ImageKind::Png => draw_histogram(
            BitMapBackend::new(path, HISTOGRAM_SIZE).into_drawing_area(),
            histogram,
            summary,
        ),
        ImageKind::Svg => draw_histogram(
            SVGBackend::new(path, HISTOGRAM_SIZE).into_drawing_area(),
            histogram,
            summary,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_pads_and_handles_degenerate_series() {
        assert_eq!(padded_range(&[]), (0.0, 1.0));
        assert_eq!(padded_range(&[2.0, 2.0]), (1.0, 3.0));
        let (lo, hi) = padded_range(&[0.0, 10.0]);
        assert!((lo + 0.5).abs() < 1e-12);
        assert!((hi - 10.5).abs() < 1e-12);
    }

    #[test]
    fn extension_follows_kind() {
        assert_eq!(ImageKind::Png.extension(), "png");
        assert_eq!(ImageKind::Svg.extension(), "svg");
    }
}
