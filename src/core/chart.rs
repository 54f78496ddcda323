//! Static SVG rendering of a [`Plot`], for snapshots of the canvas.

use std::fmt::Display;

use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;

use crate::core::figure::{Plot, Rgb, SeriesStyle};
use crate::core::window::AxisWindow;

/// 5.5 x 4.5 inches at 100 dpi.
pub const DEFAULT_SVG_SIZE: (u32, u32) = (550, 450);

const LINE_WIDTH: u32 = 2;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Chart size must be non-zero, got {width}x{height}.")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("Could not draw chart: {0}")]
    Draw(String),
}

fn draw_err(err: impl Display) -> ChartError {
    ChartError::Draw(err.to_string())
}

fn to_rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

/// Renders `plot` to an SVG document. `marker` is the animated marker's
/// current position; it is ignored for line plots.
pub fn render_svg(
    plot: &Plot,
    marker: Option<(f64, f64)>,
    (width, height): (u32, u32),
) -> Result<String, ChartError> {
    if width == 0 || height == 0 {
        return Err(ChartError::EmptyCanvas { width, height });
    }

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;
        draw_plot(&root, plot, marker)?;
        root.present().map_err(draw_err)?;
    }
    Ok(svg)
}

fn draw_plot<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    plot: &Plot,
    marker: Option<(f64, f64)>,
) -> Result<(), ChartError> {
    let window = plot.figure().map_or(AxisWindow::UNIT, |figure| figure.window);

    let mut builder = ChartBuilder::on(root);
    builder
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(56);
    if let Some(title) = plot.title() {
        builder.caption(title, ("sans-serif", 18).into_font());
    }
    let mut chart = builder
        .build_cartesian_2d(window.x_min..window.x_max, window.y_min..window.y_max)
        .map_err(draw_err)?;

    let mut mesh = chart.configure_mesh();
    if let Some(figure) = plot.figure() {
        mesh.x_desc(figure.x_label).y_desc(figure.y_label);
    }
    if !plot.has_grid() {
        mesh.disable_mesh();
    }
    mesh.draw().map_err(draw_err)?;

    let Some(figure) = plot.figure() else {
        return Ok(());
    };
    match figure.style {
        SeriesStyle::Line { color } => {
            let points = figure
                .series
                .points()
                .iter()
                .copied()
                .filter(|(x, y)| x.is_finite() && y.is_finite());
            chart
                .draw_series(LineSeries::new(
                    points,
                    to_rgb(color).stroke_width(LINE_WIDTH),
                ))
                .map_err(draw_err)?;
        }
        SeriesStyle::Marker { color, radius_px } => {
            if let Some(point) = marker.and_then(|point| window.clamp_point(point)) {
                chart
                    .draw_series(std::iter::once(Circle::new(
                        point,
                        radius_px.round() as i32,
                        to_rgb(color).filled(),
                    )))
                    .map_err(draw_err)?;
            }
        }
    }
    Ok(())
}
