use experiment_visualizer::Plot;
use experiment_visualizer::core::figure::{Rgb, SeriesStyle};
use experiment_visualizer::core::window::AxisWindow;
use macroquad::prelude::*;

use crate::constants::{
    GRID_COLOR, HEADER_COLOR, LABEL_COLOR, MARKER_OUTLINE_COLOR, X_GRID_LINES, Y_GRID_LINES,
};

/// Screen-space rectangle of the plot canvas.
#[derive(Clone, Copy)]
pub(crate) struct PlotArea {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
}

impl PlotArea {
    fn width(&self) -> f32 {
        (self.right - self.left).max(1.0)
    }

    fn height(&self) -> f32 {
        (self.bottom - self.top).max(1.0)
    }
}

pub(crate) fn world_to_screen(world: (f64, f64), window: &AxisWindow, area: PlotArea) -> Vec2 {
    let (u, v) = window.normalize(world);
    vec2(
        area.left + (u as f32 * area.width()),
        area.bottom - (v as f32 * area.height()),
    )
}

fn to_color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.0, rgb.1, rgb.2, 255)
}

fn format_axis_value(value: f64, axis_extent: f64) -> String {
    if axis_extent >= 1000.0 {
        format!("{value:.0}")
    } else if axis_extent >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

fn draw_grid(area: PlotArea, color: Color) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * area.width();
        draw_line(x, area.top, x, area.bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * area.height();
        draw_line(area.left, y, area.right, y, 1.0, color);
    }
}

fn draw_axis_tick_labels(area: PlotArea, window: &AxisWindow, font: Option<&Font>) {
    let tick_font_size: u16 = 16;
    let x_extent = window.x_min.abs().max(window.x_max.abs());
    let y_extent = window.y_min.abs().max(window.y_max.abs());

    for i in 0..=X_GRID_LINES {
        let t = i as f64 / X_GRID_LINES as f64;
        let x = area.left + t as f32 * area.width();
        let label = format_axis_value(window.x_min + t * window.width(), x_extent);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            area.bottom + 22.0,
            tick_font_size,
            LABEL_COLOR,
            font,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f64 / Y_GRID_LINES as f64;
        let y = area.bottom - t as f32 * area.height();
        let label = format_axis_value(window.y_min + t * window.height(), y_extent);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (area.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            LABEL_COLOR,
            font,
        );
    }
}

fn draw_axis_titles(area: PlotArea, x_label: &str, y_label: &str, font: Option<&Font>) {
    let x_size = measure_text(x_label, font, 18, 1.0);
    draw_ui_text(
        x_label,
        area.left + ((area.width() - x_size.width) * 0.5),
        area.bottom + 50.0,
        18,
        LABEL_COLOR,
        font,
    );
    draw_ui_text(y_label, area.left + 10.0, area.top - 8.0, 18, LABEL_COLOR, font);
}

fn draw_plot_title(area: PlotArea, title: &str, font: Option<&Font>) {
    let size = measure_text(title, font, 24, 1.0);
    draw_ui_text(
        title,
        area.left + ((area.width() - size.width) * 0.5),
        area.top - 36.0,
        24,
        HEADER_COLOR,
        font,
    );
}

fn draw_path(
    points: &[(f64, f64)],
    window: &AxisWindow,
    area: PlotArea,
    thickness: f32,
    color: Color,
) {
    let mut prev: Option<Vec2> = None;
    for &point in points {
        if !(point.0.is_finite() && point.1.is_finite()) {
            prev = None;
            continue;
        }
        let cur = world_to_screen(point, window, area);
        if let Some(p) = prev {
            draw_line(p.x, p.y, cur.x, cur.y, thickness, color);
        }
        prev = Some(cur);
    }
}

fn draw_marker(point: (f64, f64), window: &AxisWindow, area: PlotArea, radius: f32, color: Color) {
    let Some(point) = window.clamp_point(point) else {
        return;
    };
    let p = world_to_screen(point, window, area);
    draw_circle(p.x, p.y, radius, color);
    draw_circle_lines(p.x, p.y, radius, 1.5, MARKER_OUTLINE_COLOR);
}

/// Draws the canvas: frame, ticks, and for a chart the grid, titles and
/// series. `marker` is the animated marker position, if one is playing.
pub(crate) fn draw_plot(
    plot: &Plot,
    marker: Option<(f64, f64)>,
    area: PlotArea,
    font: Option<&Font>,
) {
    let window = plot.figure().map_or(AxisWindow::UNIT, |figure| figure.window);

    draw_rectangle(area.left, area.top, area.width(), area.height(), WHITE);
    if plot.has_grid() {
        draw_grid(area, GRID_COLOR);
    }
    draw_line(area.left, area.bottom, area.right, area.bottom, 2.0, DARKGRAY);
    draw_line(area.left, area.top, area.left, area.bottom, 2.0, DARKGRAY);
    draw_axis_tick_labels(area, &window, font);

    if let Some(title) = plot.title() {
        draw_plot_title(area, title, font);
    }

    let Some(figure) = plot.figure() else {
        return;
    };
    draw_axis_titles(area, figure.x_label, figure.y_label, font);
    match figure.style {
        SeriesStyle::Line { color } => {
            draw_path(figure.series.points(), &window, area, 2.0, to_color(color));
        }
        SeriesStyle::Marker { color, radius_px } => {
            if let Some(point) = marker {
                draw_marker(point, &window, area, radius_px, to_color(color));
            }
        }
    }
}
