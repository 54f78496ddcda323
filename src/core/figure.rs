use log::debug;

use crate::core::dispatch::Outcome;
use crate::core::experiment::ExperimentKind;
use crate::core::series::SampleSeries;
use crate::core::window::{AxisWindow, auto_window, projectile_window};

pub const INVALID_INPUT_TITLE: &str = "Invalid input. Please enter valid numbers.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const MARKER_RED: Rgb = Rgb(255, 0, 0);
pub const TAB_ORANGE: Rgb = Rgb(255, 127, 14);
pub const TAB_GREEN: Rgb = Rgb(44, 160, 44);
pub const TAB_PURPLE: Rgb = Rgb(148, 103, 189);

pub const MARKER_RADIUS_PX: f32 = 6.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SeriesStyle {
    /// Whole series drawn as a polyline.
    Line { color: Rgb },
    /// Only one sample at a time, advanced by a marker animation.
    Marker { color: Rgb, radius_px: f32 },
}

/// Everything the canvas needs to draw one experiment's result.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub kind: ExperimentKind,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub series: SampleSeries,
    pub style: SeriesStyle,
    pub window: AxisWindow,
    pub summary: String,
}

impl Figure {
    pub fn is_animated(&self) -> bool {
        matches!(self.style, SeriesStyle::Marker { .. })
    }
}

/// Contents of the plot canvas.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Plot {
    /// Nothing simulated yet for the selected experiment.
    #[default]
    Empty,
    Invalid,
    Chart(Figure),
}

impl Plot {
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Plot::Empty => None,
            Plot::Invalid => Some(INVALID_INPUT_TITLE),
            Plot::Chart(figure) => Some(figure.title),
        }
    }

    pub fn figure(&self) -> Option<&Figure> {
        match self {
            Plot::Chart(figure) => Some(figure),
            _ => None,
        }
    }

    pub fn has_grid(&self) -> bool {
        matches!(self, Plot::Chart(_))
    }
}

fn axis_text(kind: ExperimentKind) -> (&'static str, &'static str, &'static str) {
    match kind {
        ExperimentKind::ProjectileMotion => ("Projectile Motion", "Distance (m)", "Height (m)"),
        ExperimentKind::FreeFall => ("Free Fall", "Time (s)", "Height (m)"),
        ExperimentKind::LinearMotion => ("Linear Motion", "Time (s)", "Distance (m)"),
        ExperimentKind::Cooling => ("Newton's Law of Cooling", "Time (min)", "Temperature (C)"),
    }
}

fn series_style(kind: ExperimentKind) -> SeriesStyle {
    match kind {
        ExperimentKind::ProjectileMotion => SeriesStyle::Marker {
            color: MARKER_RED,
            radius_px: MARKER_RADIUS_PX,
        },
        ExperimentKind::FreeFall => SeriesStyle::Line { color: TAB_ORANGE },
        ExperimentKind::LinearMotion => SeriesStyle::Line { color: TAB_GREEN },
        ExperimentKind::Cooling => SeriesStyle::Line { color: TAB_PURPLE },
    }
}

/// Turns a model outcome into a drawable figure.
pub fn render(outcome: Outcome) -> Figure {
    let kind = outcome.kind();
    let summary = outcome.summary();
    let series = outcome.into_series();
    let window = match kind {
        ExperimentKind::ProjectileMotion => projectile_window(&series),
        _ => auto_window(&series),
    };
    debug!("{kind} axis window: {window:?}");

    let (title, x_label, y_label) = axis_text(kind);
    Figure {
        kind,
        title,
        x_label,
        y_label,
        series,
        style: series_style(kind),
        window,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::{INVALID_INPUT_TITLE, Plot, SeriesStyle, TAB_PURPLE, render};
    use crate::core::dispatch::Outcome;
    use crate::core::experiment::ExperimentKind;
    use crate::core::models::{
        COOLING_DURATION, CoolingInputs, LaunchInputs, cooling, free_fall, projectile_motion,
    };

    #[test]
    fn projectile_figure_uses_marker_and_headroom_window() {
        let figure = render(Outcome::Projectile(projectile_motion(LaunchInputs {
            speed_mps: 20.0,
            angle_deg: 45.0,
        })));

        assert_eq!(figure.title, "Projectile Motion");
        assert_eq!(figure.x_label, "Distance (m)");
        assert_eq!(figure.y_label, "Height (m)");
        assert!(figure.is_animated());
        assert_eq!(figure.window.x_min, 0.0);
        let (_, x_max, _, y_max) = figure.series.bounds().expect("finite path");
        assert!((figure.window.x_max - 1.1 * x_max).abs() < 1e-9);
        assert!((figure.window.y_max - 1.1 * y_max).abs() < 1e-9);
    }

    #[test]
    fn static_figures_carry_their_labels() {
        let fall = render(Outcome::FreeFall(free_fall(10.0)));
        assert_eq!(
            (fall.title, fall.x_label, fall.y_label),
            ("Free Fall", "Time (s)", "Height (m)")
        );
        assert!(!fall.is_animated());
        assert_eq!(fall.window.clamp_point((0.0, 10.0)), Some((0.0, 10.0)));

        let cool = render(Outcome::Cooling(cooling(
            CoolingInputs {
                initial_temp: 80.0,
                ambient_temp: 20.0,
                coefficient: 0.2,
            },
            COOLING_DURATION,
        )));
        assert_eq!(cool.kind, ExperimentKind::Cooling);
        assert_eq!(cool.title, "Newton's Law of Cooling");
        assert_eq!(cool.x_label, "Time (min)");
        assert_eq!(cool.style, SeriesStyle::Line { color: TAB_PURPLE });
    }

    #[test]
    fn plot_titles_and_grid() {
        assert_eq!(Plot::Empty.title(), None);
        assert!(!Plot::Empty.has_grid());
        assert_eq!(Plot::Invalid.title(), Some(INVALID_INPUT_TITLE));
        assert!(!Plot::Invalid.has_grid());

        let chart = Plot::Chart(render(Outcome::FreeFall(free_fall(1.0))));
        assert_eq!(chart.title(), Some("Free Fall"));
        assert!(chart.has_grid());
    }
}
