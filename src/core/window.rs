use crate::core::series::SampleSeries;

pub const PROJECTILE_HEADROOM_RATIO: f64 = 1.1;
pub const AUTO_MARGIN_RATIO: f64 = 0.05;

const FLAT_SPAN_RATIO: f64 = 0.05;
const MIN_FLAT_HALF_SPAN: f64 = 0.5;

/// Data-space rectangle shown on the plot canvas. Always has a positive
/// width and height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisWindow {
    pub const UNIT: AxisWindow = AxisWindow {
        x_min: 0.0,
        x_max: 1.0,
        y_min: 0.0,
        y_max: 1.0,
    };

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Pins a finite point onto the window edges. Samples that round a hair
    /// past an edge, like a landing at `y = -1e-14`, stay on screen.
    pub fn clamp_point(&self, (x, y): (f64, f64)) -> Option<(f64, f64)> {
        if !(x.is_finite() && y.is_finite()) {
            return None;
        }
        Some((x.clamp(self.x_min, self.x_max), y.clamp(self.y_min, self.y_max)))
    }

    /// Maps a data point to `[0, 1]²` with y growing upwards.
    pub fn normalize(&self, (x, y): (f64, f64)) -> (f64, f64) {
        ((x - self.x_min) / self.width(), (y - self.y_min) / self.height())
    }
}

fn headroom_max(raw_max: f64) -> f64 {
    let max = raw_max * PROJECTILE_HEADROOM_RATIO;
    if max.is_finite() && max > 0.0 { max } else { 1.0 }
}

/// Fixed window anchored at the origin, 10% above the largest x and y.
/// A non-positive maximum falls back to a unit span.
pub fn projectile_window(path: &SampleSeries) -> AxisWindow {
    let (raw_max_x, raw_max_y) = path
        .bounds()
        .map_or((0.0, 0.0), |(_, x_max, _, y_max)| (x_max, y_max));

    AxisWindow {
        x_min: 0.0,
        x_max: headroom_max(raw_max_x),
        y_min: 0.0,
        y_max: headroom_max(raw_max_y),
    }
}

fn padded_range(min: f64, max: f64) -> (f64, f64) {
    let span = max - min;
    if span > 0.0 {
        let pad = span * AUTO_MARGIN_RATIO;
        (min - pad, max + pad)
    } else {
        let half = (min.abs() * FLAT_SPAN_RATIO).max(MIN_FLAT_HALF_SPAN);
        (min - half, max + half)
    }
}

/// Window fitted to the finite samples with a 5% margin on each side.
pub fn auto_window(series: &SampleSeries) -> AxisWindow {
    let Some((x_min, x_max, y_min, y_max)) = series.bounds() else {
        return AxisWindow::UNIT;
    };
    let (x_min, x_max) = padded_range(x_min, x_max);
    let (y_min, y_max) = padded_range(y_min, y_max);

    AxisWindow {
        x_min,
        x_max,
        y_min,
        y_max,
    }
}
