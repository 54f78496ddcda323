//! Fixed-length sampled curves.

pub const SAMPLE_COUNT: usize = 500;

/// Ordered `(x, y)` samples of one curve, consumed by a single render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleSeries {
    points: Vec<(f64, f64)>,
}

impl SampleSeries {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Evaluates `f` at every time in `times`.
    pub fn from_times(times: &[f64], f: impl Fn(f64) -> (f64, f64)) -> Self {
        Self {
            points: times.iter().map(|&t| f(t)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    pub fn first(&self) -> Option<(f64, f64)> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<(f64, f64)> {
        self.points.last().copied()
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.1)
    }

    /// `(x_min, x_max, y_min, y_max)` over the finite samples only.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.points
            .iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .fold(None, |acc, &(x, y)| match acc {
                None => Some((x, x, y, y)),
                Some((x0, x1, y0, y1)) => Some((x0.min(x), x1.max(x), y0.min(y), y1.max(y))),
            })
    }
}

/// Evenly spaced values over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + (i as f64 * step)
                    }
                })
                .collect()
        }
    }
}

/// Sample times over `[0, end_s]`.
///
/// An endpoint that is not a finite positive number collapses the domain to
/// the single instant `t = 0`.
pub fn sample_times(end_s: f64) -> Vec<f64> {
    if end_s.is_finite() && end_s > 0.0 {
        linspace(0.0, end_s, SAMPLE_COUNT)
    } else {
        vec![0.0]
    }
}

#[cfg(test)]
mod tests {
    use super::{SAMPLE_COUNT, SampleSeries, linspace, sample_times};

    #[test]
    fn linspace_hits_both_endpoints_exactly() {
        let values = linspace(0.0, 2.8835, SAMPLE_COUNT);
        assert_eq!(values.len(), SAMPLE_COUNT);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[SAMPLE_COUNT - 1], 2.8835);
        assert!(values.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn linspace_small_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
        assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn degenerate_endpoints_collapse_to_origin() {
        for end in [0.0, -4.0, f64::NAN, f64::INFINITY] {
            assert_eq!(sample_times(end), vec![0.0], "end={end}");
        }
        assert_eq!(sample_times(30.0).len(), SAMPLE_COUNT);
    }

    #[test]
    fn bounds_skip_non_finite_samples() {
        let series = SampleSeries::new(vec![(0.0, 1.0), (f64::NAN, 50.0), (2.0, -3.0)]);
        assert_eq!(series.bounds(), Some((0.0, 2.0, -3.0, 1.0)));
        assert_eq!(SampleSeries::default().bounds(), None);
    }
}
