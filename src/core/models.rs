//! Closed-form models behind each experiment.
//!
//! Every model samples its curve with [`sample_times`], so a well-formed
//! domain always yields [`SAMPLE_COUNT`](crate::core::series::SAMPLE_COUNT)
//! points and a degenerate one yields only the initial state.

use crate::core::series::{SampleSeries, sample_times};

pub const EARTH_GRAVITY_MPS2: f64 = 9.81;
pub const LINEAR_MOTION_DURATION_S: f64 = 10.0;
pub const COOLING_DURATION: f64 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchInputs {
    pub speed_mps: f64,
    pub angle_deg: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearInputs {
    pub speed_mps: f64,
    pub accel_mps2: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoolingInputs {
    pub initial_temp: f64,
    pub ambient_temp: f64,
    pub coefficient: f64,
}

/// Sampled projectile path in `(x, y)` plus derived scalars.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    pub path: SampleSeries,
    pub flight_time_s: f64,
    pub range_m: f64,
    pub apex_m: f64,
}

/// Height over time for a dropped object.
#[derive(Clone, Debug, PartialEq)]
pub struct FallCurve {
    pub series: SampleSeries,
    pub fall_time_s: f64,
    pub impact_speed_mps: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinearCurve {
    pub series: SampleSeries,
    pub final_position_m: f64,
    pub final_velocity_mps: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CoolingCurve {
    pub series: SampleSeries,
    pub final_temp: f64,
}

pub fn velocity_components(inputs: LaunchInputs) -> (f64, f64) {
    let theta = inputs.angle_deg.to_radians();
    let vx = inputs.speed_mps * theta.cos();
    let vy = inputs.speed_mps * theta.sin();
    (vx, vy)
}

pub fn trajectory_at_time(inputs: LaunchInputs, time_s: f64) -> (f64, f64) {
    let (vx, vy) = velocity_components(inputs);
    let x = vx * time_s;
    let y = (vy * time_s) - (0.5 * EARTH_GRAVITY_MPS2 * time_s * time_s);
    (x, y)
}

/// Time until the projectile returns to launch height. Not clamped: a
/// downward or zero launch gives `T <= 0`.
pub fn flight_time(inputs: LaunchInputs) -> f64 {
    let (_, vy) = velocity_components(inputs);
    2.0 * vy / EARTH_GRAVITY_MPS2
}

pub fn projectile_motion(inputs: LaunchInputs) -> Trajectory {
    let flight_time_s = flight_time(inputs);
    let times = sample_times(flight_time_s);
    let path = SampleSeries::from_times(&times, |t| trajectory_at_time(inputs, t));

    let degenerate = path.len() == 1;
    let (_, vy) = velocity_components(inputs);
    let apex_m = if degenerate {
        0.0
    } else {
        (vy * vy) / (2.0 * EARTH_GRAVITY_MPS2)
    };
    let range_m = path.last().map_or(0.0, |(x, _)| x);

    Trajectory {
        path,
        flight_time_s,
        range_m,
        apex_m,
    }
}

pub fn fall_time(height_m: f64) -> f64 {
    (2.0 * height_m / EARTH_GRAVITY_MPS2).sqrt()
}

pub fn free_fall(height_m: f64) -> FallCurve {
    let fall_time_s = fall_time(height_m);
    let times = sample_times(fall_time_s);
    let series = SampleSeries::from_times(&times, |t| {
        (t, height_m - (0.5 * EARTH_GRAVITY_MPS2 * t * t))
    });
    let impact_speed_mps = if series.len() > 1 {
        EARTH_GRAVITY_MPS2 * fall_time_s
    } else {
        0.0
    };

    FallCurve {
        series,
        fall_time_s,
        impact_speed_mps,
    }
}

pub fn linear_position(inputs: LinearInputs, time_s: f64) -> f64 {
    (inputs.speed_mps * time_s) + (0.5 * inputs.accel_mps2 * time_s * time_s)
}

pub fn linear_motion(inputs: LinearInputs) -> LinearCurve {
    let times = sample_times(LINEAR_MOTION_DURATION_S);
    let series = SampleSeries::from_times(&times, |t| (t, linear_position(inputs, t)));

    LinearCurve {
        series,
        final_position_m: linear_position(inputs, LINEAR_MOTION_DURATION_S),
        final_velocity_mps: inputs.speed_mps + (inputs.accel_mps2 * LINEAR_MOTION_DURATION_S),
    }
}

pub fn temperature_at(inputs: CoolingInputs, time: f64) -> f64 {
    inputs.ambient_temp
        + (inputs.initial_temp - inputs.ambient_temp) * (-inputs.coefficient * time).exp()
}

/// Newton's law of cooling over a fixed duration. Negative coefficients
/// diverge and are returned as computed.
pub fn cooling(inputs: CoolingInputs, duration: f64) -> CoolingCurve {
    let times = sample_times(duration);
    let series = SampleSeries::from_times(&times, |t| (t, temperature_at(inputs, t)));
    let final_temp = series.last().map_or(inputs.initial_temp, |(_, temp)| temp);

    CoolingCurve { series, final_temp }
}

#[cfg(test)]
mod tests {
    use super::{
        COOLING_DURATION, CoolingInputs, LaunchInputs, LinearInputs, cooling, flight_time,
        free_fall, linear_motion, projectile_motion,
    };
    use crate::core::series::SAMPLE_COUNT;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn forty_five_degree_launch_matches_known_values() {
        let trajectory = projectile_motion(LaunchInputs {
            speed_mps: 20.0,
            angle_deg: 45.0,
        });

        assert_eq!(trajectory.path.len(), SAMPLE_COUNT);
        assert_close(trajectory.flight_time_s, 2.8832, 0.0005);
        assert_close(trajectory.apex_m, 10.19, 0.01);
        assert_close(trajectory.range_m, 40.77, 0.01);

        let (_, y_end) = trajectory.path.last().expect("path has samples");
        assert_close(y_end, 0.0, 1e-9);

        let (apex_idx, apex_y) = trajectory
            .path
            .ys()
            .enumerate()
            .fold((0, f64::MIN), |best, (i, y)| if y > best.1 { (i, y) } else { best });
        assert_close(apex_y, 10.19, 0.01);
        let apex_t = apex_idx as f64 * trajectory.flight_time_s / (SAMPLE_COUNT - 1) as f64;
        assert_close(apex_t, trajectory.flight_time_s / 2.0, 0.01);
    }

    #[test]
    fn horizontal_launch_collapses_to_origin() {
        let trajectory = projectile_motion(LaunchInputs {
            speed_mps: 15.0,
            angle_deg: 0.0,
        });

        assert_eq!(trajectory.flight_time_s, 0.0);
        assert_eq!(trajectory.path.points(), &[(0.0, 0.0)]);
        assert_eq!(trajectory.apex_m, 0.0);
        assert_eq!(trajectory.range_m, 0.0);
    }

    #[test]
    fn negative_speed_reports_negative_flight_time() {
        let inputs = LaunchInputs {
            speed_mps: -10.0,
            angle_deg: 30.0,
        };
        assert!(flight_time(inputs) < 0.0);
        assert_eq!(projectile_motion(inputs).path.len(), 1);
    }

    #[test]
    fn hundred_metre_drop() {
        let fall = free_fall(100.0);

        assert_eq!(fall.series.len(), SAMPLE_COUNT);
        assert_close(fall.fall_time_s, 4.515, 0.001);
        assert_eq!(fall.series.first(), Some((0.0, 100.0)));
        let (t_end, y_end) = fall.series.last().expect("series has samples");
        assert_close(t_end, fall.fall_time_s, 1e-12);
        assert_close(y_end, 0.0, 1e-9);
        assert_close(fall.impact_speed_mps, 44.29, 0.01);
    }

    #[test]
    fn negative_height_keeps_single_initial_sample() {
        let fall = free_fall(-5.0);
        assert!(fall.fall_time_s.is_nan());
        assert_eq!(fall.series.points(), &[(0.0, -5.0)]);
        assert_eq!(fall.impact_speed_mps, 0.0);
    }

    #[test]
    fn linear_motion_uses_fixed_ten_second_window() {
        let curve = linear_motion(LinearInputs {
            speed_mps: 3.0,
            accel_mps2: 2.0,
        });

        assert_eq!(curve.series.len(), SAMPLE_COUNT);
        assert_eq!(curve.series.first(), Some((0.0, 0.0)));
        assert_eq!(curve.series.last(), Some((10.0, 130.0)));
        assert_close(curve.final_position_m, 130.0, 1e-12);
        assert_close(curve.final_velocity_mps, 23.0, 1e-12);
    }

    #[test]
    fn cooling_scenario() {
        let curve = cooling(
            CoolingInputs {
                initial_temp: 100.0,
                ambient_temp: 20.0,
                coefficient: 0.1,
            },
            COOLING_DURATION,
        );

        assert_eq!(curve.series.len(), SAMPLE_COUNT);
        assert_eq!(curve.series.first(), Some((0.0, 100.0)));
        assert_close(curve.final_temp, 23.98, 0.01);
        assert!(curve.series.ys().collect::<Vec<_>>().windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn negative_cooling_coefficient_diverges() {
        let curve = cooling(
            CoolingInputs {
                initial_temp: 30.0,
                ambient_temp: 20.0,
                coefficient: -0.1,
            },
            COOLING_DURATION,
        );

        assert_close(curve.final_temp, 20.0 + 10.0 * 3.0f64.exp(), 1e-9);
    }
}
