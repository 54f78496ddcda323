//! Maps a selected experiment and its raw inputs to a plot.

use log::{debug, info, warn};

use crate::core::experiment::{ExperimentKind, ParamField};
use crate::core::figure::{Plot, render};
use crate::core::models::{
    COOLING_DURATION, CoolingCurve, CoolingInputs, FallCurve, LaunchInputs, LinearCurve,
    LinearInputs, Trajectory, cooling, free_fall, linear_motion, projectile_motion,
};
use crate::core::params::{FieldInputs, ParameterSet, ParseError};
use crate::core::series::SampleSeries;

/// Result of running one experiment's model.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Projectile(Trajectory),
    FreeFall(FallCurve),
    LinearMotion(LinearCurve),
    Cooling(CoolingCurve),
}

impl Outcome {
    pub fn kind(&self) -> ExperimentKind {
        match self {
            Outcome::Projectile(_) => ExperimentKind::ProjectileMotion,
            Outcome::FreeFall(_) => ExperimentKind::FreeFall,
            Outcome::LinearMotion(_) => ExperimentKind::LinearMotion,
            Outcome::Cooling(_) => ExperimentKind::Cooling,
        }
    }

    pub fn series(&self) -> &SampleSeries {
        match self {
            Outcome::Projectile(trajectory) => &trajectory.path,
            Outcome::FreeFall(fall) => &fall.series,
            Outcome::LinearMotion(curve) => &curve.series,
            Outcome::Cooling(curve) => &curve.series,
        }
    }

    pub fn into_series(self) -> SampleSeries {
        match self {
            Outcome::Projectile(trajectory) => trajectory.path,
            Outcome::FreeFall(fall) => fall.series,
            Outcome::LinearMotion(curve) => curve.series,
            Outcome::Cooling(curve) => curve.series,
        }
    }

    /// One-line readout of the derived scalars.
    pub fn summary(&self) -> String {
        match self {
            Outcome::Projectile(t) => format!(
                "Flight: {:.2} s | Range: {:.2} m | Apex: {:.2} m",
                t.flight_time_s, t.range_m, t.apex_m
            ),
            Outcome::FreeFall(f) => format!(
                "Fall time: {:.2} s | Impact speed: {:.2} m/s",
                f.fall_time_s, f.impact_speed_mps
            ),
            Outcome::LinearMotion(c) => format!(
                "Position at 10 s: {:.2} m | Velocity at 10 s: {:.2} m/s",
                c.final_position_m, c.final_velocity_mps
            ),
            Outcome::Cooling(c) => format!(
                "Temperature at {COOLING_DURATION:.0} min: {:.2} C",
                c.final_temp
            ),
        }
    }
}

/// Runs the model for `kind` with already-parsed parameters.
pub fn compute(kind: ExperimentKind, params: &ParameterSet) -> Result<Outcome, ParseError> {
    let outcome = match kind {
        ExperimentKind::ProjectileMotion => Outcome::Projectile(projectile_motion(LaunchInputs {
            speed_mps: params.require(ParamField::Velocity)?,
            angle_deg: params.require(ParamField::Angle)?,
        })),
        ExperimentKind::FreeFall => {
            Outcome::FreeFall(free_fall(params.require(ParamField::Height)?))
        }
        ExperimentKind::LinearMotion => Outcome::LinearMotion(linear_motion(LinearInputs {
            speed_mps: params.require(ParamField::Velocity)?,
            accel_mps2: params.require(ParamField::Accel)?,
        })),
        ExperimentKind::Cooling => Outcome::Cooling(cooling(
            CoolingInputs {
                initial_temp: params.require(ParamField::TempInit)?,
                ambient_temp: params.require(ParamField::TempEnv)?,
                coefficient: params.require(ParamField::CoolK)?,
            },
            COOLING_DURATION,
        )),
    };
    Ok(outcome)
}

/// Parses the fields `kind` needs, runs its model and builds the figure.
///
/// Unparseable input never escapes: it yields [`Plot::Invalid`] and no
/// series at all.
pub fn simulate(kind: ExperimentKind, inputs: &FieldInputs) -> Plot {
    let outcome = ParameterSet::parse(kind, inputs).and_then(|params| compute(kind, &params));
    match outcome {
        Ok(outcome) => {
            info!("Simulated {kind}: {}", outcome.summary());
            debug!("{kind} produced {} samples", outcome.series().len());
            Plot::Chart(render(outcome))
        }
        Err(err) => {
            warn!("Rejected {kind} input: {err}");
            Plot::Invalid
        }
    }
}
