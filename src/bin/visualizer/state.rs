use chrono::Local;
use experiment_visualizer::core::animation::MarkerAnimation;
use experiment_visualizer::{ExperimentKind, FieldInputs, Plot, simulate};
use log::info;

pub(crate) struct AppRuntime {
    pub(crate) selected: ExperimentKind,
    pub(crate) inputs: FieldInputs,
    pub(crate) plot: Plot,
    pub(crate) animation: Option<MarkerAnimation>,
    pub(crate) status_line: String,
}

fn clock() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        Self {
            selected: ExperimentKind::default(),
            inputs: FieldInputs::new(),
            plot: Plot::Empty,
            animation: None,
            status_line: "Ready".to_string(),
        }
    }

    /// Switches experiment and drops whatever was plotted for the old one.
    pub(crate) fn select(&mut self, kind: ExperimentKind) {
        if kind == self.selected {
            return;
        }
        info!("Switched experiment: {} -> {kind}", self.selected);
        self.selected = kind;
        self.plot = Plot::Empty;
        self.animation = None;
        self.status_line = format!("Switched to {kind}");
    }

    /// Runs the selected experiment. A new run replaces any animation still
    /// in flight.
    pub(crate) fn run_simulation(&mut self) {
        self.plot = simulate(self.selected, &self.inputs);
        self.animation = match &self.plot {
            Plot::Chart(figure) if figure.is_animated() => {
                Some(MarkerAnimation::new(figure.series.clone()))
            }
            _ => None,
        };
        self.status_line = match self.plot {
            Plot::Invalid => format!("Invalid input for {} at {}", self.selected, clock()),
            _ => format!("Simulated {} at {}", self.selected, clock()),
        };
    }

    pub(crate) fn marker(&self) -> Option<(f64, f64)> {
        self.animation.as_ref().and_then(MarkerAnimation::marker)
    }

    pub(crate) fn set_copied_status(&mut self) {
        self.status_line = format!("Copied SVG snapshot at {}", clock());
    }
}

#[cfg(test)]
mod tests {
    use super::AppRuntime;
    use experiment_visualizer::{ExperimentKind, ParamField, Plot};

    fn projectile_runtime() -> AppRuntime {
        let mut state = AppRuntime::new();
        state.inputs.set(ParamField::Velocity, "20");
        state.inputs.set(ParamField::Angle, "45");
        state
    }

    #[test]
    fn switching_experiment_discards_plot_and_animation() {
        let mut state = projectile_runtime();
        state.run_simulation();
        assert!(matches!(state.plot, Plot::Chart(_)));
        assert!(state.animation.is_some());

        state.select(ExperimentKind::FreeFall);
        assert_eq!(state.selected, ExperimentKind::FreeFall);
        assert!(matches!(state.plot, Plot::Empty));
        assert!(state.animation.is_none());
        assert_eq!(state.marker(), None);
    }

    #[test]
    fn new_run_restarts_animation_from_first_frame() {
        let mut state = projectile_runtime();
        state.run_simulation();
        if let Some(animation) = state.animation.as_mut() {
            animation.advance(0.0);
            for _ in 0..40 {
                animation.advance(0.010);
            }
        }
        let before = state.animation.as_ref().and_then(|a| a.frame_index());
        assert!(before.is_some_and(|index| index > 0));

        state.run_simulation();
        let animation = state.animation.as_mut().expect("projectile animates");
        assert_eq!(animation.frame_index(), None);
        assert_eq!(animation.advance(0.0), Some((0.0, 0.0)));
    }

    #[test]
    fn invalid_run_has_no_animation() {
        let mut state = projectile_runtime();
        state.run_simulation();
        state.inputs.set(ParamField::Velocity, "fast");

        state.run_simulation();
        assert!(matches!(state.plot, Plot::Invalid));
        assert!(state.animation.is_none());
        assert!(state.status_line.starts_with("Invalid input for Projectile Motion"));
    }

    #[test]
    fn hidden_field_text_survives_a_switch() {
        let mut state = projectile_runtime();
        state.select(ExperimentKind::Cooling);
        state.inputs.set(ParamField::CoolK, "0.1");
        state.select(ExperimentKind::ProjectileMotion);

        assert_eq!(state.inputs.get(ParamField::Velocity), "20");
        assert_eq!(state.inputs.get(ParamField::CoolK), "0.1");
        state.run_simulation();
        assert!(matches!(state.plot, Plot::Chart(_)));
    }
}
