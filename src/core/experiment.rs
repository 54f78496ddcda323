use std::fmt;

/// One of the user-editable numeric parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParamField {
    Velocity,
    Angle,
    Height,
    Accel,
    TempInit,
    TempEnv,
    CoolK,
}

impl ParamField {
    /// Form order.
    pub const ALL: [ParamField; 7] = [
        ParamField::Velocity,
        ParamField::Angle,
        ParamField::Height,
        ParamField::Accel,
        ParamField::TempInit,
        ParamField::TempEnv,
        ParamField::CoolK,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ParamField::Velocity => "velocity",
            ParamField::Angle => "angle",
            ParamField::Height => "height",
            ParamField::Accel => "accel",
            ParamField::TempInit => "temp_init",
            ParamField::TempEnv => "temp_env",
            ParamField::CoolK => "cool_k",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ParamField::Velocity => "Initial Velocity",
            ParamField::Angle => "Launch Angle",
            ParamField::Height => "Initial Height",
            ParamField::Accel => "Acceleration",
            ParamField::TempInit => "Initial Temp",
            ParamField::TempEnv => "Ambient Temp",
            ParamField::CoolK => "Cooling Coefficient k",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            ParamField::Velocity => "m/s",
            ParamField::Angle => "degrees",
            ParamField::Height => "m",
            ParamField::Accel => "m/s^2",
            ParamField::TempInit | ParamField::TempEnv => "C",
            ParamField::CoolK => "1/min",
        }
    }

    /// Form label, e.g. `Initial Velocity (m/s):`.
    pub fn label(self) -> String {
        format!("{} ({}):", self.name(), self.unit())
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ParamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The closed set of experiments offered in the selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExperimentKind {
    #[default]
    ProjectileMotion,
    FreeFall,
    LinearMotion,
    Cooling,
}

impl ExperimentKind {
    /// Selector order.
    pub const ALL: [ExperimentKind; 4] = [
        ExperimentKind::ProjectileMotion,
        ExperimentKind::FreeFall,
        ExperimentKind::LinearMotion,
        ExperimentKind::Cooling,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExperimentKind::ProjectileMotion => "Projectile Motion",
            ExperimentKind::FreeFall => "Free Fall",
            ExperimentKind::LinearMotion => "Linear Motion",
            ExperimentKind::Cooling => "Cooling",
        }
    }

    /// Fields read by this experiment, in form order.
    pub fn fields(self) -> &'static [ParamField] {
        match self {
            ExperimentKind::ProjectileMotion => &[ParamField::Velocity, ParamField::Angle],
            ExperimentKind::FreeFall => &[ParamField::Height],
            ExperimentKind::LinearMotion => &[ParamField::Velocity, ParamField::Accel],
            ExperimentKind::Cooling => &[
                ParamField::TempInit,
                ParamField::TempEnv,
                ParamField::CoolK,
            ],
        }
    }

    pub fn uses(self, field: ParamField) -> bool {
        self.fields().contains(&field)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn labels() -> [&'static str; 4] {
        Self::ALL.map(Self::label)
    }
}

impl fmt::Display for ExperimentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::{ExperimentKind, ParamField};

    #[test]
    fn field_ownership_matches_form() {
        let owners = |field: ParamField| -> Vec<ExperimentKind> {
            ExperimentKind::ALL
                .into_iter()
                .filter(|kind| kind.uses(field))
                .collect()
        };

        assert_eq!(
            owners(ParamField::Velocity),
            vec![ExperimentKind::ProjectileMotion, ExperimentKind::LinearMotion]
        );
        assert_eq!(owners(ParamField::Angle), vec![ExperimentKind::ProjectileMotion]);
        assert_eq!(owners(ParamField::Height), vec![ExperimentKind::FreeFall]);
        assert_eq!(owners(ParamField::Accel), vec![ExperimentKind::LinearMotion]);
        for field in [ParamField::TempInit, ParamField::TempEnv, ParamField::CoolK] {
            assert_eq!(owners(field), vec![ExperimentKind::Cooling]);
        }
    }

    #[test]
    fn selector_index_round_trips() {
        for kind in ExperimentKind::ALL {
            assert_eq!(ExperimentKind::from_index(kind.index()), Some(kind));
        }
        assert_eq!(ExperimentKind::labels()[1], "Free Fall");
        assert_eq!(ExperimentKind::from_index(4), None);
    }

    #[test]
    fn form_labels_carry_their_units() {
        assert_eq!(ParamField::Velocity.label(), "Initial Velocity (m/s):");
        assert_eq!(ParamField::Angle.label(), "Launch Angle (degrees):");
        assert_eq!(ParamField::CoolK.label(), "Cooling Coefficient k (1/min):");
        for field in ParamField::ALL {
            assert!(field.label().contains(field.unit()), "{field}");
        }
        assert_eq!(ParamField::CoolK.key(), "cool_k");
        assert_eq!(ParamField::TempEnv.to_string(), "temp_env");
    }

    #[test]
    fn default_selection_is_projectile() {
        assert_eq!(ExperimentKind::default(), ExperimentKind::ProjectileMotion);
    }
}
