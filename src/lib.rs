pub mod core;

pub use crate::core::dispatch::{compute, simulate};
pub use crate::core::experiment::{ExperimentKind, ParamField};
pub use crate::core::figure::{Figure, Plot};
pub use crate::core::params::{FieldInputs, ParameterSet, ParseError};
