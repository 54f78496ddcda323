use std::collections::BTreeMap;

use thiserror::Error;

use crate::core::experiment::{ExperimentKind, ParamField};

/// A required field could not be turned into a number.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Invalid {field}: '{text}'. Expected a number.")]
    NotANumber { field: ParamField, text: String },

    #[error("Missing value for {field}.")]
    Missing { field: ParamField },
}

impl ParseError {
    pub fn field(&self) -> ParamField {
        match self {
            ParseError::NotANumber { field, .. } | ParseError::Missing { field } => *field,
        }
    }
}

/// Raw text of every parameter field, visible or not.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldInputs {
    texts: [String; ParamField::ALL.len()],
}

impl FieldInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: ParamField, text: impl Into<String>) -> Self {
        self.set(field, text);
        self
    }

    pub fn get(&self, field: ParamField) -> &str {
        &self.texts[field.index()]
    }

    pub fn get_mut(&mut self, field: ParamField) -> &mut String {
        &mut self.texts[field.index()]
    }

    pub fn set(&mut self, field: ParamField, text: impl Into<String>) {
        self.texts[field.index()] = text.into();
    }
}

pub fn parse_field(field: ParamField, text: &str) -> Result<f64, ParseError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| ParseError::NotANumber {
            field,
            text: text.to_string(),
        })
}

/// Parsed values for the fields one experiment reads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParameterSet {
    values: BTreeMap<ParamField, f64>,
}

impl ParameterSet {
    /// Parses every field `kind` needs; fields it does not need are ignored
    /// even when their text is garbage.
    pub fn parse(kind: ExperimentKind, inputs: &FieldInputs) -> Result<Self, ParseError> {
        let mut values = BTreeMap::new();
        for &field in kind.fields() {
            values.insert(field, parse_field(field, inputs.get(field))?);
        }
        Ok(Self { values })
    }

    pub fn insert(&mut self, field: ParamField, value: f64) {
        self.values.insert(field, value);
    }

    pub fn with(mut self, field: ParamField, value: f64) -> Self {
        self.insert(field, value);
        self
    }

    pub fn get(&self, field: ParamField) -> Option<f64> {
        self.values.get(&field).copied()
    }

    pub fn require(&self, field: ParamField) -> Result<f64, ParseError> {
        self.get(field).ok_or(ParseError::Missing { field })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
