//! Error types for schema definition and validation.
//!
//! The two failure families are kept apart. A [`DefinitionError`] means the
//! schema itself is malformed and is raised while building descriptors, before
//! any data is seen. A [`ValidationError`] means a well-formed descriptor
//! rejected a candidate value. Code that constructs schemas at startup and
//! validates payloads at runtime can therefore route the two very differently.

use thiserror::Error;

use crate::value::{Kind, Value};

/// Result alias for descriptor construction.
pub type DefinitionResult<T> = Result<T, DefinitionError>;

/// Result alias for validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// Definition Errors
// ============================================================================

/// A schema definition is malformed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DefinitionError {
    /// A string descriptor was given a maximum length below its minimum.
    #[error("maximum length {max} cannot be less than minimum length {min}")]
    LengthBoundsReversed { min: usize, max: usize },

    /// An integer descriptor was given a maximum below its minimum.
    #[error("maximum value {max} cannot be less than minimum value {min}")]
    IntegerBoundsReversed { min: i64, max: i64 },

    /// A float descriptor was given a maximum below its minimum.
    #[error("maximum value {max} cannot be less than minimum value {min}")]
    FloatBoundsReversed { min: f64, max: f64 },

    /// A map descriptor was given a non-string key type.
    #[error("map keys must be described by a string type, not {actual}")]
    MapKeyNotString { actual: &'static str },

    /// A formation was defined without any fields.
    #[error("formation '{formation}' must define at least one field")]
    EmptyFormation { formation: String },

    /// A formation was defined with two fields of the same name.
    #[error("formation '{formation}' defines duplicate field '{field}'")]
    DuplicateField { formation: String, field: String },
}

// ============================================================================
// Validation Errors
// ============================================================================

/// A candidate value does not conform to its descriptor.
///
/// Validation is fail-fast, so an error always describes the first check
/// that failed in deterministic order.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The value has the wrong kind for its descriptor.
    #[error("{value}: expected {expected} but was {actual}")]
    KindMismatch {
        expected: Kind,
        actual: Kind,
        value: String,
    },

    /// A string is shorter than the descriptor's minimum length.
    #[error("length of '{value}' is {length}, but minimum is {min}")]
    TooShort {
        value: String,
        length: usize,
        min: usize,
    },

    /// A string is longer than the descriptor's maximum length.
    #[error("length of '{value}' is {length}, but maximum is {max}")]
    TooLong {
        value: String,
        length: usize,
        max: usize,
    },

    /// A number is below the descriptor's minimum.
    #[error("{value} is less than minimum {min}")]
    BelowMinimum { value: String, min: String },

    /// A number is above the descriptor's maximum.
    #[error("{value} is greater than maximum {max}")]
    AboveMaximum { value: String, max: String },

    /// A mapping carries a field the schema does not define.
    #[error("{}invalid field '{}'", context_prefix(.context), .field)]
    UnknownField {
        context: Option<String>,
        field: String,
    },

    /// A mapping omits one or more required fields.
    ///
    /// `missing` holds the sorted field names joined by `", "`.
    #[error("{}missing required fields: {}", context_prefix(.context), .missing)]
    MissingRequired {
        context: Option<String>,
        missing: String,
    },
}

fn context_prefix(context: &Option<String>) -> String {
    match context {
        Some(name) => format!("{name}: "),
        None => String::new(),
    }
}

impl ValidationError {
    /// A value of the wrong kind, rendered with its actual kind and payload.
    pub fn kind_mismatch(expected: Kind, actual: &Value) -> Self {
        ValidationError::KindMismatch {
            expected,
            actual: actual.kind(),
            value: actual.to_string(),
        }
    }

    pub fn too_short(value: impl Into<String>, length: usize, min: usize) -> Self {
        ValidationError::TooShort {
            value: value.into(),
            length,
            min,
        }
    }

    pub fn too_long(value: impl Into<String>, length: usize, max: usize) -> Self {
        ValidationError::TooLong {
            value: value.into(),
            length,
            max,
        }
    }

    pub fn below_minimum(value: impl ToString, min: impl ToString) -> Self {
        ValidationError::BelowMinimum {
            value: value.to_string(),
            min: min.to_string(),
        }
    }

    pub fn above_maximum(value: impl ToString, max: impl ToString) -> Self {
        ValidationError::AboveMaximum {
            value: value.to_string(),
            max: max.to_string(),
        }
    }

    pub fn unknown_field(context: Option<&str>, field: impl Into<String>) -> Self {
        ValidationError::UnknownField {
            context: context.map(str::to_string),
            field: field.into(),
        }
    }

    /// `missing` must already be sorted; names are joined for the message.
    pub fn missing_required(context: Option<&str>, missing: &[&str]) -> Self {
        ValidationError::MissingRequired {
            context: context.map(str::to_string),
            missing: missing.join(", "),
        }
    }
}
