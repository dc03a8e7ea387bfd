//! Type descriptors.
//!
//! Supports: string, integer, float, boolean, datetime, list, string-keyed
//! map, and formations of named fields. Constraint bounds are validated when
//! a descriptor is built, so a descriptor that exists is always well formed.

use crate::errors::{DefinitionError, DefinitionResult, ValidationError, ValidationResult};
use crate::formation::Formation;
use crate::value::{Kind, Value};
use crate::Validate;

// ============================================================================
// Leaf Types
// ============================================================================

/// A unicode string with optional length bounds.
///
/// Lengths are counted in unicode scalar values, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StringType {
    min_length: usize,
    max_length: Option<usize>,
}

impl StringType {
    /// Creates a string descriptor with inclusive length bounds.
    /// `None` leaves the maximum unbounded.
    ///
    /// # Errors
    /// Returns a [`DefinitionError`] if `max_length` is below `min_length`.
    pub fn new(min_length: usize, max_length: Option<usize>) -> DefinitionResult<Self> {
        if let Some(max) = max_length {
            if max < min_length {
                return Err(DefinitionError::LengthBoundsReversed {
                    min: min_length,
                    max,
                });
            }
        }
        Ok(Self {
            min_length,
            max_length,
        })
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Length checks against a raw string. Map keys come through here too,
    /// since they are strings before any `Value` is involved.
    fn check_str(&self, candidate: &str) -> ValidationResult<()> {
        let length = candidate.chars().count();
        if length < self.min_length {
            return Err(ValidationError::too_short(candidate, length, self.min_length));
        }
        if let Some(max) = self.max_length {
            if length > max {
                return Err(ValidationError::too_long(candidate, length, max));
            }
        }
        Ok(())
    }
}

impl Validate for StringType {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        let candidate = value
            .as_str()
            .ok_or_else(|| ValidationError::kind_mismatch(Kind::String, value))?;
        self.check_str(candidate)
    }
}

/// A 64-bit signed integer with optional inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntegerType {
    min_value: Option<i64>,
    max_value: Option<i64>,
}

impl IntegerType {
    /// Creates an integer descriptor with inclusive bounds. `None` leaves
    /// the corresponding side unbounded.
    ///
    /// # Errors
    /// Returns a [`DefinitionError`] if `max_value` is below `min_value`.
    pub fn new(min_value: Option<i64>, max_value: Option<i64>) -> DefinitionResult<Self> {
        if let (Some(min), Some(max)) = (min_value, max_value) {
            if max < min {
                return Err(DefinitionError::IntegerBoundsReversed { min, max });
            }
        }
        Ok(Self {
            min_value,
            max_value,
        })
    }

    /// An integer that must be zero or greater.
    pub fn positive(max_value: Option<i64>) -> DefinitionResult<Self> {
        Self::new(Some(0), max_value)
    }

    /// An integer that must be one or greater.
    pub fn nonzero_positive(max_value: Option<i64>) -> DefinitionResult<Self> {
        Self::new(Some(1), max_value)
    }

    pub fn min_value(&self) -> Option<i64> {
        self.min_value
    }

    pub fn max_value(&self) -> Option<i64> {
        self.max_value
    }
}

impl Validate for IntegerType {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        let candidate = value
            .as_i64()
            .ok_or_else(|| ValidationError::kind_mismatch(Kind::Integer, value))?;
        if let Some(min) = self.min_value {
            if candidate < min {
                return Err(ValidationError::below_minimum(candidate, min));
            }
        }
        if let Some(max) = self.max_value {
            if candidate > max {
                return Err(ValidationError::above_maximum(candidate, max));
            }
        }
        Ok(())
    }
}

/// A 64-bit float with optional inclusive bounds.
///
/// Integral values are accepted wherever a float is expected and compare
/// against the bounds after promotion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FloatType {
    min_value: Option<f64>,
    max_value: Option<f64>,
}

impl FloatType {
    /// Creates a float descriptor with inclusive bounds. `None` leaves the
    /// corresponding side unbounded.
    ///
    /// # Errors
    /// Returns a [`DefinitionError`] if `max_value` is below `min_value`.
    pub fn new(min_value: Option<f64>, max_value: Option<f64>) -> DefinitionResult<Self> {
        if let (Some(min), Some(max)) = (min_value, max_value) {
            if max < min {
                return Err(DefinitionError::FloatBoundsReversed { min, max });
            }
        }
        Ok(Self {
            min_value,
            max_value,
        })
    }

    /// A float that must be zero or greater.
    pub fn positive(max_value: Option<f64>) -> DefinitionResult<Self> {
        Self::new(Some(0.0), max_value)
    }

    pub fn min_value(&self) -> Option<f64> {
        self.min_value
    }

    pub fn max_value(&self) -> Option<f64> {
        self.max_value
    }
}

impl Validate for FloatType {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        let candidate = value
            .as_f64()
            .ok_or_else(|| ValidationError::kind_mismatch(Kind::Float, value))?;
        if let Some(min) = self.min_value {
            if candidate < min {
                return Err(ValidationError::below_minimum(value, min));
            }
        }
        if let Some(max) = self.max_value {
            if candidate > max {
                return Err(ValidationError::above_maximum(value, max));
            }
        }
        Ok(())
    }
}

/// A boolean. Carries no constraints beyond the kind itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BooleanType;

impl BooleanType {
    pub fn new() -> Self {
        Self
    }
}

impl Validate for BooleanType {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        match value {
            Value::Boolean(_) => Ok(()),
            other => Err(ValidationError::kind_mismatch(Kind::Boolean, other)),
        }
    }
}

/// A UTC datetime. Carries no constraints beyond the kind itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatetimeType;

impl DatetimeType {
    pub fn new() -> Self {
        Self
    }
}

impl Validate for DatetimeType {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        match value {
            Value::Datetime(_) => Ok(()),
            other => Err(ValidationError::kind_mismatch(Kind::Datetime, other)),
        }
    }
}

// ============================================================================
// Collection Types
// ============================================================================

/// A homogeneous list whose elements all satisfy one descriptor.
#[derive(Debug, Clone)]
pub struct ListType {
    element_type: Box<SchemaType>,
}

impl ListType {
    /// Creates a list descriptor over the given element type.
    pub fn new(element_type: impl Into<SchemaType>) -> Self {
        Self {
            element_type: Box::new(element_type.into()),
        }
    }

    pub fn element_type(&self) -> &SchemaType {
        &self.element_type
    }
}

impl Validate for ListType {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        let items = value
            .as_list()
            .ok_or_else(|| ValidationError::kind_mismatch(Kind::List, value))?;
        for item in items {
            self.element_type.validate(item)?;
        }
        Ok(())
    }
}

/// A string-keyed map whose values all satisfy one descriptor.
///
/// Keys are checked against a string descriptor, so key length bounds are
/// enforced entry by entry.
#[derive(Debug, Clone)]
pub struct MapType {
    key_type: StringType,
    value_type: Box<SchemaType>,
}

impl MapType {
    /// Creates a map descriptor.
    ///
    /// # Errors
    /// Returns a [`DefinitionError`] if `key_type` is not a string descriptor.
    /// Map keys are textual, so no other kind can describe them.
    pub fn new(
        key_type: impl Into<SchemaType>,
        value_type: impl Into<SchemaType>,
    ) -> DefinitionResult<Self> {
        match key_type.into() {
            SchemaType::String(key_type) => Ok(Self {
                key_type,
                value_type: Box::new(value_type.into()),
            }),
            other => Err(DefinitionError::MapKeyNotString {
                actual: other.kind_name(),
            }),
        }
    }

    pub fn key_type(&self) -> &StringType {
        &self.key_type
    }

    pub fn value_type(&self) -> &SchemaType {
        &self.value_type
    }
}

impl Validate for MapType {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        let entries = value
            .as_map()
            .ok_or_else(|| ValidationError::kind_mismatch(Kind::Map, value))?;
        for (key, item) in entries {
            self.key_type.check_str(key)?;
            self.value_type.validate(item)?;
        }
        Ok(())
    }
}

// ============================================================================
// Descriptor Union
// ============================================================================

/// The closed set of descriptors a schema can be built from.
///
/// Collection types hold their inner descriptors through this enum, which is
/// what keeps nesting uniform: a list of maps of formations needs no special
/// cases anywhere.
#[derive(Debug, Clone)]
pub enum SchemaType {
    String(StringType),
    Integer(IntegerType),
    Float(FloatType),
    Boolean(BooleanType),
    Datetime(DatetimeType),
    List(ListType),
    Map(MapType),
    Formation(Formation),
}

impl SchemaType {
    /// Returns the stable descriptor name used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SchemaType::String(_) => "string",
            SchemaType::Integer(_) => "integer",
            SchemaType::Float(_) => "float",
            SchemaType::Boolean(_) => "boolean",
            SchemaType::Datetime(_) => "datetime",
            SchemaType::List(_) => "list",
            SchemaType::Map(_) => "map",
            SchemaType::Formation(_) => "formation",
        }
    }
}

impl Validate for SchemaType {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        match self {
            SchemaType::String(inner) => inner.validate(value),
            SchemaType::Integer(inner) => inner.validate(value),
            SchemaType::Float(inner) => inner.validate(value),
            SchemaType::Boolean(inner) => inner.validate(value),
            SchemaType::Datetime(inner) => inner.validate(value),
            SchemaType::List(inner) => inner.validate(value),
            SchemaType::Map(inner) => inner.validate(value),
            SchemaType::Formation(inner) => inner.validate(value),
        }
    }
}

impl From<StringType> for SchemaType {
    fn from(inner: StringType) -> Self {
        SchemaType::String(inner)
    }
}

impl From<IntegerType> for SchemaType {
    fn from(inner: IntegerType) -> Self {
        SchemaType::Integer(inner)
    }
}

impl From<FloatType> for SchemaType {
    fn from(inner: FloatType) -> Self {
        SchemaType::Float(inner)
    }
}

impl From<BooleanType> for SchemaType {
    fn from(inner: BooleanType) -> Self {
        SchemaType::Boolean(inner)
    }
}

impl From<DatetimeType> for SchemaType {
    fn from(inner: DatetimeType) -> Self {
        SchemaType::Datetime(inner)
    }
}

impl From<ListType> for SchemaType {
    fn from(inner: ListType) -> Self {
        SchemaType::List(inner)
    }
}

impl From<MapType> for SchemaType {
    fn from(inner: MapType) -> Self {
        SchemaType::Map(inner)
    }
}

impl From<Formation> for SchemaType {
    fn from(inner: Formation) -> Self {
        SchemaType::Formation(inner)
    }
}
