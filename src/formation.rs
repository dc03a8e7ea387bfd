//! Formations: named, described collections of typed fields.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::{debug, trace};

use crate::errors::{DefinitionError, DefinitionResult, ValidationError, ValidationResult};
use crate::validator::validate_fields;
use crate::value::{Kind, Value};
use crate::Validate;

/// A single named slot within a formation.
///
/// The descriptor is held as a shared trait object, so a field can carry any
/// validator, built-in or caller-supplied, and fields stay cheap to clone.
#[derive(Clone)]
pub struct Field {
    name: String,
    required: bool,
    descriptor: Arc<dyn Validate>,
}

impl Field {
    /// Creates a field with an explicit required flag.
    pub fn new(
        name: impl Into<String>,
        descriptor: impl Validate + 'static,
        required: bool,
    ) -> Self {
        Self {
            name: name.into(),
            required,
            descriptor: Arc::new(descriptor),
        }
    }

    /// A field that must be present in every conforming value.
    pub fn required(name: impl Into<String>, descriptor: impl Validate + 'static) -> Self {
        Self::new(name, descriptor, true)
    }

    /// A field that may be omitted.
    pub fn optional(name: impl Into<String>, descriptor: impl Validate + 'static) -> Self {
        Self::new(name, descriptor, false)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

impl Validate for Field {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        self.descriptor.validate(value)
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

/// A composite descriptor for a named collection of fields.
///
/// Conforming values are maps that carry every required field, no field the
/// formation does not define, and a valid value in each field present.
#[derive(Debug, Clone)]
pub struct Formation {
    name: String,
    description: String,
    fields: HashMap<String, Field>,
}

impl Formation {
    /// Defines a formation from its constituent fields.
    ///
    /// # Errors
    /// Returns a [`DefinitionError`] if `fields` is empty or two fields
    /// share a name.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        fields: Vec<Field>,
    ) -> DefinitionResult<Self> {
        let name = name.into();
        if fields.is_empty() {
            return Err(DefinitionError::EmptyFormation { formation: name });
        }

        let mut by_name = HashMap::with_capacity(fields.len());
        for field in fields {
            if by_name.contains_key(field.name()) {
                return Err(DefinitionError::DuplicateField {
                    formation: name,
                    field: field.name().to_string(),
                });
            }
            by_name.insert(field.name().to_string(), field);
        }

        let count = by_name.len();
        debug!("defined formation '{name}' with {count} fields");
        Ok(Self {
            name,
            description: description.into(),
            fields: by_name,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The fields keyed by name. Built once at construction, never mutated.
    pub fn fields(&self) -> &HashMap<String, Field> {
        &self.fields
    }
}

impl Validate for Formation {
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        let entries = value
            .as_map()
            .ok_or_else(|| ValidationError::kind_mismatch(Kind::Map, value))?;
        let outcome = validate_fields(&self.fields, entries, Some(&self.name));
        if let Err(err) = &outcome {
            trace!("formation '{}' rejected value: {err}", self.name);
        }
        outcome
    }
}
