//! formant - strict, schema-first description and validation of structured values
//!
//! Schemas are built from typed descriptors: bounded strings and numbers,
//! booleans, datetimes, lists, string-keyed maps, and named formations of
//! required and optional fields. Malformed schemas fail at construction with
//! a [`DefinitionError`]; nonconforming values fail at validation with the
//! first [`ValidationError`] found, in deterministic order.
//!
//! ```
//! use formant::{Field, Formation, IntegerType, StringType, Validate, Value};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let user = Formation::new(
//!     "User",
//!     "A registered user",
//!     vec![
//!         Field::required("name", StringType::new(1, Some(64))?),
//!         Field::optional("age", IntegerType::positive(None)?),
//!     ],
//! )?;
//!
//! let candidate = Value::from(serde_json::json!({ "name": "ada", "age": 36 }));
//! user.validate(&candidate)?;
//! # Ok(())
//! # }
//! ```

mod errors;
mod formation;
mod types;
mod validator;
mod value;

pub use errors::{DefinitionError, DefinitionResult, ValidationError, ValidationResult};
pub use formation::{Field, Formation};
pub use types::{
    BooleanType, DatetimeType, FloatType, IntegerType, ListType, MapType, SchemaType, StringType,
};
pub use validator::validate_fields;
pub use value::{Kind, Value};

/// The one capability every descriptor exposes.
///
/// Implementations are immutable once built and shareable across threads,
/// which lets a [`Field`] hold any descriptor as `Arc<dyn Validate>`,
/// caller-supplied ones included.
pub trait Validate: Send + Sync {
    /// Checks `value` against this descriptor, reporting the first
    /// nonconformance found.
    fn validate(&self, value: &Value) -> ValidationResult<()>;
}
