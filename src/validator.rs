//! Shared validation of named values against a set of field definitions.

use std::collections::{BTreeMap, HashMap};

use crate::errors::{ValidationError, ValidationResult};
use crate::formation::Field;
use crate::value::Value;
use crate::Validate;

/// Checks a mapping of named values against field definitions.
///
/// Three things must hold, checked in this order:
/// 1. every entry names a defined field (entries are visited in key order,
///    so the first offender is deterministic),
/// 2. every entry's value satisfies its field's descriptor,
/// 3. every required field is present.
///
/// The first failure is returned. `context`, when given, prefixes field
/// errors so callers can tell nested mappings apart; errors raised by field
/// descriptors themselves pass through untouched.
pub fn validate_fields(
    fields: &HashMap<String, Field>,
    value: &BTreeMap<String, Value>,
    context: Option<&str>,
) -> ValidationResult<()> {
    for (name, item) in value {
        let field = fields
            .get(name)
            .ok_or_else(|| ValidationError::unknown_field(context, name.as_str()))?;
        field.validate(item)?;
    }

    let mut missing: Vec<&str> = fields
        .values()
        .filter(|field| field.is_required() && !value.contains_key(field.name()))
        .map(|field| field.name())
        .collect();
    if !missing.is_empty() {
        missing.sort_unstable();
        return Err(ValidationError::missing_required(context, &missing));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BooleanType, IntegerType, StringType};
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    /// Stand-in descriptor that accepts everything and records what it saw.
    #[derive(Debug, Clone, Default)]
    struct RecordingType {
        seen: Arc<Mutex<Vec<Value>>>,
    }

    impl RecordingType {
        fn taken(&self) -> Vec<Value> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl Validate for RecordingType {
        fn validate(&self, value: &Value) -> ValidationResult<()> {
            self.seen.lock().unwrap().push(value.clone());
            Ok(())
        }
    }

    fn field_map(fields: Vec<Field>) -> HashMap<String, Field> {
        fields
            .into_iter()
            .map(|field| (field.name().to_string(), field))
            .collect()
    }

    fn entries(raw: serde_json::Value) -> BTreeMap<String, Value> {
        match Value::from(raw) {
            Value::Map(entries) => entries,
            other => panic!("expected a map, got {other}"),
        }
    }

    #[test]
    fn test_accepts_conforming_values() {
        let fields = field_map(vec![
            Field::required("name", StringType::default()),
            Field::optional("age", IntegerType::default()),
        ]);

        let value = entries(json!({ "name": "ada", "age": 36 }));
        assert!(validate_fields(&fields, &value, None).is_ok());
    }

    #[test]
    fn test_optional_fields_may_be_omitted() {
        let fields = field_map(vec![
            Field::required("name", StringType::default()),
            Field::optional("age", IntegerType::default()),
        ]);

        let value = entries(json!({ "name": "ada" }));
        assert!(validate_fields(&fields, &value, None).is_ok());
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let fields = field_map(vec![Field::optional("name", StringType::default())]);

        let value = entries(json!({ "name": "ada", "nickname": "a" }));
        let err = validate_fields(&fields, &value, Some("User")).unwrap_err();
        assert_eq!(err.to_string(), "User: invalid field 'nickname'");
    }

    #[test]
    fn test_rejects_missing_required_fields_sorted() {
        let fields = field_map(vec![
            Field::required("name", StringType::default()),
            Field::required("active", BooleanType::new()),
            Field::optional("age", IntegerType::default()),
        ]);

        let value = entries(json!({ "age": 36 }));
        let err = validate_fields(&fields, &value, Some("User")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "User: missing required fields: active, name"
        );
    }

    #[test]
    fn test_unknown_field_reported_before_missing() {
        let fields = field_map(vec![Field::required("name", StringType::default())]);

        let value = entries(json!({ "nickname": "a" }));
        let err = validate_fields(&fields, &value, None).unwrap_err();
        assert_eq!(err.to_string(), "invalid field 'nickname'");
    }

    #[test]
    fn test_first_unknown_field_in_key_order_wins() {
        let fields = field_map(vec![Field::optional("name", StringType::default())]);

        let value = entries(json!({ "z_extra": 1, "a_extra": 2, "name": "ada" }));
        let err = validate_fields(&fields, &value, None).unwrap_err();
        assert_eq!(err.to_string(), "invalid field 'a_extra'");
    }

    #[test]
    fn test_field_errors_pass_through_without_context() {
        let fields = field_map(vec![Field::required(
            "age",
            IntegerType::positive(None).unwrap(),
        )]);

        let value = entries(json!({ "age": -1 }));
        let err = validate_fields(&fields, &value, Some("User")).unwrap_err();
        assert_eq!(err.to_string(), "-1 is less than minimum 0");
    }

    #[test]
    fn test_present_fields_validated_even_when_others_are_missing() {
        let present = RecordingType::default();
        let fields = field_map(vec![
            Field::required("first", present.clone()),
            Field::required("second", StringType::default()),
        ]);

        let value = entries(json!({ "first": "valueOne" }));
        let err = validate_fields(&fields, &value, None).unwrap_err();
        assert_eq!(err.to_string(), "missing required fields: second");
        assert_eq!(present.taken(), vec![Value::from("valueOne")]);
    }

    #[test]
    fn test_each_field_checked_with_its_own_value() {
        let first = RecordingType::default();
        let second = RecordingType::default();
        let fields = field_map(vec![
            Field::required("a", first.clone()),
            Field::required("b", second.clone()),
        ]);

        let value = entries(json!({ "a": 1, "b": true }));
        assert!(validate_fields(&fields, &value, None).is_ok());
        assert_eq!(first.taken(), vec![Value::Integer(1)]);
        assert_eq!(second.taken(), vec![Value::Boolean(true)]);
    }

    #[test]
    fn test_no_required_fields_accepts_empty_value() {
        let fields = field_map(vec![Field::optional("note", StringType::default())]);
        assert!(validate_fields(&fields, &BTreeMap::new(), None).is_ok());
    }
}
