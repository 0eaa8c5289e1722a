//! Record schema validation.
//!
//! This module provides [`RecordSchema`] for objects used as dictionaries:
//! every string key is validated by one validator and every value by another.

use indexmap::IndexMap;

use crate::path::AccessPath;
use crate::validation::{record, ValidationContext};
use crate::value::Value;

use super::traits::Validator;

/// Accepts objects whose every string key and every value conform.
///
/// Keys are presented to the key validator as string values, so
/// `Schema::number_string()` restricts a record to numeric keys. A key that
/// fails and the value under it each record the same `path.key`; a
/// `__proto__` key is skipped.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Schema, Validator, Value};
/// use serde_json::json;
///
/// let scores = Schema::record(Schema::string(), Schema::number());
///
/// assert!(scores.is_valid(&Value::from(json!({"alice": 1, "bob": 2}))));
/// assert!(!scores.is_valid(&Value::from(json!({"alice": "high"}))));
/// ```
#[derive(Debug, Clone)]
pub struct RecordSchema<K, V> {
    key: K,
    value: V,
}

impl<K: Validator, V: Validator> RecordSchema<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns the key validator.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value validator.
    pub fn value(&self) -> &V {
        &self.value
    }
}

impl<K: Validator, V: Validator> Validator for RecordSchema<K, V> {
    type Output = IndexMap<String, V::Output>;

    fn check(
        &self,
        input: &Value,
        mut ctx: Option<&mut ValidationContext>,
        path: &AccessPath,
    ) -> bool {
        let Some(object) = input.as_object() else {
            return false;
        };

        let mut failed = false;
        for (key, value) in object.iter().filter(|(key, _)| *key != "__proto__") {
            let entry_path = path.push_key(key.as_str());

            let key_value = Value::String(key.clone());
            if !self.key.check(&key_value, ctx.as_deref_mut(), &entry_path) {
                failed = true;
                record(ctx.as_deref_mut(), entry_path.clone());
            }
            if !self.value.check(value, ctx.as_deref_mut(), &entry_path) {
                failed = true;
                record(ctx.as_deref_mut(), entry_path);
            }
        }
        !failed
    }

    fn project(&self, input: &Value) -> Option<Self::Output> {
        input
            .as_object()?
            .iter()
            .filter(|(key, _)| *key != "__proto__")
            .map(|(key, value)| {
                self.key.project(&Value::String(key.clone()))?;
                Some((key.clone(), self.value.project(value)?))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use serde_json::json;

    fn paths(ctx: &ValidationContext) -> Vec<String> {
        ctx.errors().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_record_basic() {
        let schema = RecordSchema::new(Schema::string(), Schema::string());
        assert!(schema.is_valid(&Value::from(json!({}))));
        assert!(schema.is_valid(&Value::from(json!({"a": "b"}))));
        assert!(!schema.is_valid(&Value::from(json!({"a": 1}))));
        assert!(!schema.is_valid(&Value::from(json!([]))));
        assert!(!schema.is_valid(&Value::Null));
    }

    #[test]
    fn test_record_numeric_keys() {
        let schema = RecordSchema::new(Schema::number_string(), Schema::number());
        assert!(schema.is_valid(&Value::from(json!({"0": 0}))));
        assert!(!schema.is_valid(&Value::from(json!({"a": 1}))));
    }

    #[test]
    fn test_record_key_and_value_record_separately() {
        let schema = RecordSchema::new(Schema::number_string(), Schema::number());
        let mut ctx = ValidationContext::new();

        assert!(!schema.validate(&Value::from(json!({"a": "x", "1": 1, "b": 2})), &mut ctx));
        assert_eq!(paths(&ctx), vec!["a", "a", "b"]);
    }

    #[test]
    fn test_record_nested_paths() {
        let schema = RecordSchema::new(Schema::string(), Schema::array(Schema::number()));
        let mut ctx = ValidationContext::new();

        assert!(!schema.validate(&Value::from(json!({"xs": [1, "2"]})), &mut ctx));
        assert_eq!(paths(&ctx), vec!["xs[1]", "xs"]);
    }

    #[test]
    fn test_record_skips_proto_key() {
        let schema = RecordSchema::new(Schema::string(), Schema::number());
        assert!(schema.is_valid(&Value::from(json!({"__proto__": "x", "a": 1}))));

        let projected = schema
            .project(&Value::from(json!({"__proto__": "x", "a": 1})))
            .unwrap();
        assert_eq!(projected.len(), 1);
    }

    #[test]
    fn test_record_projection_keeps_order() {
        let schema = RecordSchema::new(Schema::string(), Schema::u8());
        let projected = schema
            .project(&Value::from(json!({"z": 1, "a": 2})))
            .unwrap();
        assert_eq!(projected.into_iter().collect::<Vec<_>>(), vec![
            ("z".to_string(), 1u8),
            ("a".to_string(), 2u8)
        ]);
    }
}
